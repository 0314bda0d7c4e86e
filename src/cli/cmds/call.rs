use std::error::Error;

use clap::Args;
use tracing::error;

use crate::api::HelloClient;
use crate::cli::CmdRunner;
use crate::handler::{ApplyPolicy, ClickOutcome};
use crate::page::Page;

#[derive(Clone, Args)]
pub struct Cmd {
    /// Base URL of the server hosting /api/hello
    #[arg(long, default_value = "http://localhost:5000")]
    pub url: String,

    /// Adds the fixed name query parameter to the request
    #[arg(long)]
    pub name: Option<String>,

    /// Apply only the most recently issued click's response
    #[arg(long)]
    pub latest_only: bool,
}

impl Cmd {
    fn policy(&self) -> ApplyPolicy {
        if self.latest_only {
            ApplyPolicy::LatestOnly
        } else {
            ApplyPolicy::LastResolvedWins
        }
    }
}

impl CmdRunner for Cmd {
    async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut page = Page::new();
        page.finish_load(HelloClient::new(&self.url, self.name.clone()), self.policy());

        match page.click().await {
            Ok(ClickOutcome::Rendered(message)) => println!("{message}"),
            Ok(outcome) => error!("click produced no render: {outcome:?}"),
            Err(e) => {
                // The panel stays untouched on failure; show a placeholder
                // instead of silence.
                error!("hello request failed: {e}");
                println!("(no message)");
            }
        }

        Ok(())
    }
}
