use std::error::Error;
use std::sync::Arc;

use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{debug, error};

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
        let page = Arc::new(page);

        println!("press enter to call the api, ctrl-d to quit");

        // Each line is one click. Clicks are spawned, not awaited in turn,
        // so rapid input produces overlapping in-flight requests just like
        // rapid clicks in a browser.
        let mut clicks = JoinSet::new();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(_line) = lines.next_line().await? {
            let page = Arc::clone(&page);
            clicks.spawn(async move {
                match page.click().await {
                    Ok(ClickOutcome::Rendered(message)) => println!("{message}"),
                    Ok(ClickOutcome::Superseded) => debug!("superseded by a newer click"),
                    Ok(ClickOutcome::NotReady) => {}
                    Err(e) => error!("hello request failed: {e}"),
                }
            });
        }

        // Let in-flight requests finish before reporting the final panel.
        while clicks.join_next().await.is_some() {}

        println!("final output: {}", page.output().text());

        Ok(())
    }
}
