use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::api::{ApiError, HelloClient};
use crate::page::OutputPanel;

/// What to do when overlapping clicks race.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApplyPolicy {
    /// Apply every response as it resolves; whichever completes last
    /// determines the final text. The as-is browser behavior.
    #[default]
    LastResolvedWins,
    /// Tag each click with a generation and discard responses that resolve
    /// after a newer click's response has landed. The in-flight request is
    /// not cancelled, only its application is suppressed.
    LatestOnly,
}

/// Result of one activation, as seen by the caller. Failures are carried
/// separately in `ApiError` so the caller decides the user-visible handling.
#[derive(Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No listener attached yet; no request was made.
    NotReady,
    /// The response's `message` was written to the output panel.
    Rendered(String),
    /// A newer click's response already landed; this one was discarded.
    Superseded,
}

/// The click-to-fetch contract: per activation, one outbound GET and at most
/// one display mutation. No queueing, no mutual exclusion between clicks.
#[derive(Debug)]
pub struct ClickHandler {
    client: HelloClient,
    output: OutputPanel,
    policy: ApplyPolicy,
    generation: AtomicU64,
}

impl ClickHandler {
    pub const fn new(client: HelloClient, output: OutputPanel, policy: ApplyPolicy) -> Self {
        Self {
            client,
            output,
            policy,
            generation: AtomicU64::new(0),
        }
    }

    /// One activation: GET, decode, apply the message to the output panel.
    /// On failure the panel is left untouched and the error is returned.
    pub async fn on_click(&self) -> Result<ClickOutcome, ApiError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let message = self.client.fetch_message().await?;

        let applied = match self.policy {
            ApplyPolicy::LastResolvedWins => {
                self.output.overwrite(&message);
                true
            }
            ApplyPolicy::LatestOnly => self.output.overwrite_if_newest(generation, &message),
        };

        if applied {
            Ok(ClickOutcome::Rendered(message))
        } else {
            debug!(generation, "stale hello response discarded");
            Ok(ClickOutcome::Superseded)
        }
    }
}
