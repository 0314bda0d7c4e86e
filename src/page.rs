use std::sync::{Arc, Mutex};

use crate::api::{ApiError, HelloClient};
use crate::handler::{ApplyPolicy, ClickHandler, ClickOutcome};

/// The `output` element of the hosting page: a long-lived text region shared
/// across in-flight fetches. Writes overwrite the whole content; with no
/// further guard the last write wins.
#[derive(Debug, Clone, Default)]
pub struct OutputPanel {
    inner: Arc<Mutex<PanelState>>,
}

#[derive(Debug, Default)]
struct PanelState {
    text: String,
    newest_applied: u64,
}

impl OutputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.inner.lock().map_or_else(|_| String::new(), |s| s.text.clone())
    }

    /// Unconditional overwrite: last-resolved-wins.
    pub fn overwrite(&self, text: &str) {
        if let Ok(mut state) = self.inner.lock() {
            state.text = text.to_owned();
        }
    }

    /// Overwrite gated on a generation counter: once a response from
    /// generation N has landed, responses from older generations are
    /// discarded. Returns whether the write was applied.
    pub fn overwrite_if_newest(&self, generation: u64, text: &str) -> bool {
        let Ok(mut state) = self.inner.lock() else {
            return false;
        };
        if generation < state.newest_applied {
            return false;
        }
        state.newest_applied = generation;
        state.text = text.to_owned();
        true
    }
}

/// Page lifecycle. The click listener only exists after the load-complete
/// transition, mirroring `DOMContentLoaded` gating in a browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Uninitialized,
    Ready,
}

/// The hosting page: owns the output panel and, once loaded, the click
/// handler wired to the `call-api` control.
#[derive(Debug, Default)]
pub struct Page {
    output: OutputPanel,
    handler: Option<Arc<ClickHandler>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PageState {
        if self.handler.is_some() {
            PageState::Ready
        } else {
            PageState::Uninitialized
        }
    }

    pub const fn output(&self) -> &OutputPanel {
        &self.output
    }

    /// The load-complete signal: attaches the click listener. Before this,
    /// clicks reach nothing and no request is made.
    pub fn finish_load(&mut self, client: HelloClient, policy: ApplyPolicy) {
        self.handler = Some(Arc::new(ClickHandler::new(
            client,
            self.output.clone(),
            policy,
        )));
    }

    /// One activation of the `call-api` control.
    pub async fn click(&self) -> Result<ClickOutcome, ApiError> {
        match &self.handler {
            None => Ok(ClickOutcome::NotReady),
            Some(handler) => handler.on_click().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputPanel, Page, PageState};

    #[test]
    fn panel_overwrites_prior_content() {
        let panel = OutputPanel::new();
        panel.overwrite("first");
        panel.overwrite("");
        assert_eq!(panel.text(), "");
    }

    #[test]
    fn panel_discards_stale_generations() {
        let panel = OutputPanel::new();
        assert!(panel.overwrite_if_newest(2, "newer"));
        assert!(!panel.overwrite_if_newest(1, "stale"));
        assert_eq!(panel.text(), "newer");
    }

    #[test]
    fn page_starts_uninitialized() {
        let page = Page::new();
        assert_eq!(page.state(), PageState::Uninitialized);
        assert_eq!(page.output().text(), "");
    }
}
