//! Browser-backed page rendering.
//!
//! The scrape targets build their lists client-side, so a plain HTTP fetch
//! returns an empty shell. [`PageRenderer`] owns a headless Chrome process
//! and serializes the DOM only after navigation finished, the document
//! reached `readyState == "complete"`, and an optional settle delay passed.
//!
//! The Chrome process is tied to the renderer's lifetime: dropping the
//! renderer releases the browser on every exit path.

use std::ffi::OsStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use headless_chrome::{Browser, LaunchOptions, Tab};
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, instrument};

/// Budget for a single page navigation.
const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(20);
/// Budget for the document to report `readyState == "complete"`.
const DOM_READY_TIMEOUT: Duration = Duration::from_secs(12);
/// Interval between readyState probes.
const DOM_READY_POLL: Duration = Duration::from_millis(250);

/// Desktop Chrome user agent sent with every page load.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

/// Failures surfaced by the rendering layer.
///
/// Callers treat both variants the same way (log, degrade to an empty
/// extraction, continue); the split exists so logs can tell a slow page
/// apart from a broken browser.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The page did not reach a usable state within the budget.
    #[error("page did not become ready within {0:?}")]
    Timeout(Duration),
    /// Any other failure inside the browser automation layer.
    #[error("browser automation failure: {0}")]
    Automation(anyhow::Error),
}

impl From<anyhow::Error> for RenderError {
    fn from(err: anyhow::Error) -> Self {
        RenderError::Automation(err)
    }
}

/// A headless Chrome instance scoped to one collection run.
pub struct PageRenderer {
    tab: Arc<Tab>,
    // Keeps the Chrome process alive; dropping it terminates the browser.
    _browser: Browser,
}

impl PageRenderer {
    /// Launch Chrome and open the tab used for every page load.
    ///
    /// # Arguments
    ///
    /// * `headless` - When true, run Chrome with `--headless=new`; otherwise
    ///   the browser window stays visible.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Automation`] when the browser cannot be
    /// launched, for example when no Chrome binary is installed.
    pub fn new(headless: bool) -> Result<Self, RenderError> {
        let user_agent_arg = format!("--user-agent={USER_AGENT}");
        let mut args = vec![
            OsStr::new("--disable-gpu"),
            OsStr::new("--disable-dev-shm-usage"),
            OsStr::new("--lang=ko-KR"),
            OsStr::new(user_agent_arg.as_str()),
        ];
        if headless {
            args.push(OsStr::new("--headless=new"));
        }

        let browser = Browser::new(LaunchOptions {
            headless: false,
            sandbox: false,
            args,
            ..Default::default()
        })?;
        let tab = browser.new_tab()?;
        tab.set_default_timeout(PAGE_LOAD_TIMEOUT);

        debug!(headless, "Chrome launched");
        Ok(Self {
            tab,
            _browser: browser,
        })
    }

    /// Load a URL and return the rendered DOM as markup.
    ///
    /// Navigation is awaited, then the document is polled until it reports
    /// `readyState == "complete"`. When `settle` is given, that fixed delay
    /// runs afterwards so client-side rendering can fill in late content.
    ///
    /// # Errors
    ///
    /// [`RenderError::Timeout`] when the readiness budget is exhausted,
    /// [`RenderError::Automation`] for every other browser failure.
    #[instrument(level = "debug", skip_all, fields(%url))]
    pub async fn render(&self, url: &str, settle: Option<Duration>) -> Result<String, RenderError> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        self.wait_dom_ready(DOM_READY_TIMEOUT).await?;

        if let Some(delay) = settle {
            debug!(?delay, "Settling for client-side rendering");
            sleep(delay).await;
        }

        let html = self.tab.get_content()?;
        debug!(bytes = html.len(), "Captured rendered DOM");
        Ok(html)
    }

    async fn wait_dom_ready(&self, timeout: Duration) -> Result<(), RenderError> {
        let deadline = Instant::now() + timeout;
        loop {
            let state = self.tab.evaluate("document.readyState", false)?;
            let complete = state
                .value
                .as_ref()
                .and_then(|value| value.as_str())
                .is_some_and(|ready| ready == "complete");
            if complete {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(RenderError::Timeout(timeout));
            }
            sleep(DOM_READY_POLL).await;
        }
    }
}
