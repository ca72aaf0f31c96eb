use chromiumoxide::browser::{Browser as CrBrowser, BrowserConfig as CrBrowserConfig};
use chromiumoxide::handler::viewport::Viewport;
use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::config::BrowserConfig;
use crate::driver::SessionDriver;
use crate::error::{Error, Result};
use crate::page::Page;

/// Chrome flags that improve performance without affecting functionality.
const PERF_ARGS: &[&str] = &[
    "disable-gpu",
    "disable-extensions",
    "metrics-recording-only",
    "mute-audio",
    "no-default-browser-check",
    "no-first-run",
    "disable-client-side-phishing-detection",
    "disable-popup-blocking",
    "disable-prompt-on-repost",
];

/// A launched browser with a single open page.
///
/// Everything it holds (page, Chrome process, CDP handler task) is released by
/// [`Session::close`]; [`with_session`](crate::driver::with_session) guarantees that happens on every exit path.
pub struct Session {
    browser: CrBrowser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl Session {
    /// Launch Chrome with the given configuration and open a blank page.
    pub async fn launch(config: BrowserConfig) -> Result<Self> {
        let mut builder = CrBrowserConfig::builder();

        if config.headless {
            builder = builder.new_headless_mode().no_sandbox();
        } else {
            builder = builder.with_head().no_sandbox();
        }

        // chromiumoxide adds the `--` prefix itself
        for arg in PERF_ARGS {
            builder = builder.arg(*arg);
        }

        if let Some(ref path) = config.chrome_path {
            builder = builder.chrome_executable(path);
        }

        builder = builder.viewport(Viewport {
            width: config.viewport_width,
            height: config.viewport_height,
            device_scale_factor: None,
            emulating_mobile: false,
            is_landscape: false,
            has_touch: false,
        });

        let cr_config = builder.build().map_err(Error::LaunchError)?;

        let (mut browser, mut handler) = CrBrowser::launch(cr_config)
            .await
            .map_err(|e| Error::LaunchError(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {}
        });
        tracing::debug!("browser launched");

        let cr_page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                shutdown_browser(&mut browser, handler_task).await;
                return Err(Error::LaunchError(format!("could not create page: {e}")));
            }
        };

        Ok(Self {
            browser,
            page: Page::new(cr_page, config.default_timeout),
            handler_task,
        })
    }
}

impl SessionDriver for Session {
    type Page = Page;

    /// The page opened at launch.
    fn page(&self) -> &Page {
        &self.page
    }

    /// Close the page and the browser and stop the CDP handler.
    /// Failures are logged, never returned, so they can't mask the caller's result.
    async fn close(self) {
        let Self {
            mut browser,
            page,
            handler_task,
        } = self;

        if let Err(e) = page.close().await {
            tracing::warn!("failed to close page: {e}");
        }
        shutdown_browser(&mut browser, handler_task).await;
    }
}

async fn shutdown_browser(browser: &mut CrBrowser, handler_task: JoinHandle<()>) {
    if let Err(e) = browser.close().await {
        tracing::warn!("failed to close browser: {e}");
    }
    if let Err(e) = browser.wait().await {
        tracing::warn!("failed to reap browser process: {e}");
    }
    handler_task.abort();
    tracing::debug!("browser closed");
}
