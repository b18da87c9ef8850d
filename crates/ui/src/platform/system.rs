use std::process::Command;

use tracing::{debug, warn};

use super::LinkOpener;

/// Opens links in the desktop's default browser.
///
/// Only `http` and `https` URLs are forwarded.
pub struct SystemLinkOpener;

fn is_web_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl LinkOpener for SystemLinkOpener {
    fn open_url(&self, url: &str) {
        let url = url.trim();
        if !is_web_url(url) {
            debug!(url, "ignoring non-web link");
            return;
        }
        #[cfg(target_os = "macos")]
        let spawned = Command::new("open").arg(url).spawn();
        #[cfg(target_os = "windows")]
        let spawned = Command::new("cmd").args(["/C", "start", "", url]).spawn();
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let spawned = Command::new("xdg-open").arg(url).spawn();

        if let Err(err) = spawned {
            warn!(url, error = %err, "could not open link");
        }
    }
}
