use std::sync::Arc;

mod system;

/// Hands a URL to something outside the webview.
pub trait LinkOpener: Send + Sync {
    fn open_url(&self, url: &str);
}

pub type LinkOpenerRef = Arc<dyn LinkOpener>;

pub use system::SystemLinkOpener;
