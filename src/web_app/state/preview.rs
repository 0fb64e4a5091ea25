// web_app/state/preview.rs - Scoped preview references for pending uploads
//
// A preview reference is a temporary, locally resolvable URL for image bytes
// that have not been uploaded yet (a `blob:` URL in the browser). Each one
// is owned by a `PreviewHandle`, which releases it on drop, so removing an
// image, resetting the draft, or tearing the view down never leaks one.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::web_app::model::LocalFile;

/// Something that can mint and revoke preview URLs
pub trait PreviewSource: Send + Sync {
    fn acquire(&self, file: &LocalFile) -> String;
    fn release(&self, url: &str);
}

/// Owns one preview URL for as long as it is alive
pub struct PreviewHandle {
    url: String,
    source: Arc<dyn PreviewSource>,
}

impl PreviewHandle {
    pub fn acquire(source: &Arc<dyn PreviewSource>, file: &LocalFile) -> Self {
        let url = source.acquire(file);
        tracing::debug!(file = %file.file_name, %url, "acquired preview");
        Self {
            url,
            source: Arc::clone(source),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        tracing::debug!(url = %self.url, "released preview");
        self.source.release(&self.url);
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PreviewHandle").field(&self.url).finish()
    }
}

/// In-process preview source; tracks which URLs are still live.
///
/// Used by native callers and tests, where there is no blob store.
#[derive(Default)]
pub struct MemoryPreviews {
    live: Mutex<HashSet<String>>,
}

impl MemoryPreviews {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn live_count(&self) -> usize {
        self.live.lock().map(|live| live.len()).unwrap_or(0)
    }

    pub fn is_live(&self, url: &str) -> bool {
        self.live
            .lock()
            .map(|live| live.contains(url))
            .unwrap_or(false)
    }
}

impl PreviewSource for MemoryPreviews {
    fn acquire(&self, file: &LocalFile) -> String {
        let url = format!("preview://{}/{}", uuid::Uuid::new_v4(), file.file_name);
        if let Ok(mut live) = self.live.lock() {
            live.insert(url.clone());
        }
        url
    }

    fn release(&self, url: &str) {
        if let Ok(mut live) = self.live.lock() {
            live.remove(url);
        }
    }
}
