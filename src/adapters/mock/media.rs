//! In-memory media store for testing.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{MediaAsset, MediaError, MediaStore, ProgressFn};

/// Media store that keeps uploads in memory and fabricates URLs.
///
/// Progress is reported in a few coarse steps so callers can assert that
/// their percentage callback fires.
#[derive(Debug, Clone, Default)]
pub struct MockMediaStore {
    assets: Arc<Mutex<HashMap<String, Bytes>>>,
    next_id: Arc<Mutex<u64>>,
}

impl MockMediaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of assets currently stored.
    pub fn asset_count(&self) -> usize {
        self.assets.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaStore for MockMediaStore {
    async fn upload(
        &self,
        payload: Bytes,
        filename: &str,
        on_progress: ProgressFn,
    ) -> Result<MediaAsset, MediaError> {
        for pct in [25u8, 50, 75, 100] {
            on_progress(pct);
        }

        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            format!("mock-media-{}", *next)
        };
        self.assets.lock().unwrap().insert(id.clone(), payload);

        Ok(MediaAsset {
            url: format!("https://media.test/{}/{}", id, filename),
            public_id: id,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), MediaError> {
        match self.assets.lock().unwrap().remove(public_id) {
            Some(_) => Ok(()),
            None => Err(MediaError::NotFound(public_id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU8, Ordering};

    #[tokio::test]
    async fn test_upload_reports_full_progress() {
        let store = MockMediaStore::new();
        let last = Arc::new(AtomicU8::new(0));
        let last_cb = Arc::clone(&last);

        let asset = store
            .upload(
                Bytes::from("payload"),
                "doc.pdf",
                Box::new(move |pct| last_cb.store(pct, Ordering::SeqCst)),
            )
            .await
            .unwrap();

        assert_eq!(last.load(Ordering::SeqCst), 100);
        assert!(asset.url.ends_with("doc.pdf"));
        assert_eq!(store.asset_count(), 1);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_fails() {
        let store = MockMediaStore::new();
        let err = store.delete("missing").await.unwrap_err();
        assert_eq!(err, MediaError::NotFound("missing".to_string()));
    }
}
