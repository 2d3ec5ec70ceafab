//! Media store trait abstraction.
//!
//! Course thumbnails, KYC documents and blog images live in an external
//! media service. The console treats it as an opaque capability: upload a
//! binary payload (reporting percentage progress), get back a URL plus a
//! public id, and delete by that id later.

use async_trait::async_trait;
use bytes::Bytes;

/// A stored media asset as returned by the upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MediaAsset {
    /// Publicly reachable URL of the asset.
    pub url: String,
    /// Opaque id used for later deletion.
    pub public_id: String,
}

/// Upload progress callback, invoked with a percentage in `0..=100`.
pub type ProgressFn = Box<dyn Fn(u8) + Send + Sync>;

/// Media storage errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    /// The upload did not complete
    #[error("Upload failed: {0}")]
    UploadFailed(String),
    /// Deletion failed
    #[error("Delete failed: {0}")]
    DeleteFailed(String),
    /// The asset id is unknown
    #[error("Unknown media id: {0}")]
    NotFound(String),
}

/// Trait for the external media upload collaborator.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload a single binary payload.
    ///
    /// `on_progress` is called with a completion percentage as the upload
    /// advances; it is always called with `100` before a successful
    /// return.
    async fn upload(
        &self,
        payload: Bytes,
        filename: &str,
        on_progress: ProgressFn,
    ) -> Result<MediaAsset, MediaError>;

    /// Delete a previously uploaded asset by its public id.
    async fn delete(&self, public_id: &str) -> Result<(), MediaError>;
}
