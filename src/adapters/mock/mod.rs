//! Mock adapters for testing.
//!
//! In-memory implementations of the collaborator traits, used by unit and
//! integration tests that must not touch the network or the filesystem.

pub mod http;
pub mod identity;
pub mod media;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use identity::MockIdentityStore;
pub use media::MockMediaStore;
