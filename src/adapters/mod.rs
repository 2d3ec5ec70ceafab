//! Adapter implementations of the collaborator traits.
//!
//! Production adapters talk to the real world; the `mock` submodule holds
//! in-memory doubles for tests.

pub mod file_identity;
pub mod mock;
pub mod reqwest_http;

pub use file_identity::FileIdentityStore;
pub use reqwest_http::ReqwestHttpClient;
