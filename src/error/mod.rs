//! Error handling for the admin client.
//!
//! Two layers of errors exist:
//!
//! - [`GatewayError`] — transport/HTTP/decode failures from backend calls
//! - [`ActionError`] — operator-action failures, including local
//!   validation and conflict rejections that never reach the network
//!
//! No error here is fatal to a view: a failed load leaves the view in its
//! error state with a manual retry entry point, and a failed mutation
//! leaves the loaded collection untouched.

mod action;
mod gateway;

pub use action::ActionError;
pub use gateway::GatewayError;
