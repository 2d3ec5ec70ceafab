//! Prelude module for convenient imports.
//!
//! Re-exports the types a typical admin view touches.
//!
//! # Usage
//!
//! ```ignore
//! use lms_admin::prelude::*;
//! ```

pub use crate::adapters::{FileIdentityStore, ReqwestHttpClient};
pub use crate::config::ApiConfig;
pub use crate::controller::{ActionKind, EditSession, ViewController, ViewPhase};
pub use crate::error::{ActionError, GatewayError};
pub use crate::gateway::{Gateway, Routed};
pub use crate::models::{
    BlogPost, Course, KycSubmission, Meeting, MeetingRegistration, Payment, Resource, SortValue,
    User, Withdrawal, WithdrawalUser,
};
pub use crate::query::{derive, DerivedPage, QuerySpec, SortDirection, StatusFilter};
pub use crate::session::{Operator, Session};
pub use crate::store::{LoadState, ResourceStore};
