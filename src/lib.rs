//! Client-side data layer for an online-course platform admin console.
//!
//! Every admin screen is the same loop: fetch a collection, derive the
//! visible page, mutate one record, refetch. This crate factors that loop
//! into four pieces instantiated per resource:
//!
//! - [`gateway::Gateway`] — CRUD and action verbs against the backend REST
//!   API, with response-envelope normalization
//! - [`store::ResourceStore`] — the authoritative local copy of one
//!   collection and its load lifecycle
//! - [`query::derive`] — pure filter/sort/paginate derivation for rendering
//! - [`controller::ViewController`] — orchestration: load on mount,
//!   guarded mutations, full refetch after every successful action
//!
//! Resources (users, courses, payments, KYC submissions, blog posts,
//! meetings, wallet withdrawals) are typed schemas in [`models`],
//! validated at the gateway boundary.

pub mod adapters;
pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod models;
pub mod prelude;
pub mod query;
pub mod session;
pub mod store;
pub mod traits;
