//! # DSO Core
//!
//! Platform-independent library behind the Data Science Ontology browser.
//!
//! The ontology lives in a remote CouchDB/Cloudant database. This crate holds
//! everything the frontends (Dioxus app, CLI) share when talking to it:
//!
//! - [`model`] - `Concept` and `Annotation` records as stored in the database
//! - [`store`] - The [`store::OntologyStore`] trait and its HTTP implementation
//! - [`search`] - Weighted full-text queries and the results aggregator
//! - [`config`] - Production configuration constants and client settings
//! - [`error`] - Error types for data access

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod model;
pub mod search;
pub mod store;

pub use error::FetchError;
pub use model::{Annotation, Concept, Kind};
pub use store::{CloudantClient, OntologyStore};
