//! Data Science Ontology browser.
//!
//! A Dioxus frontend for browsing and searching the Data Science Ontology: a
//! knowledge base of data science concepts and the code annotations that map
//! them onto concrete libraries. All data comes from a remote CouchDB/Cloudant
//! database through [`dso_core`].
//!
//! # Pages
//!
//! - `/` - welcome banner with the concept count and a search bar
//! - `/concept/:id` - a single concept
//! - `/search/:query` - ranked concept and annotation matches
//! - anything else - not found
//!
//! See [`routes::Route`] for the routing table.

#![forbid(unsafe_code)]

pub mod components;
pub mod routes;
