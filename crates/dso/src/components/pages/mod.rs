//! One component per route.

mod concept;
mod home;
mod not_found;
mod search;

pub use concept::{ConceptDisplay, ConceptPage};
pub use home::{HomePage, Welcome};
pub use not_found::NotFoundPage;
pub use search::SearchPage;
