//! Search components: the input, the results view and result entries.

mod ontology_search_bar;
mod result_card;
mod results_view;
mod search_bar;

pub use ontology_search_bar::OntologySearchBar;
pub use result_card::{AnnotationResult, ConceptResult, KindGlyph};
pub use results_view::{OntologyResults, ResultsList};
pub use search_bar::SearchBar;
