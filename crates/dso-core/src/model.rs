//! Ontology records.
//!
//! These mirror the JSON documents stored in the database. Deserialization
//! is the validation boundary: a record missing a required field fails to
//! decode instead of flowing into the UI half-formed. Unknown fields
//! (`_id`, `_rev`, `schema`, ...) are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an ontology entry.
///
/// Concepts are either objects (types) or morphisms (functions between
/// them). Annotations reuse the same vocabulary. Any other value is kept
/// verbatim so that newer schema kinds still round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Kind {
    Object,
    Morphism,
    Other(String),
}

impl Kind {
    pub fn as_str(&self) -> &str {
        match self {
            Kind::Object => "object",
            Kind::Morphism => "morphism",
            Kind::Other(kind) => kind,
        }
    }
}

impl From<String> for Kind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "object" => Kind::Object,
            "morphism" => Kind::Morphism,
            _ => Kind::Other(kind),
        }
    }
}

impl From<&str> for Kind {
    fn from(kind: &str) -> Self {
        Kind::from(kind.to_string())
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> String {
        match kind {
            Kind::Other(kind) => kind,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named entry in the ontology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Stable identifier, unique within the ontology
    pub id: String,
    pub kind: Kind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Concept {
    /// Description, if present and non-empty.
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }
}

/// Document id for the concept with the given id.
pub fn concept_doc_id(id: &str) -> String {
    format!("{}{}", crate::config::CONCEPT_DOC_PREFIX, id)
}

/// Links a concept to a concrete code symbol (class, function, method) in a
/// specific language and package.
///
/// Identity is the composite `(language, package, id)`; see [`Annotation::key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    pub language: String,
    pub package: String,
    pub kind: Kind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Annotation {
    /// Composite key `language/package/id`.
    pub fn key(&self) -> String {
        format!("{}/{}/{}", self.language, self.package, self.id)
    }

    /// Display title: the name, falling back to the id.
    pub fn title(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(&self.id)
    }

    /// Description, if present and non-empty.
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
