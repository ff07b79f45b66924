//! Output formatting for ontology lookups.
//!
//! Supports both human-readable terminal output and JSON for scripting.

use dso_core::search::ResultsAggregator;
use dso_core::{Annotation, Concept};
use serde::Serialize;

/// Maximum characters to show of a description
const DESCRIPTION_MAX_LEN: usize = 160;

/// JSON output structure for search results
#[derive(Serialize)]
pub struct JsonSearchOutput<'a> {
    pub query: &'a str,
    pub total_concepts: u64,
    pub total_annotations: u64,
    pub concepts: &'a [Concept],
    pub annotations: Vec<JsonAnnotation<'a>>,
}

/// Annotation with its composite key spelled out
#[derive(Serialize)]
pub struct JsonAnnotation<'a> {
    pub key: String,
    #[serde(flatten)]
    pub annotation: &'a Annotation,
}

impl<'a> From<&'a Annotation> for JsonAnnotation<'a> {
    fn from(annotation: &'a Annotation) -> Self {
        Self {
            key: annotation.key(),
            annotation,
        }
    }
}

/// Formats search results as JSON.
pub fn format_search_json(results: &ResultsAggregator) -> String {
    let output = JsonSearchOutput {
        query: results.query(),
        total_concepts: results.total_concepts(),
        total_annotations: results.total_annotations(),
        concepts: results.concepts(),
        annotations: results
            .annotations()
            .iter()
            .map(JsonAnnotation::from)
            .collect(),
    };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Formats search results for human-readable terminal output.
pub fn format_search_human(results: &ResultsAggregator) -> String {
    if !results.show_concepts() && !results.show_annotations() {
        return format!("No results found for \"{}\"", results.query());
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{} for \"{}\"\n",
        results.summary(),
        results.query()
    ));

    if results.show_concepts() {
        output.push_str(&section_header(
            "Concepts",
            results.concepts().len(),
            results.total_concepts(),
        ));
        for (i, concept) in results.concepts().iter().enumerate() {
            output.push_str(&format!(
                "{}. {} [{}] ({})\n",
                i + 1,
                concept.name,
                concept.kind,
                concept.id
            ));
            if let Some(description) = concept.description() {
                output.push_str(&format!(
                    "   {}\n",
                    truncate_text(description, DESCRIPTION_MAX_LEN)
                ));
            }
        }
    }

    if results.show_annotations() {
        output.push_str(&section_header(
            "Annotations",
            results.annotations().len(),
            results.total_annotations(),
        ));
        for (i, annotation) in results.annotations().iter().enumerate() {
            output.push_str(&format!(
                "{}. {} [{}] ({})\n",
                i + 1,
                annotation.title(),
                annotation.kind,
                annotation.key()
            ));
            if let Some(description) = annotation.description() {
                output.push_str(&format!(
                    "   {}\n",
                    truncate_text(description, DESCRIPTION_MAX_LEN)
                ));
            }
        }
    }

    output.trim_end().to_string()
}

/// Formats a concept as JSON.
pub fn format_concept_json(concept: &Concept) -> String {
    serde_json::to_string_pretty(concept).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a concept as a field listing.
pub fn format_concept_human(concept: &Concept) -> String {
    let mut lines = vec![
        concept.name.clone(),
        format!("  ID:          {}", concept.id),
        format!("  Kind:        {}", concept.kind),
        format!("  Name:        {}", concept.name),
    ];
    if let Some(description) = concept.description() {
        lines.push(format!("  Description: {}", description));
    }
    lines.join("\n")
}

pub fn format_count(count: u64) -> String {
    format!("{} concepts", count)
}

fn section_header(title: &str, shown: usize, total: u64) -> String {
    if (shown as u64) < total {
        format!("\n{} (showing {} of {}):\n", title, shown, total)
    } else {
        format!("\n{}:\n", title)
    }
}

/// Truncates text to a maximum length on a word boundary, adding ellipsis.
fn truncate_text(text: &str, max_len: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_len).collect();
    match truncated.rfind(' ') {
        Some(last_space) => format!("{}...", &truncated[..last_space]),
        None => format!("{}...", truncated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dso_core::search::ResultSet;
    use dso_core::Kind;

    fn concept(id: &str, name: &str, description: Option<&str>) -> Concept {
        Concept {
            id: id.to_string(),
            kind: Kind::Object,
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    fn annotation(id: &str, name: Option<&str>) -> Annotation {
        Annotation {
            id: id.to_string(),
            language: "python".to_string(),
            package: "numpy".to_string(),
            kind: Kind::Object,
            name: name.map(str::to_string),
            description: None,
        }
    }

    fn results(concepts: Vec<Concept>, total: u64, annotations: Vec<Annotation>) -> ResultsAggregator {
        let mut results = ResultsAggregator::new();
        let ticket = results.begin("vector").unwrap();
        let annotation_total = annotations.len() as u64;
        results.apply_concepts(
            &ticket,
            Ok(ResultSet {
                items: concepts,
                total,
            }),
        );
        results.apply_annotations(
            &ticket,
            Ok(ResultSet {
                items: annotations,
                total: annotation_total,
            }),
        );
        results
    }

    #[test]
    fn test_format_search_human_empty() {
        let output = format_search_human(&results(vec![], 0, vec![]));
        assert_eq!(output, "No results found for \"vector\"");
    }

    #[test]
    fn test_format_search_human_sections() {
        let output = format_search_human(&results(
            vec![concept("vector", "Vector", Some("Ordered list of numbers"))],
            1,
            vec![annotation("ndarray", None)],
        ));

        assert!(output.starts_with("1 concepts, 1 annotations for \"vector\""));
        assert!(output.contains("\nConcepts:\n1. Vector [object] (vector)"));
        assert!(output.contains("   Ordered list of numbers"));
        assert!(output.contains("\nAnnotations:\n1. ndarray [object] (python/numpy/ndarray)"));
    }

    #[test]
    fn test_format_search_human_capped() {
        let concepts = (0..10)
            .map(|i| concept(&format!("c{}", i), &format!("C{}", i), None))
            .collect();
        let output = format_search_human(&results(concepts, 57, vec![]));
        assert!(output.contains("Concepts (showing 10 of 57):"));
        assert!(!output.contains("Annotations"));
    }

    #[test]
    fn test_format_search_json() {
        let output = format_search_json(&results(
            vec![concept("vector", "Vector", None)],
            1,
            vec![annotation("ndarray", Some("NumPy array"))],
        ));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["query"], "vector");
        assert_eq!(value["total_concepts"], 1);
        assert_eq!(value["concepts"][0]["id"], "vector");
        assert_eq!(value["annotations"][0]["key"], "python/numpy/ndarray");
        assert_eq!(value["annotations"][0]["name"], "NumPy array");
    }

    #[test]
    fn test_format_concept_human() {
        let output = format_concept_human(&concept("vector", "Vector", None));
        assert!(output.contains("ID:          vector"));
        assert!(output.contains("Kind:        object"));
        assert!(!output.contains("Description"));
    }

    #[test]
    fn test_format_concept_json() {
        let output = format_concept_json(&concept("vector", "Vector", Some("A vector")));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["kind"], "object");
        assert_eq!(value["description"], "A vector");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("hello world foo", 12), "hello world...");
        assert_eq!(truncate_text("abcdefghij", 5), "abcde...");
    }
}
