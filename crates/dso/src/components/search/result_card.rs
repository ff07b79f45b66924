use dioxus::prelude::*;
use dso_core::{Annotation, Concept, Kind};

use crate::routes::Route;

/// Concept hit: glyph, link to the concept page, id and description
#[component]
pub fn ConceptResult(concept: Concept) -> Element {
    let description = concept.description().map(str::to_string);

    rsx! {
        div { class: "dso-result",
            KindGlyph { kind: concept.kind.clone() }
            " "
            Link { to: Route::concept(concept.id.clone()), "{concept.name}" }
            " "
            span { class: "dso-text-muted", "({concept.id})" }
            if let Some(description) = description {
                p { class: "dso-result-description", "{description}" }
            }
        }
    }
}

/// Annotation hit: glyph, title, `language/package/id` key and description
#[component]
pub fn AnnotationResult(annotation: Annotation) -> Element {
    let key = annotation.key();
    let title = annotation.title().to_string();
    let description = annotation.description().map(str::to_string);

    rsx! {
        div { class: "dso-result",
            KindGlyph { kind: annotation.kind.clone() }
            " "
            span { class: "dso-result-title", "{title}" }
            " "
            span { class: "dso-text-muted", "({key})" }
            if let Some(description) = description {
                p { class: "dso-result-description", "{description}" }
            }
        }
    }
}

/// Glyph for object and morphism kinds; other kinds get none
#[component]
pub fn KindGlyph(kind: Kind) -> Element {
    match kind {
        Kind::Object => rsx! {
            span { class: "dso-kind dso-kind--object", title: "object", "○" }
        },
        Kind::Morphism => rsx! {
            span { class: "dso-kind dso-kind--morphism", title: "morphism", "⟶" }
        },
        Kind::Other(_) => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_annotation(annotation: Annotation) -> String {
        fn app(annotation: Annotation) -> Element {
            rsx! { AnnotationResult { annotation } }
        }
        let mut dom = VirtualDom::new_with_props(app, annotation);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn render_glyph(kind: Kind) -> String {
        fn app(kind: Kind) -> Element {
            rsx! { KindGlyph { kind } }
        }
        let mut dom = VirtualDom::new_with_props(app, kind);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_annotation_result() {
        let html = render_annotation(Annotation {
            id: "sklearn-kmeans".into(),
            language: "python".into(),
            package: "sklearn".into(),
            kind: Kind::Object,
            name: Some("k-means clustering".into()),
            description: None,
        });
        assert!(html.contains("k-means clustering"));
        assert!(html.contains("(python/sklearn/sklearn-kmeans)"));
        assert!(html.contains("dso-kind--object"));
        assert!(!html.contains("dso-result-description"));
    }

    #[test]
    fn test_annotation_title_falls_back_to_id() {
        let html = render_annotation(Annotation {
            id: "pandas-read-csv".into(),
            language: "python".into(),
            package: "pandas".into(),
            kind: Kind::Morphism,
            name: None,
            description: Some("Read a CSV file into a data frame".into()),
        });
        assert!(html.contains(">pandas-read-csv<"));
        assert!(html.contains("Read a CSV file into a data frame"));
    }

    #[test]
    fn test_kind_glyphs() {
        assert!(render_glyph(Kind::Object).contains("dso-kind--object"));
        assert!(render_glyph(Kind::Morphism).contains("dso-kind--morphism"));
        assert!(!render_glyph(Kind::Other("schema".into())).contains("dso-kind"));
    }
}
