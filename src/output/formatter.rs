use crate::scan::Annotation;
use crate::LANGUAGE;

/// Render an annotation in the `line:startCol:endCol lang: text` format
/// consumed by editor tooling
pub fn format_annotation(annotation: &Annotation) -> String {
    format!(
        "{}:{}:{} {}: {}",
        annotation.line, annotation.start_col, annotation.end_col, LANGUAGE, annotation.text
    )
}
