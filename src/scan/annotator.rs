use crate::catalog::Catalog;

use super::tokens::TokenScanner;

/// A quoted token that resolved to a catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// 1-indexed line number within the input
    pub line: usize,
    /// 0-indexed character column of the opening quote
    pub start_col: usize,
    /// 0-indexed character column just past the closing quote
    pub end_col: usize,
    /// The message key that matched
    pub key: String,
    /// The English translation for the key
    pub text: String,
}

/// Joins scanned tokens against a translation catalog
///
/// The catalog is owned and immutable; annotating the same input twice
/// yields identical results.
pub struct Annotator {
    catalog: Catalog,
    scanner: TokenScanner,
}

impl Annotator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            scanner: TokenScanner::new(),
        }
    }

    /// Scan every line of `input` and return one annotation per quoted
    /// token whose key is present in the catalog
    ///
    /// Lines are 1-indexed and scanned independently; a key that appears
    /// several times produces one annotation per occurrence. Presence in
    /// the catalog is what counts, so a key mapped to an empty translation
    /// still annotates.
    pub fn annotate(&self, input: &str) -> Vec<Annotation> {
        let mut annotations = Vec::new();

        for (idx, line) in input.split('\n').enumerate() {
            for token in self.scanner.scan_line(line) {
                if let Some(text) = self.catalog.get(&token.key) {
                    annotations.push(Annotation {
                        line: idx + 1,
                        start_col: token.start_col,
                        end_col: token.end_col,
                        key: token.key,
                        text: text.to_string(),
                    });
                }
            }
        }

        annotations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(pairs: &[(&str, &str)]) -> Catalog {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_annotate_single_match() {
        let annotator = Annotator::new(catalog(&[("hello.world", "Hello, World")]));
        let annotations = annotator.annotate(r#"t("hello.world")"#);

        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].line, 1);
        assert_eq!(annotations[0].start_col, 2);
        assert_eq!(annotations[0].end_col, 15);
        assert_eq!(annotations[0].key, "hello.world");
        assert_eq!(annotations[0].text, "Hello, World");
    }

    #[test]
    fn test_annotate_ignores_unknown_keys() {
        let annotator = Annotator::new(catalog(&[("a.b", "X")]));
        let annotations = annotator.annotate(r#""a.b" "c.d""#);

        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].key, "a.b");
        assert_eq!(annotations[0].text, "X");
    }

    #[test]
    fn test_annotate_line_numbers_are_one_indexed() {
        let annotator = Annotator::new(catalog(&[("nav.home", "Home")]));
        let annotations = annotator.annotate("first line\nsecond 'nav.home'\nthird");

        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].line, 2);
    }

    #[test]
    fn test_annotate_repeated_key_per_occurrence() {
        let annotator = Annotator::new(catalog(&[("a.b", "X")]));
        let annotations = annotator.annotate("'a.b'\n\"a.b\" \"a.b\"");

        assert_eq!(annotations.len(), 3);
        assert_eq!(annotations[0].line, 1);
        assert_eq!(annotations[1].line, 2);
        assert_eq!(annotations[2].line, 2);
        assert!(annotations[1].start_col < annotations[2].start_col);
    }

    #[test]
    fn test_annotate_empty_input() {
        let annotator = Annotator::new(catalog(&[("a.b", "X")]));
        assert!(annotator.annotate("").is_empty());
    }

    #[test]
    fn test_annotate_empty_catalog() {
        let annotator = Annotator::new(Catalog::default());
        assert!(annotator.annotate(r#"t("a.b") t("c.d")"#).is_empty());
    }

    #[test]
    fn test_annotate_empty_translation_still_emits() {
        let annotator = Annotator::new(catalog(&[("blank.message", "")]));
        let annotations = annotator.annotate(r#"t("blank.message")"#);

        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].text, "");
    }

    #[test]
    fn test_annotate_is_idempotent() {
        let annotator = Annotator::new(catalog(&[("a.b", "X"), ("c.d", "Y")]));
        let input = "'a.b'\nplain text\n\"c.d\" 'a.b'";

        assert_eq!(annotator.annotate(input), annotator.annotate(input));
    }
}
