use regex::Regex;

/// A quoted token in source text: single or double quotes around a run of
/// word characters and dots. The opening and closing quote characters do
/// not need to match, and the interior may be empty.
const QUOTED_TOKEN_PATTERN: &str = r#"["'][0-9A-Za-z_.]*["']"#;

/// A single quoted token found on a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedToken {
    /// 0-indexed character column of the opening quote
    pub start_col: usize,
    /// 0-indexed character column just past the closing quote
    pub end_col: usize,
    /// The token interior with the quote delimiters stripped
    pub key: String,
}

/// Scans individual lines for quoted localization-key tokens
pub struct TokenScanner {
    pattern: Regex,
}

impl Default for TokenScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenScanner {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(QUOTED_TOKEN_PATTERN).expect("quoted token pattern is valid"),
        }
    }

    /// Find all quoted tokens on a line, left to right, non-overlapping
    ///
    /// Columns are character offsets, not byte offsets, so lines containing
    /// multi-byte text still report editor-usable positions.
    pub fn scan_line(&self, line: &str) -> Vec<QuotedToken> {
        self.pattern
            .find_iter(line)
            .map(|m| {
                let start_col = line[..m.start()].chars().count();
                let token = m.as_str();
                let end_col = start_col + token.chars().count();
                // Quote delimiters are one byte each
                let key = token[1..token.len() - 1].to_string();
                QuotedToken {
                    start_col,
                    end_col,
                    key,
                }
            })
            .collect()
    }
}
