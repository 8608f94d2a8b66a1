pub mod annotator;
pub mod tokens;

pub use annotator::{Annotation, Annotator};
pub use tokens::{QuotedToken, TokenScanner};
