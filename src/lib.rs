pub mod catalog;
pub mod error;
pub mod output;
pub mod scan;

use std::path::Path;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogLocator};
pub use error::{AnnotateError, Result};
pub use output::format_annotation;
pub use scan::{Annotation, Annotator, QuotedToken, TokenScanner};

/// File name of the translation catalog searched for under the root
pub const CATALOG_FILE_NAME: &str = "messages_en.json";

/// Language tag reported with each annotation
pub const LANGUAGE: &str = "en";

/// Main orchestrator function that coordinates the annotation workflow
///
/// This function:
/// 1. Walks `root` for the first file named `messages_en.json`
/// 2. Loads it as the translation catalog
/// 3. Scans `input` line by line for quoted keys present in the catalog
///
/// A missing catalog is not an error: there is simply nothing to annotate,
/// and an empty result is returned. An invalid root or an unreadable or
/// malformed catalog is fatal.
#[must_use = "this function returns a Result that should be handled"]
pub fn run_annotate(root: &Path, input: &str) -> Result<Vec<Annotation>> {
    let locator = CatalogLocator::new(root.to_path_buf());

    let catalog_path = match locator.find_first(CATALOG_FILE_NAME)? {
        Some(path) => path,
        None => return Ok(Vec::new()),
    };

    let catalog = Catalog::load(&catalog_path)?;
    let annotator = Annotator::new(catalog);

    Ok(annotator.annotate(input))
}
