pub mod loader;
pub mod locator;

pub use loader::Catalog;
pub use locator::CatalogLocator;
