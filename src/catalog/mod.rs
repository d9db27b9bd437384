pub mod source;
pub mod store;

pub use source::{CatalogError, CatalogSource, JsonCatalogSource, StaticCatalogSource};
pub use store::{Catalog, CatalogStore};
