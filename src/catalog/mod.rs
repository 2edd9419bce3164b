pub mod loader;
pub mod mock;

pub use loader::{load_catalog, parse_catalog, CatalogError};
pub use mock::mock_candidates;
