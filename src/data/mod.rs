//! Data module - CSV loading, typing and label mapping

pub mod labels;
mod loader;
mod normalizer;
pub mod schema;

pub use loader::{BikeTables, DataLoader, LoaderError};
pub use normalizer::{DateAlignment, DateSource, TypeNormalizer, CATEGORY_DTYPE};
