//! Catalog module: product listings, identifier resolution, and categories.
//!
//! Identifier resolution is pure and synchronous. Category fetching talks to
//! the catalog backend through a pluggable [`CategorySource`].

pub mod api;
pub mod category;
pub mod config;
pub mod error;
pub mod identifier;
pub mod product;

pub use category::{
    fetch_categories, find_category_by_slug, Category, CategorySource, HttpCategorySource,
    StaticCategorySource,
};
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use identifier::{generate_identifier, resolve_by_identifier, resolve_position};
pub use product::{PricingMetadata, Product, ProductStatus};
