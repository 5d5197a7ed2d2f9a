//! `commerce-core` — shared building blocks for the Commerce Central catalog.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod result;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{eq_ignore_case, ProductId};
pub use result::ApiResult;
