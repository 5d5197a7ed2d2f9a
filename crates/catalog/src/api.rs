//! Catalog backend API constants.

/// Base URL used when `COMMERCE_API_BASE_URL` is not set (local backend).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";

pub const CATEGORIES_PATH: &str = "/categories";
pub const PRODUCTS_PATH: &str = "/products";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Join a base URL and a path with exactly one `/` between them.
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
