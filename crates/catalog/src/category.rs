//! Marketplace categories and the fetch wrapper used by rendering code.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use commerce_core::{eq_ignore_case, ApiResult};

use crate::api::{endpoint, CATEGORIES_PATH};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_count: Option<u64>,
}

/// Anything that can list the marketplace's categories.
#[async_trait]
pub trait CategorySource: Send + Sync {
    async fn list_categories(&self) -> CatalogResult<Vec<Category>>;
}

#[async_trait]
impl<S: CategorySource + ?Sized> CategorySource for std::sync::Arc<S> {
    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        (**self).list_categories().await
    }
}

/// Fetch categories, folding every failure into the result envelope.
///
/// Never panics and never propagates: callers render either the list or
/// the error message.
pub async fn fetch_categories<S>(source: &S) -> ApiResult<Vec<Category>>
where
    S: CategorySource + ?Sized,
{
    match source.list_categories().await {
        Ok(categories) => {
            tracing::debug!(count = categories.len(), "fetched categories");
            ApiResult::success(categories)
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch categories");
            ApiResult::failure(e.to_string())
        }
    }
}

/// First category whose slug matches, ignoring case.
pub fn find_category_by_slug<'a>(categories: &'a [Category], slug: &str) -> Option<&'a Category> {
    categories.iter().find(|c| eq_ignore_case(&c.slug, slug))
}

/// Fixed in-memory category list.
#[derive(Debug, Clone, Default)]
pub struct StaticCategorySource {
    categories: Vec<Category>,
}

impl StaticCategorySource {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CategorySource for StaticCategorySource {
    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.categories.clone())
    }
}

/// Backend responses come either as a bare array or wrapped in the envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoriesBody {
    Bare(Vec<Category>),
    Envelope(ApiResult<Vec<Category>>),
}

/// Categories served by the catalog backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCategorySource {
    client: reqwest::Client,
    url: String,
}

impl HttpCategorySource {
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            url: endpoint(&config.api_base_url, CATEGORIES_PATH),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CategorySource for HttpCategorySource {
    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let body: CategoriesBody =
            serde_json::from_str(&text).map_err(|e| CatalogError::decode(e.to_string()))?;

        match body {
            CategoriesBody::Bare(categories) => Ok(categories),
            CategoriesBody::Envelope(envelope) => {
                envelope.into_result().map_err(CatalogError::Upstream)
            }
        }
    }
}
