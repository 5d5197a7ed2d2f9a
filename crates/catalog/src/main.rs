//! Print the marketplace categories served by the configured catalog backend.
//!
//! An optional argument narrows the output to the category with that slug.

use commerce_catalog::{fetch_categories, find_category_by_slug, CatalogConfig, HttpCategorySource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    commerce_observability::init();

    let config = CatalogConfig::from_env()?;
    let source = HttpCategorySource::new(&config)?;
    tracing::info!(url = source.url(), "fetching categories");

    let categories = fetch_categories(&source)
        .await
        .into_result()
        .map_err(anyhow::Error::msg)?;

    match std::env::args().nth(1) {
        Some(slug) => match find_category_by_slug(&categories, &slug) {
            Some(category) => println!("{}", serde_json::to_string_pretty(category)?),
            None => anyhow::bail!("no category with slug {slug:?}"),
        },
        None => println!("{}", serde_json::to_string_pretty(&categories)?),
    }

    Ok(())
}
