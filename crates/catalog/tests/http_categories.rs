use std::time::Duration;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;

use commerce_catalog::{
    fetch_categories, find_category_by_slug, CatalogConfig, CatalogError, CategorySource,
    HttpCategorySource,
};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Serve `app` under `/api` on an ephemeral port.
    async fn spawn(app: Router) -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}/api", addr);

        let app = Router::new().nest("/api", app);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { base_url, handle })
    }

    fn source(&self) -> HttpCategorySource {
        let cfg = CatalogConfig {
            api_base_url: self.base_url.clone(),
            request_timeout: Duration::from_secs(5),
        };
        HttpCategorySource::new(&cfg).expect("client builds")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn bare_array_response() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/categories",
        get(|| async {
            Json(json!([
                {"id": "1", "name": "Electronics", "slug": "electronics", "productCount": 40},
                {"id": "2", "name": "Office Furniture", "slug": "office-furniture"}
            ]))
        }),
    );
    let srv = TestServer::spawn(app).await?;

    let categories = srv.source().list_categories().await?;
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].product_count, Some(40));
    assert_eq!(
        find_category_by_slug(&categories, "Office-Furniture").map(|c| c.id.as_str()),
        Some("2")
    );
    Ok(())
}

#[tokio::test]
async fn envelope_success_response() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/categories",
        get(|| async {
            Json(json!({
                "success": true,
                "data": [{
                    "id": "9",
                    "name": "Apparel",
                    "slug": "apparel",
                    "description": "Clothing lots"
                }]
            }))
        }),
    );
    let srv = TestServer::spawn(app).await?;

    let res = fetch_categories(&srv.source()).await;
    let categories = res.data().expect("success envelope");
    assert_eq!(categories[0].slug, "apparel");
    assert_eq!(categories[0].description.as_deref(), Some("Clothing lots"));
    Ok(())
}

#[tokio::test]
async fn envelope_failure_maps_to_upstream() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/categories",
        get(|| async { Json(json!({"success": false, "error": "catalog offline"})) }),
    );
    let srv = TestServer::spawn(app).await?;

    match srv.source().list_categories().await {
        Err(CatalogError::Upstream(msg)) => assert_eq!(msg, "catalog offline"),
        other => panic!("Expected Upstream error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn server_error_folds_into_failure() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/categories",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "db down") }),
    );
    let srv = TestServer::spawn(app).await?;

    match srv.source().list_categories().await {
        Err(CatalogError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "db down");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }

    let res = fetch_categories(&srv.source()).await;
    assert_eq!(res.error(), Some("catalog backend returned 500: db down"));
    Ok(())
}

#[tokio::test]
async fn garbage_body_is_decode_error() -> anyhow::Result<()> {
    let app = Router::new().route("/categories", get(|| async { "<html>oops</html>" }));
    let srv = TestServer::spawn(app).await?;

    let err = srv.source().list_categories().await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)), "got {err:?}");
    Ok(())
}
