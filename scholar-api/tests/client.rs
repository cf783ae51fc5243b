use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use scholar_api::{ApiClient, ApiError, Category};

async fn start_stub(app: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("stub server error: {e}");
        }
    });

    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

async fn echo_search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let query = params.get("q").cloned().unwrap_or_default();
    let offset: usize = params
        .get("offset")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default();

    Json(json!({
        "query": query,
        "query_terms": query.split_whitespace().collect::<Vec<_>>(),
        "total": 95,
        "limit": 20,
        "offset": offset,
        "has_more": offset + 20 < 95,
        "search_metadata": {
            "total_results": 95,
            "results_shown": 1,
            "search_time_ms": 12,
            "relevance_threshold": 0.5
        },
        "publications": [{
            "id": "p1",
            "title": "Monetary Policy & Banks",
            "year": 2020,
            "authors": "J. Smith",
            "publication_link": "https://example.org/p1",
            "author_links": "",
            "created_at": "2024-01-01",
            "updated_at": "2024-01-02",
            "relevance_score": 8.5
        }]
    }))
}

async fn classify(Json(body): Json<Value>) -> Json<Value> {
    let document = body["document"].as_str().unwrap_or_default().to_owned();
    Json(json!({
        "status": "success",
        "predicted_category": "Business",
        "confidence_scores": {"Politics": 0.05, "Business": 0.9, "Health": 0.05},
        "preprocessed_text": document.to_lowercase()
    }))
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(
        format!("{base_url}/search"),
        format!("{base_url}/classify"),
        Duration::from_secs(5),
    )
    .expect("api client")
}

#[tokio::test]
async fn search_sends_trimmed_query_and_offset() -> anyhow::Result<()> {
    let base_url = start_stub(Router::new().route("/search", get(echo_search))).await?;

    let response = client(&base_url)
        .search_publications("  central banks ", 40)
        .await?;

    assert_eq!(response.query, "central banks");
    assert_eq!(response.query_terms, vec!["central", "banks"]);
    assert_eq!(response.offset, 40);
    assert_eq!((response.total, response.limit), (95, 20));
    assert_eq!(response.publications[0].page_number, 0);
    Ok(())
}

#[tokio::test]
async fn blank_query_is_rejected_before_sending() {
    let api = client("http://127.0.0.1:9");
    let err = api.search_publications("   ", 0).await.unwrap_err();
    assert!(matches!(err, ApiError::EmptyQuery));
    assert!(err.is_input_error());
}

#[tokio::test]
async fn non_success_status_surfaces_the_code() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/search",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let base_url = start_stub(app).await?;

    let err = client(&base_url)
        .search_publications("anything", 0)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 503 }));
    assert_eq!(err.to_string(), "HTTP error! status: 503");
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() -> anyhow::Result<()> {
    let app = Router::new().route("/search", get(|| async { Json(json!({"nope": true})) }));
    let base_url = start_stub(app).await?;

    let err = client(&base_url)
        .search_publications("anything", 0)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    Ok(())
}

#[tokio::test]
async fn classify_posts_trimmed_document() -> anyhow::Result<()> {
    let base_url = start_stub(Router::new().route("/classify", post(classify))).await?;

    let response = client(&base_url)
        .classify_document("\n Quarterly Earnings Beat Forecasts \n")
        .await?;

    assert_eq!(response.predicted_category, Category::Business);
    assert_eq!(response.preprocessed_text, "quarterly earnings beat forecasts");
    Ok(())
}

#[tokio::test]
async fn blank_document_is_rejected_before_sending() {
    let api = client("http://127.0.0.1:9");
    let err = api.classify_document(" \t ").await.unwrap_err();
    assert_eq!(err.to_string(), "Please enter a document to classify");
}
