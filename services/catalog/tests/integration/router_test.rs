use axum::http::StatusCode;
use axum_test::TestServer;

use recipebook_catalog::router::build_router;
use recipebook_catalog::state::AppState;

fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Recipes</h1>").unwrap();
    std::fs::write(dir.path().join("add-recipe.html"), "<h1>Add</h1>").unwrap();
    std::fs::write(dir.path().join("recipe-detail.html"), "<h1>Detail</h1>").unwrap();
    std::fs::create_dir(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css").join("style.css"), "body{}").unwrap();
    dir
}

fn server(root: &std::path::Path) -> TestServer {
    TestServer::new(build_router(AppState::new(root))).unwrap()
}

#[tokio::test]
async fn should_report_health() {
    let dir = site();
    let server = server(dir.path());
    let response = server.get("/healthz").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn should_be_ready_only_with_site_root() {
    let dir = site();
    server(dir.path()).get("/readyz").await.assert_status_ok();

    let missing = dir.path().join("nope");
    let response = server(&missing).get("/readyz").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_serve_fixed_pages() {
    let dir = site();
    let server = server(dir.path());
    server.get("/").await.assert_text("<h1>Recipes</h1>");
    server.get("/add-recipe.html").await.assert_text("<h1>Add</h1>");
    server.get("/recipe-detail.html").await.assert_text("<h1>Detail</h1>");
}

#[tokio::test]
async fn should_serve_assets_and_404_otherwise() {
    let dir = site();
    let server = server(dir.path());
    server.get("/css/style.css").await.assert_text("body{}");
    server
        .get("/missing.js")
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_tag_responses_with_request_id() {
    let dir = site();
    let response = server(dir.path()).get("/healthz").await;
    let id = response.header("x-request-id");
    assert_eq!(id.to_str().unwrap().len(), 36);
}
