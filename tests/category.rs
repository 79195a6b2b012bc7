mod common;

use axum::http::StatusCode;
use tower::ServiceExt;

#[tokio::test]
async fn lists_all_categories() {
    let app = common::app();

    let response = app.oneshot(common::get("/api/categories")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(common::ids(&body), vec![1, 2, 3, 4]);
    assert_eq!(body[0]["name"], "Leather Goods");
    assert_eq!(body[1]["productCount"], 38);
}

#[tokio::test]
async fn fetches_a_category_by_id() {
    let app = common::app();

    let response = app.oneshot(common::get("/api/categories/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["name"], "Ceramics");
    assert_eq!(body["description"], "Mugs, plates, decor & art");
}

#[tokio::test]
async fn missing_category_is_not_found() {
    let app = common::app();

    let response = app
        .oneshot(common::get("/api/categories/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = common::body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn non_numeric_category_id_is_rejected() {
    let app = common::app();

    let response = app
        .oneshot(common::get("/api/categories/abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
