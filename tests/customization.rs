mod common;

use axum::http::StatusCode;
use tower::ServiceExt;

#[tokio::test]
async fn lists_customization_types_with_display_metadata() {
    let app = common::app();

    let response = app
        .oneshot(common::get("/api/customization-types"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(common::ids(&body), vec![1, 2, 3, 4, 5]);
    assert_eq!(body[0]["name"], "engraving");
    assert_eq!(body[1]["displayName"], "Color Options");
    assert_eq!(body[2]["colorHex"], "#d8b4fe");
}
