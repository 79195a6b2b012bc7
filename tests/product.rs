mod common;

use axum::http::StatusCode;
use tower::ServiceExt;

#[tokio::test]
async fn lists_the_full_catalog_in_insertion_order() {
    let app = common::app();

    let response = app.oneshot(common::get("/api/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(common::ids(&body), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[tokio::test]
async fn filters_by_category() {
    let app = common::app();

    let response = app
        .oneshot(common::get("/api/products?categoryId=1"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(common::ids(&body), vec![1, 6, 7]);
}

#[tokio::test]
async fn price_bounds_are_inclusive() {
    let app = common::app();

    // 79.99 and 149.99 are exact product prices on both edges.
    let response = app
        .oneshot(common::get(
            "/api/products?minPrice=79.99&maxPrice=149.99",
        ))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(common::ids(&body), vec![1, 2, 3]);
}

#[tokio::test]
async fn customization_types_match_on_any_listed_id() {
    let app = common::app();

    // Type 5 is monogramming; only the mug set and the portfolio carry it.
    let response = app
        .clone()
        .oneshot(common::get("/api/products?customizationTypes=5"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(common::ids(&body), vec![2, 7]);

    let response = app
        .oneshot(common::get("/api/products?customizationTypes=5,4"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(common::ids(&body), vec![2, 3, 5, 7]);
}

#[tokio::test]
async fn malformed_customization_type_list_is_rejected() {
    let app = common::app();

    let response = app
        .oneshot(common::get("/api/products?customizationTypes=1,abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn search_matches_name_and_descriptions_case_insensitively() {
    let app = common::app();

    let response = app
        .oneshot(common::get("/api/products?search=LEATHER"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(common::ids(&body), vec![1, 7]);
}

#[tokio::test]
async fn filters_by_minimum_rating() {
    let app = common::app();

    let response = app
        .oneshot(common::get("/api/products?minRating=4.8"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(common::ids(&body), vec![1, 3, 5, 7]);
}

#[tokio::test]
async fn combined_filters_intersect() {
    let app = common::app();

    let response = app
        .oneshot(common::get("/api/products?categoryId=1&minRating=4.8"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(common::ids(&body), vec![1, 7]);
}

#[tokio::test]
async fn price_sorts_reverse_each_other() {
    let app = common::app();

    let response = app
        .clone()
        .oneshot(common::get("/api/products?sort=price-asc"))
        .await
        .unwrap();
    let ascending = common::ids(&common::body_json(response).await);
    assert_eq!(ascending, vec![8, 6, 1, 2, 3, 7, 4, 5]);

    let response = app
        .oneshot(common::get("/api/products?sort=price-desc"))
        .await
        .unwrap();
    let mut descending = common::ids(&common::body_json(response).await);
    descending.reverse();
    assert_eq!(ascending, descending);
}

#[tokio::test]
async fn newest_sort_puts_new_arrivals_first() {
    let app = common::app();

    let response = app
        .oneshot(common::get("/api/products?sort=newest"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(common::ids(&body), vec![3, 8, 1, 2, 4, 5, 6, 7]);
}

#[tokio::test]
async fn unknown_sort_key_is_ignored() {
    let app = common::app();

    let response = app
        .oneshot(common::get("/api/products?sort=alphabetical"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(common::ids(&body), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[tokio::test]
async fn fetches_a_product_by_id() {
    let app = common::app();

    let response = app.oneshot(common::get("/api/products/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["name"], "Wooden Desk Organizer");
    assert_eq!(body["isNew"], true);
    assert_eq!(body["customizationOptions"], serde_json::json!([4, 1]));
}

#[tokio::test]
async fn missing_product_is_not_found_and_bad_id_is_rejected() {
    let app = common::app();

    let response = app
        .clone()
        .oneshot(common::get("/api/products/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(common::get("/api/products/notanid"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn featured_products_rank_bestsellers_then_new_then_rating() {
    let app = common::app();

    let response = app
        .oneshot(common::get("/api/featured-products"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(common::ids(&body), vec![1, 6, 3, 8, 5, 7, 2, 4]);
}

#[tokio::test]
async fn featured_limit_truncates_after_ranking() {
    let app = common::app();

    let response = app
        .clone()
        .oneshot(common::get("/api/featured-products?limit=4"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(common::ids(&body), vec![1, 6, 3, 8]);

    let response = app
        .oneshot(common::get("/api/featured-products?limit=0"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}
