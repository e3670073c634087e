//! End-to-end HTTP tests against the in-memory router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use orderly_core::{Order, Product};
use orderly_gateway::{app_state::AppState, config::Config, router};
use rust_decimal::Decimal;
use tower::ServiceExt;

fn setup() -> (AppState, Router) {
    let state = AppState::new(Config::default()).unwrap();
    let app = router::build_router(state.clone());
    (state, app)
}

fn request(method: Method, uri: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.unwrap()
}

async fn body_bytes(res: Response) -> Vec<u8> {
    res.into_body().collect().await.unwrap().to_bytes().to_vec()
}

async fn body_string(res: Response) -> String {
    String::from_utf8_lossy(&body_bytes(res).await).to_string()
}

async fn create_product(app: &Router, name: &str, price: &str) -> Product {
    let uri = format!("/product?name={name}&price={price}");
    let res = send(app, request(Method::POST, &uri, None)).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    serde_json::from_slice(&body_bytes(res).await).unwrap()
}

async fn create_order(app: &Router, ids: &str) -> Order {
    let res = send(app, request(Method::POST, "/orders/", Some(ids))).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    serde_json::from_slice(&body_bytes(res).await).unwrap()
}

#[tokio::test]
async fn create_product_returns_201_with_location() {
    let (_, app) = setup();
    let res = send(&app, request(Method::POST, "/product?name=A&price=10.50", None)).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.headers()[header::LOCATION], "1");

    let product: Product = serde_json::from_slice(&body_bytes(res).await).unwrap();
    assert_eq!(product.id, 1);
    assert_eq!(product.name.as_deref(), Some("A"));
    assert_eq!(product.price, Decimal::new(1050, 2));
}

#[tokio::test]
async fn create_product_rejects_bad_price() {
    let (_, app) = setup();
    let res = send(&app, request(Method::POST, "/product?name=A&price=abc", None)).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(res).await.contains("BAD_REQUEST"));
}

#[tokio::test]
async fn catalog_lists_created_product() {
    let (_, app) = setup();
    create_product(&app, "widget", "3").await;

    let res = send(&app, request(Method::GET, "/products", None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let catalog: Vec<Product> = serde_json::from_slice(&body_bytes(res).await).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].id, 1);

    let res = send(&app, request(Method::GET, "/products/9", None)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn order_scenario_with_checkout_metric() {
    let (state, app) = setup();
    let a = create_product(&app, "A", "10").await;
    let b = create_product(&app, "B", "20").await;

    let order = create_order(&app, &format!("[{}, {}, 404]", a.id, b.id)).await;
    assert_eq!(order.products, vec![a, b]);
    assert_eq!(order.total_price, Decimal::new(30, 0));

    let uri = format!("/orders/{}/checkout", order.id);
    let res = send(&app, request(Method::POST, &uri, None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(state.metrics().order_sizes.snapshot(&[]), (1, 2));

    let res = send(&app, request(Method::GET, "/metrics", None)).await;
    let text = body_string(res).await;
    assert!(text.contains("orderly_orders_created_total 1"));
    assert!(text.contains("orderly_orders 1"));
    assert!(text.contains("orderly_products_created_total{product_price=\"10\"} 1"));
    assert!(text.contains("orderly_products_per_order_count 1"));
}

#[tokio::test]
async fn empty_order_has_zero_total() {
    let (_, app) = setup();
    let order = create_order(&app, "[]").await;
    assert!(order.products.is_empty());
    assert_eq!(order.total_price, Decimal::ZERO);

    let res = send(&app, request(Method::GET, "/orders", None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let orders: Vec<Order> = serde_json::from_slice(&body_bytes(res).await).unwrap();
    assert_eq!(orders, vec![order]);
}

#[tokio::test]
async fn order_total_overflow_is_400() {
    let (state, app) = setup();
    let max = Decimal::MAX.to_string();
    let a = create_product(&app, "a", &max).await;
    let b = create_product(&app, "b", &max).await;

    let body = format!("[{}, {}]", a.id, b.id);
    let res = send(&app, request(Method::POST, "/orders/", Some(&body))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(res).await.contains("BAD_REQUEST"));
    assert_eq!(state.orders().order_count(), 0);

    let res = send(&app, request(Method::GET, "/healthz", None)).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn product_json_carries_numeric_price() {
    let (_, app) = setup();
    let res = send(&app, request(Method::POST, "/product?name=a&price=10.5", None)).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(body_string(res).await, r#"{"id":1,"name":"a","price":10.5}"#);
}

#[tokio::test]
async fn malformed_order_body_is_rejected() {
    let (state, app) = setup();
    let res = send(&app, request(Method::POST, "/orders/", Some("{\"ids\":1}"))).await;
    assert!(res.status().is_client_error());
    assert_eq!(state.orders().order_count(), 0);
}

#[tokio::test]
async fn get_then_delete_order() {
    let (_, app) = setup();
    let order = create_order(&app, "[]").await;
    let uri = format!("/orders/{}", order.id);

    let res = send(&app, request(Method::GET, &uri, None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: Order = serde_json::from_slice(&body_bytes(res).await).unwrap();
    assert_eq!(fetched, order);

    let res = send(&app, request(Method::DELETE, &uri, None)).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = send(&app, request(Method::GET, &uri, None)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_order_still_ok() {
    let (state, app) = setup();
    create_order(&app, "[]").await;

    let res = send(&app, request(Method::DELETE, "/orders/77", None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(state.orders().order_count(), 1);
}

#[tokio::test]
async fn checkout_unknown_order_is_404() {
    let (state, app) = setup();
    let res = send(&app, request(Method::POST, "/orders/5/checkout", None)).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = body_string(res).await;
    assert!(body.contains("NOT_FOUND"));
    assert_eq!(state.metrics().order_sizes.snapshot(&[]), (0, 0));
}

#[tokio::test]
async fn readyz_flips_when_draining() {
    let (state, app) = setup();
    assert_eq!(state.cfg().version, 1);

    let res = send(&app, request(Method::GET, "/readyz", None)).await;
    assert_eq!(res.status(), StatusCode::OK);

    state.set_draining();
    let res = send(&app, request(Method::GET, "/readyz", None)).await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let res = send(&app, request(Method::GET, "/healthz", None)).await;
    assert_eq!(res.status(), StatusCode::OK);
}
