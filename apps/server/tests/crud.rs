use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, Response, StatusCode};
use tempfile::TempDir;
use tower::ServiceExt;

use poseidon_server::config::Config;
use poseidon_server::main_lib::build_state;
use poseidon_server::web::app_router;

async fn build_test_app() -> (axum::Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().to_string_lossy().to_string(),
        password_hash: None,
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state), tmp)
}

fn session_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie should be set")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn get(app: &axum::Router, path: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(
    app: &axum::Router,
    path: &str,
    body: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Pulls the record id out of a rendered edit link like `/bid/update/<id>"`.
fn extract_id(page: &str, link_prefix: &str) -> String {
    let start = page.find(link_prefix).expect("row link present") + link_prefix.len();
    page[start..].chars().take_while(|c| *c != '"').collect()
}

#[tokio::test]
async fn list_renders_empty_state() {
    let (app, _tmp) = build_test_app().await;

    let response = get(&app, "/bid/list", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("No bids recorded yet"));
}

#[tokio::test]
async fn create_bid_formats_quantity_and_flashes_success() {
    let (app, _tmp) = build_test_app().await;

    let response = post_form(
        &app,
        "/bid/validate",
        "account=ACC1&type=Buy&bidQuantity=10.5&askQuantity=&bid=&ask=&benchmark=&commentary=",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/bid/list"
    );
    let cookie = session_cookie(&response);

    let page = body_text(get(&app, "/bid/list", Some(&cookie)).await).await;
    assert!(page.contains("ACC1"));
    assert!(page.contains("10.50"));
    assert!(page.contains("Bid created"));

    // The flash is shown exactly once.
    let page = body_text(get(&app, "/bid/list", Some(&cookie)).await).await;
    assert!(!page.contains("Bid created"));
    assert!(page.contains("ACC1"));
}

#[tokio::test]
async fn invalid_bid_rerenders_form_and_persists_nothing() {
    let (app, _tmp) = build_test_app().await;

    let response = post_form(
        &app,
        "/bid/validate",
        "account=&type=Buy&bidQuantity=ten&askQuantity=&bid=&ask=&benchmark=&commentary=",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);
    let page = body_text(response).await;
    assert!(page.contains("Account is required"));
    assert!(page.contains("Bid quantity must be a number"));
    // The submitted value is preserved for correction.
    assert!(page.contains("value=\"ten\""));

    let page = body_text(get(&app, "/bid/list", Some(&cookie)).await).await;
    assert!(page.contains("No bids recorded yet"));
}

#[tokio::test]
async fn update_bid_overwrites_fields() {
    let (app, _tmp) = build_test_app().await;

    let response = post_form(
        &app,
        "/bid/validate",
        "account=ACC1&type=Buy&bidQuantity=10.5&askQuantity=&bid=&ask=&benchmark=&commentary=",
        None,
    )
    .await;
    let cookie = session_cookie(&response);

    let page = body_text(get(&app, "/bid/list", Some(&cookie)).await).await;
    let id = extract_id(&page, "/bid/update/");

    // The update form comes pre-filled.
    let form_page = body_text(
        get(&app, &format!("/bid/update/{}", id), Some(&cookie)).await,
    )
    .await;
    assert!(form_page.contains("value=\"ACC1\""));

    let response = post_form(
        &app,
        &format!("/bid/update/{}", id),
        "account=ACC2&type=Sell&bidQuantity=3&askQuantity=&bid=&ask=&benchmark=&commentary=",
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let page = body_text(get(&app, "/bid/list", Some(&cookie)).await).await;
    assert!(page.contains("Bid updated"));
    assert!(page.contains("ACC2"));
    assert!(page.contains("3.00"));
    assert!(!page.contains("ACC1"));
}

#[tokio::test]
async fn delete_bid_removes_row() {
    let (app, _tmp) = build_test_app().await;

    let response = post_form(
        &app,
        "/bid/validate",
        "account=ACC1&type=Buy&bidQuantity=&askQuantity=&bid=&ask=&benchmark=&commentary=",
        None,
    )
    .await;
    let cookie = session_cookie(&response);

    let page = body_text(get(&app, "/bid/list", Some(&cookie)).await).await;
    let id = extract_id(&page, "/bid/update/");

    let response = get(&app, &format!("/bid/delete/{}", id), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let page = body_text(get(&app, "/bid/list", Some(&cookie)).await).await;
    assert!(page.contains("Bid deleted"));
    assert!(page.contains("No bids recorded yet"));
}

#[tokio::test]
async fn update_of_missing_bid_flashes_error() {
    let (app, _tmp) = build_test_app().await;

    let response = get(&app, "/bid/update/does-not-exist", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/bid/list"
    );
    let cookie = session_cookie(&response);

    let page = body_text(get(&app, "/bid/list", Some(&cookie)).await).await;
    assert!(page.contains("Bid not found"));
}

#[tokio::test]
async fn rating_update_changes_order_and_keeps_labels() {
    let (app, _tmp) = build_test_app().await;

    let response = post_form(
        &app,
        "/rating/validate",
        "moodysRating=Aa1&sandPRating=AA&fitchRating=AAm&orderNumber=5",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&response);

    let page = body_text(get(&app, "/rating/list", Some(&cookie)).await).await;
    let id = extract_id(&page, "/rating/update/");
    assert!(page.contains("<td>5</td>"));

    let response = post_form(
        &app,
        &format!("/rating/update/{}", id),
        "moodysRating=Aa1&sandPRating=AA&fitchRating=AAm&orderNumber=3",
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let page = body_text(get(&app, "/rating/list", Some(&cookie)).await).await;
    assert!(page.contains("<td>3</td>"));
    assert!(!page.contains("<td>5</td>"));
    assert!(page.contains("Aa1"));
    assert!(page.contains("AAm"));
}

#[tokio::test]
async fn curve_point_renders_dates_and_placeholders() {
    let (app, _tmp) = build_test_app().await;

    let response = post_form(
        &app,
        "/curvePoint/validate",
        "curveId=10&asOfDate=2025-06-15T09:30&term=2&value=",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&response);

    let page = body_text(get(&app, "/curvePoint/list", Some(&cookie)).await).await;
    assert!(page.contains("<td>10</td>"));
    assert!(page.contains("2025-06-15 09:30"));
    assert!(page.contains("2.00"));
    // The omitted value column falls back to the placeholder.
    assert!(page.contains("N/A"));
}

#[tokio::test]
async fn delete_of_missing_curve_point_leaves_store_unchanged() {
    let (app, _tmp) = build_test_app().await;

    let response = post_form(
        &app,
        "/curvePoint/validate",
        "curveId=10&asOfDate=&term=&value=",
        None,
    )
    .await;
    let cookie = session_cookie(&response);

    let response = get(&app, "/curvePoint/delete/999", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/curvePoint/list"
    );

    let page = body_text(get(&app, "/curvePoint/list", Some(&cookie)).await).await;
    assert!(page.contains("Curve point not found"));
    assert!(page.contains("<td>10</td>"));
}

#[tokio::test]
async fn trade_and_rule_name_round_trips() {
    let (app, _tmp) = build_test_app().await;

    let response = post_form(
        &app,
        "/trade/validate",
        "account=DESK1&type=Buy&buyQuantity=100&sellQuantity=&buyPrice=101.25&sellPrice=\
         &benchmark=&tradeDate=2025-06-15T09:30&security=UST10Y&status=OPEN&trader=&book=",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&response);

    let page = body_text(get(&app, "/trade/list", Some(&cookie)).await).await;
    assert!(page.contains("DESK1"));
    assert!(page.contains("100.00"));
    assert!(page.contains("101.25"));
    assert!(page.contains("UST10Y"));

    let response = post_form(
        &app,
        "/ruleName/validate",
        "name=max-notional&description=Reject+large+trades&json=&template=&sqlStr=&sqlPart=",
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let page = body_text(get(&app, "/ruleName/list", Some(&cookie)).await).await;
    assert!(page.contains("max-notional"));
    assert!(page.contains("Reject large trades"));

    let id = extract_id(&page, "/ruleName/update/");
    let response = get(&app, &format!("/ruleName/delete/{}", id), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let page = body_text(get(&app, "/ruleName/list", Some(&cookie)).await).await;
    assert!(page.contains("No rules recorded yet"));
}

#[tokio::test]
async fn root_redirects_to_bid_list() {
    let (app, _tmp) = build_test_app().await;
    let response = get(&app, "/", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/bid/list"
    );
}
