use argon2::{password_hash::SaltString, Argon2, PasswordHasher};
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, Response, StatusCode};
use rand::rngs::OsRng;
use tempfile::TempDir;
use tower::ServiceExt;

use poseidon_server::config::Config;
use poseidon_server::main_lib::build_state;
use poseidon_server::web::app_router;

async fn build_auth_app(password: &str) -> (axum::Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string();
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().to_string_lossy().to_string(),
        password_hash: Some(password_hash),
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

#[tokio::test]
async fn login_gate_blocks_then_admits() {
    let password = "super-secret";
    let (app, _tmp) = build_auth_app(password).await;

    // Unauthenticated requests are sent to the login page.
    let response = get(&app, "/bid/list", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
    let cookie = session_cookie(&response);

    // Wrong password re-renders the login form.
    let response = post_form(&app, "/login", "password=nope", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Invalid password"));

    let response = get(&app, "/bid/list", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // Correct password authenticates this session.
    let body = format!("password={}", password);
    let response = post_form(&app, "/login", &body, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/bid/list"
    );

    let response = get(&app, "/bid/list", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn logout_drops_the_session() {
    let password = "super-secret";
    let (app, _tmp) = build_auth_app(password).await;

    let response = get(&app, "/bid/list", None).await;
    let cookie = session_cookie(&response);
    let body = format!("password={}", password);
    let response = post_form(&app, "/login", &body, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = post_form(&app, "/logout", "", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");

    // The old session token no longer grants access.
    let response = get(&app, "/bid/list", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
}
