use std::time::Duration;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode, header},
    response::Response,
};
use chrono::{FixedOffset, TimeZone};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};
use tower::ServiceExt; // for `oneshot`
use uuid::Uuid;

use poker_league::{
    auth::{
        TokenKind,
        jwt::{JwtKeys, encode_token, make_session_claims},
        password::hash_password,
    },
    db::entities::{
        cash_game, cash_game_player, tournament, tournament_registration, tournament_result, user,
    },
    test_helpers::{TEST_APP_SECRET, test_router},
};

fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

fn ts() -> chrono::DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2026, 2, 14, 20, 0, 0)
        .single()
        .unwrap()
}

fn user_model(id: Uuid, email: &str, password_hash: &str) -> user::Model {
    user::Model {
        id,
        email: email.to_string(),
        name: Some("Player".to_string()),
        password_hash: password_hash.to_string(),
        role_id: None,
        team_id: None,
        created_at: ts(),
        updated_at: ts(),
    }
}

async fn graphql(db: MockDatabase, query: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    test_router(db)
        .oneshot(
            builder
                .body(Body::from(json!({ "query": query }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json_body(res: Response) -> Value {
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn set_cookies(res: &Response) -> Vec<String> {
    res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_reports_ok() {
    let res = test_router(mock_db())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await, json!({ "ok": true }));
}

#[tokio::test]
async fn graphiql_page_is_served() {
    let res = test_router(mock_db())
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("graphiql"));
}

#[tokio::test]
async fn login_sets_refresh_and_access_cookies() {
    let id = Uuid::new_v4();
    let hash = hash_password("pocket-aces").unwrap();
    let db = mock_db().append_query_results([[user_model(id, "ace@example.com", &hash)]]);

    let res = graphql(
        db,
        r#"mutation { loginUser(email: "ace@example.com", password: "pocket-aces") { id email } }"#,
        None,
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let cookies = set_cookies(&res);
    assert_eq!(cookies.len(), 2);
    assert!(cookies[0].starts_with("refresh-token="));
    assert!(cookies[0].contains("Max-Age=604800"));
    assert!(cookies[0].contains("HttpOnly"));
    assert!(cookies[1].starts_with("access-token="));
    assert!(cookies[1].contains("Max-Age=86400"));
    assert!(cookies[1].contains("HttpOnly"));

    let json = json_body(res).await;
    assert_eq!(json["data"]["loginUser"]["id"], id.to_string());
    assert_eq!(json["data"]["loginUser"]["email"], "ace@example.com");
}

#[tokio::test]
async fn login_with_unknown_email_sets_no_cookies() {
    let db = mock_db().append_query_results([Vec::<user::Model>::new()]);

    let res = graphql(
        db,
        r#"mutation { loginUser(email: "ghost@example.com", password: "x") { id } }"#,
        None,
    )
    .await;

    assert!(set_cookies(&res).is_empty());
    let json = json_body(res).await;
    assert!(json["data"].is_null());
    assert_eq!(json["errors"][0]["message"], "Invalid credentials");
    assert_eq!(json["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn login_with_wrong_password_sets_no_cookies() {
    let hash = hash_password("pocket-aces").unwrap();
    let db = mock_db().append_query_results([[user_model(
        Uuid::new_v4(),
        "ace@example.com",
        &hash,
    )]]);

    let res = graphql(
        db,
        r#"mutation { loginUser(email: "ace@example.com", password: "seven-deuce") { id } }"#,
        None,
    )
    .await;

    assert!(set_cookies(&res).is_empty());
    let json = json_body(res).await;
    assert_eq!(json["errors"][0]["message"], "Invalid credentials");
    assert_eq!(json["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn logout_expires_both_cookies() {
    let res = graphql(mock_db(), "mutation { logoutUser }", None).await;

    let cookies = set_cookies(&res);
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
    assert_eq!(json_body(res).await["data"]["logoutUser"], true);
}

#[tokio::test]
async fn viewer_is_null_without_cookie() {
    let res = graphql(mock_db(), "{ viewer { id } }", None).await;

    let json = json_body(res).await;
    assert!(json["errors"].is_null());
    assert!(json["data"]["viewer"].is_null());
}

#[tokio::test]
async fn viewer_resolves_access_token_cookie() {
    let id = Uuid::new_v4();
    let keys = JwtKeys::from_secret(TEST_APP_SECRET.as_bytes());
    let claims = make_session_claims(&id, TokenKind::Access, Duration::from_secs(600));
    let token = encode_token(&keys, &claims).unwrap();
    let db = mock_db().append_query_results([[user_model(id, "ace@example.com", "hash")]]);

    let res = graphql(
        db,
        "{ viewer { id email } }",
        Some(&format!("access-token={token}")),
    )
    .await;

    let json = json_body(res).await;
    assert_eq!(json["data"]["viewer"]["id"], id.to_string());
}

#[tokio::test]
async fn refresh_rejects_access_token_in_refresh_cookie() {
    let id = Uuid::new_v4();
    let keys = JwtKeys::from_secret(TEST_APP_SECRET.as_bytes());
    let claims = make_session_claims(&id, TokenKind::Access, Duration::from_secs(600));
    let token = encode_token(&keys, &claims).unwrap();

    let res = graphql(
        mock_db(),
        "mutation { refreshSession { id } }",
        Some(&format!("refresh-token={token}")),
    )
    .await;

    assert!(set_cookies(&res).is_empty());
    let json = json_body(res).await;
    assert_eq!(json["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn refresh_without_cookie_is_rejected() {
    let res = graphql(mock_db(), "mutation { refreshSession { id } }", None).await;

    assert!(set_cookies(&res).is_empty());
    let json = json_body(res).await;
    assert_eq!(json["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn get_user_returns_null_when_absent() {
    let db = mock_db().append_query_results([Vec::<user::Model>::new()]);

    let res = graphql(
        db,
        &format!(r#"{{ getUser(id: "{}") {{ id }} }}"#, Uuid::new_v4()),
        None,
    )
    .await;

    let json = json_body(res).await;
    assert!(json["errors"].is_null());
    assert!(json["data"]["getUser"].is_null());
}

#[tokio::test]
async fn get_users_ranks_page_by_tournament_results() {
    let rookie = Uuid::new_v4();
    let shark = Uuid::new_v4();
    let event = Uuid::new_v4();
    let home_game = Uuid::new_v4();
    let result = |user_id: Uuid, position: i32| tournament_result::Model {
        id: Uuid::new_v4(),
        user_id,
        tournament_id: event,
        position,
        prize: 500,
        created_at: ts(),
    };
    let db = mock_db()
        .append_query_results([vec![
            user_model(rookie, "rookie@example.com", "hash"),
            user_model(shark, "shark@example.com", "hash"),
        ]])
        .append_query_results([Vec::<tournament_registration::Model>::new()])
        .append_query_results([vec![result(shark, 1), result(shark, 2)]])
        .append_query_results([[tournament::Model {
            id: event,
            name: "Friday Freezeout".to_string(),
            buy_in: 2_000,
            starts_at: None,
            created_at: ts(),
        }]])
        .append_query_results([[cash_game_player::Model {
            id: Uuid::new_v4(),
            cash_game_id: home_game,
            user_id: rookie,
            buy_in: 1_000,
            cash_out: None,
            created_at: ts(),
        }]])
        .append_query_results([[cash_game::Model {
            id: home_game,
            organizer_id: shark,
            name: "Thursday 1/2".to_string(),
            stakes: "1/2".to_string(),
            started_at: None,
            created_at: ts(),
        }]])
        .append_query_results([[cash_game::Model {
            id: home_game,
            organizer_id: shark,
            name: "Thursday 1/2".to_string(),
            stakes: "1/2".to_string(),
            started_at: None,
            created_at: ts(),
        }]]);

    let res = graphql(
        db,
        "{ getUsers(take: 2, skip: 0) { email tournamentResults { position tournament { name } } cashGamePlayed { id cashGame { name } } cashGameOrganized { id } } }",
        None,
    )
    .await;

    let json = json_body(res).await;
    let users = json["data"]["getUsers"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "shark@example.com");
    assert_eq!(users[0]["tournamentResults"].as_array().unwrap().len(), 2);
    assert_eq!(
        users[0]["tournamentResults"][0]["tournament"]["name"],
        "Friday Freezeout"
    );
    assert_eq!(users[1]["email"], "rookie@example.com");
    assert_eq!(users[0]["cashGamePlayed"], json!([]));
    assert_eq!(users[0]["cashGameOrganized"][0]["id"], home_game.to_string());
    assert_eq!(
        users[1]["cashGamePlayed"][0]["cashGame"]["name"],
        "Thursday 1/2"
    );
}

#[tokio::test]
async fn get_users_rejects_non_positive_take() {
    let res = graphql(mock_db(), "{ getUsers(take: 0, skip: 0) { id } }", None).await;

    let json = json_body(res).await;
    assert_eq!(json["errors"][0]["extensions"]["code"], "BAD_REQUEST");
    assert_eq!(json["errors"][0]["message"], "Invalid pagination: take=0 skip=0");
}

#[tokio::test]
async fn create_user_returns_record_without_password_fields() {
    let id = Uuid::new_v4();
    let db = mock_db().append_query_results([[user_model(id, "new@example.com", "stored-hash")]]);

    let res = graphql(
        db,
        r#"mutation { createUser(input: { email: "new@example.com", password: "p" }) { id email tournamentResults { id } } }"#,
        None,
    )
    .await;

    let json = json_body(res).await;
    assert_eq!(json["data"]["createUser"]["id"], id.to_string());
    assert!(json["data"]["createUser"]["tournamentResults"].is_null());
}

#[tokio::test]
async fn password_hash_is_not_queryable() {
    let res = graphql(
        mock_db(),
        &format!(r#"{{ getUser(id: "{}") {{ passwordHash }} }}"#, Uuid::new_v4()),
        None,
    )
    .await;

    let json = json_body(res).await;
    assert!(json["errors"][0]["message"].as_str().unwrap().contains("passwordHash"));
}
