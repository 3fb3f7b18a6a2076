//! Integration tests for the backend gateway, run against a local axum
//! server standing in for the real REST backend.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use api::{ApiClient, ApiError, CreateMilestoneRequest, LoginRequest, Milestone};
use store::{MemoryStore, SessionStore};

/// Bind the router on an ephemeral port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_with_token(base: String, token: &str) -> ApiClient<MemoryStore> {
    let session = MemoryStore::new();
    session.save(token, r#"{"id":1,"firstName":"A","lastName":"B","email":"a@b.c"}"#);
    ApiClient::new(base, session)
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    async fn me(headers: HeaderMap) -> (StatusCode, Json<Value>) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if auth == "Bearer tok-123" {
            (
                StatusCode::OK,
                Json(json!({"id": 1, "firstName": "Ada", "lastName": "L", "email": "ada@x.io"})),
            )
        } else {
            (StatusCode::UNAUTHORIZED, Json(json!({})))
        }
    }

    let base = serve(Router::new().route("/auth/me", get(me))).await;
    let client = client_with_token(base, "tok-123");

    let user = client.me().await.unwrap();
    assert_eq!(user.first_name, "Ada");
}

#[tokio::test]
async fn test_401_clears_the_session() {
    async fn unauthorized() -> (StatusCode, Json<Value>) {
        (StatusCode::UNAUTHORIZED, Json(json!({"message": "expired"})))
    }

    let base = serve(Router::new().route("/milestones", get(unauthorized))).await;
    let client = client_with_token(base, "stale-token");

    let err = client.list_milestones().await.unwrap_err();
    assert_eq!(err, ApiError::SessionExpired);

    // A subsequent read of stored credentials returns none.
    assert!(client.session().token().is_none());
    assert!(client.session().user().is_none());
}

#[tokio::test]
async fn test_204_yields_empty_result() {
    async fn remove(Path(id): Path<i64>) -> StatusCode {
        assert_eq!(id, 42);
        StatusCode::NO_CONTENT
    }

    let base = serve(Router::new().route("/milestones/{id}", delete(remove))).await;
    let client = client_with_token(base, "tok");

    client.delete_milestone(42).await.unwrap();
}

#[tokio::test]
async fn test_error_message_comes_from_body() {
    async fn login() -> (StatusCode, Json<Value>) {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "message": "Email already registered"})),
        )
    }

    let base = serve(Router::new().route("/auth/login", post(login))).await;
    let client = ApiClient::new(base, MemoryStore::new());

    let err = client
        .login(&LoginRequest {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Api("Email already registered".to_string()));
}

#[tokio::test]
async fn test_error_without_message_is_generic() {
    async fn boom() -> (StatusCode, Json<Value>) {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"detail": "stack trace"})))
    }

    let base = serve(Router::new().route("/milestones", get(boom))).await;
    let client = client_with_token(base, "tok");

    let err = client.list_milestones().await.unwrap_err();
    assert_eq!(err, ApiError::Api("An error occurred".to_string()));
}

#[tokio::test]
async fn test_create_then_list_round_trip() {
    type Db = Arc<Mutex<Vec<Milestone>>>;

    async fn create(
        State(db): State<Db>,
        Json(req): Json<CreateMilestoneRequest>,
    ) -> (StatusCode, Json<Milestone>) {
        let mut items = db.lock().unwrap();
        let milestone = Milestone {
            id: items.len() as i64 + 1,
            title: req.title,
            description: req.description,
            completed: false,
            achieve_date: req.achieve_date,
            created_date: Some("2025-01-02".parse().unwrap()),
            completed_date: None,
            user_id: 1,
        };
        items.push(milestone.clone());
        (StatusCode::CREATED, Json(milestone))
    }

    async fn list(State(db): State<Db>) -> Json<Vec<Milestone>> {
        Json(db.lock().unwrap().clone())
    }

    let db: Db = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/milestones", post(create).get(list))
        .with_state(db);
    let base = serve(app).await;
    let client = client_with_token(base, "tok");

    client
        .create_milestone(&CreateMilestoneRequest {
            title: "Run 5k".to_string(),
            description: None,
            achieve_date: Some("2025-01-10".parse().unwrap()),
        })
        .await
        .unwrap();

    let items = client.list_milestones().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Run 5k");
    assert_eq!(items[0].achieve_date, Some("2025-01-10".parse().unwrap()));
    assert!(!items[0].completed);
}

#[tokio::test]
async fn test_login_parses_token_and_user() {
    async fn login(Json(req): Json<Value>) -> Json<Value> {
        assert_eq!(req["email"], "ada@x.io");
        Json(json!({
            "success": true,
            "message": "ok",
            "token": "jwt-1",
            "user": {"id": 9, "firstName": "Ada", "lastName": "L", "email": "ada@x.io"}
        }))
    }

    let base = serve(Router::new().route("/auth/login", post(login))).await;
    let client = ApiClient::new(base, MemoryStore::new());

    let resp = client
        .login(&LoginRequest {
            email: "ada@x.io".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap();
    assert!(resp.success);
    assert_eq!(resp.token.as_deref(), Some("jwt-1"));
    assert_eq!(resp.user.unwrap().id, 9);
}
