use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

const SUPPORT_URL: &str = "https://reqres.in/#support-heading";
const SUPPORT_TEXT: &str = "To keep ReqRes free, contributions towards server costs are appreciated!";
const DEFAULT_PER_PAGE: u32 = 6;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Support {
    pub url: String,
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    pub support: Support,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserPage {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub data: Vec<User>,
    pub support: Support,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

pub type Db = Arc<RwLock<BTreeMap<u64, User>>>;

pub fn app() -> Router {
    app_with(seed_users())
}

/// Router over the given initial users.
pub fn app_with(users: impl IntoIterator<Item = User>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        users.into_iter().map(|user| (user.id, user)).collect(),
    ));
    Router::new()
        .route(
            "/api/users",
            get(list_users).post(create_user).put(update_user),
        )
        .route("/api/users/{id}", get(get_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub fn seed_users() -> Vec<User> {
    [
        (1, "George", "Bluth"),
        (2, "Janet", "Weaver"),
        (3, "Emma", "Wong"),
        (4, "Eve", "Holt"),
    ]
    .into_iter()
    .map(|(id, first, last)| User {
        id,
        email: format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
        first_name: first.to_string(),
        last_name: last.to_string(),
        avatar: Some(format!("https://reqres.in/img/faces/{id}-image.jpg")),
    })
    .collect()
}

fn support() -> Support {
    Support {
        url: SUPPORT_URL.to_string(),
        text: SUPPORT_TEXT.to_string(),
    }
}

async fn list_users(State(db): State<Db>, Query(query): Query<PageQuery>) -> Json<UserPage> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);
    let users = db.read().await;
    let total = users.len() as u64;
    let skip = (page as usize - 1).saturating_mul(per_page as usize);
    let data: Vec<User> = users
        .values()
        .skip(skip)
        .take(per_page as usize)
        .cloned()
        .collect();
    tracing::debug!(page, per_page, returned = data.len(), "list users");
    Json(UserPage {
        page,
        per_page,
        total,
        total_pages: total.div_ceil(u64::from(per_page)) as u32,
        data,
        support: support(),
    })
}

async fn get_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Envelope<User>>, (StatusCode, Json<Value>)> {
    let users = db.read().await;
    match users.get(&id) {
        Some(user) => Ok(Json(Envelope {
            data: user.clone(),
            support: support(),
        })),
        None => {
            tracing::debug!(id, "user not found");
            Err((StatusCode::NOT_FOUND, Json(json!({}))))
        }
    }
}

async fn create_user(State(db): State<Db>, Json(input): Json<User>) -> (StatusCode, Json<User>) {
    tracing::debug!(id = input.id, "create user");
    db.write().await.insert(input.id, input.clone());
    (StatusCode::CREATED, Json(input))
}

async fn update_user(State(db): State<Db>, Json(input): Json<User>) -> Json<User> {
    tracing::debug!(id = input.id, "update user");
    db.write().await.insert(input.id, input.clone());
    Json(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_users_have_reqres_emails() {
        let users = seed_users();
        assert_eq!(users.len(), 4);
        assert_eq!(users[0].email, "george.bluth@reqres.in");
        assert_eq!(
            users[3].avatar.as_deref(),
            Some("https://reqres.in/img/faces/4-image.jpg")
        );
    }

    #[test]
    fn user_roundtrips_through_json() {
        let user = seed_users().remove(1);
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn user_rejects_missing_email() {
        let result: Result<User, _> =
            serde_json::from_str(r#"{"id":9,"first_name":"No","last_name":"Email"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn page_query_fields_are_optional() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert!(query.page.is_none());
        assert!(query.per_page.is_none());
    }
}
