//! Typed client for the users API.
//!
//! # Design
//! `UsersClient` holds only the validated `ApiHost` and carries no mutable
//! state, so one instance can serve concurrent callers. Each operation is
//! split into a `build_*` method that produces an `HttpRequest` and a private
//! `fetch_*` that executes it and decodes the response. The public method
//! wraps any `Cause` in a `RequestProcessingError` naming the operation.

use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{Cause, ConfigError, RequestProcessingError};
use crate::handler::{BasicResponseHandler, JsonResponseHandler};
use crate::http::{HttpMethod, HttpRequest};
use crate::json;
use crate::transport;
use crate::types::{Envelope, User, UserPage};
use crate::uri::ApiHost;

/// Synchronous, stateless client for the users API.
#[derive(Debug, Clone)]
pub struct UsersClient {
    host: ApiHost,
}

impl UsersClient {
    pub fn new(host: ApiHost) -> Self {
        Self { host }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.api_host().map(Self::new)
    }

    pub fn host(&self) -> &ApiHost {
        &self.host
    }

    pub fn build_get_user(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            uri: self.host.user_uri(id).into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_paginated_users<I, K, V>(&self, params: I) -> HttpRequest
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        HttpRequest {
            method: HttpMethod::Get,
            uri: self.host.users_query_uri(params).into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_user(&self, input: &User) -> Result<HttpRequest, serde_json::Error> {
        self.build_json_request(HttpMethod::Post, input)
    }

    pub fn build_update_user(&self, input: &User) -> Result<HttpRequest, serde_json::Error> {
        self.build_json_request(HttpMethod::Put, input)
    }

    fn build_json_request(
        &self,
        method: HttpMethod,
        input: &User,
    ) -> Result<HttpRequest, serde_json::Error> {
        let body = json::to_json(input)?;
        Ok(HttpRequest {
            method,
            uri: self.host.users_uri().into(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Fetch one user; the API wraps it in a `{"data": ...}` envelope.
    pub fn get_user(&self, id: u64) -> Result<User, RequestProcessingError> {
        self.fetch_user(id).map_err(|cause| {
            RequestProcessingError::new(format!("Failed to get user for ID: {id}"), cause)
        })
    }

    /// Fetch a page of users and return the body text as-is.
    pub fn get_paginated_users<I, K, V>(&self, params: I) -> Result<String, RequestProcessingError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.fetch_page_text(params)
            .map_err(|cause| RequestProcessingError::new("Failed to get paginated users.", cause))
    }

    /// Fetch a page of users, decoding the body directly into a `UserPage`.
    pub fn get_paginated_users_typed<I, K, V>(
        &self,
        params: I,
    ) -> Result<UserPage, RequestProcessingError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.fetch_page(params)
            .map_err(|cause| RequestProcessingError::new("Failed to get paginated users.", cause))
    }

    pub fn create_user(&self, input: &User) -> Result<User, RequestProcessingError> {
        self.send_user(HttpMethod::Post, input)
            .map_err(|cause| RequestProcessingError::new("Failed to create user.", cause))
    }

    pub fn update_user(&self, input: &User) -> Result<User, RequestProcessingError> {
        self.send_user(HttpMethod::Put, input)
            .map_err(|cause| RequestProcessingError::new("Failed to update user.", cause))
    }

    fn fetch_user(&self, id: u64) -> Result<User, Cause> {
        let request = self.build_get_user(id);
        let body = transport::execute(&self.host, &request, &BasicResponseHandler)?;
        info!(response = %json::make_pretty(&body), "got response");
        let envelope: Envelope<User> = json::from_json(&body)?;
        Ok(envelope.data)
    }

    fn fetch_page_text<I, K, V>(&self, params: I) -> Result<String, Cause>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let request = self.build_get_paginated_users(params);
        let body = transport::execute(&self.host, &request, &BasicResponseHandler)?;
        info!(response = %json::make_pretty(&body), "got response");
        Ok(body)
    }

    fn fetch_page<I, K, V>(&self, params: I) -> Result<UserPage, Cause>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let request = self.build_get_paginated_users(params);
        let handler = JsonResponseHandler::<UserPage>::new();
        let page = transport::execute(&self.host, &request, &handler)?;
        info!(page = page.page, users = page.data.len(), total = page.total, "got response");
        Ok(page)
    }

    fn send_user(&self, method: HttpMethod, input: &User) -> Result<User, Cause> {
        let request = self.build_json_request(method, input)?;
        debug!(%method, input = request.body.as_deref().unwrap_or_default(), "sending user");
        let body = transport::execute(&self.host, &request, &BasicResponseHandler)?;
        info!(response = %json::make_pretty(&body), "got response");
        Ok(json::from_json(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> UsersClient {
        UsersClient::new(ApiHost::parse("http://localhost:3000").unwrap())
    }

    fn user() -> User {
        User {
            id: 1,
            email: "george.bluth@reqres.in".to_string(),
            first_name: "George".to_string(),
            last_name: "Bluth".to_string(),
            avatar: None,
        }
    }

    #[test]
    fn build_get_user_produces_correct_request() {
        let req = client().build_get_user(2);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.uri, "http://localhost:3000/api/users/2");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn build_get_paginated_users_encodes_parameters() {
        let req = client().build_get_paginated_users([("page", "2"), ("q", "a b")]);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.uri, "http://localhost:3000/api/users?page=2&q=a+b");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_user_produces_correct_request() {
        let req = client().build_create_user(&user()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.uri, "http://localhost:3000/api/users");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 1);
        assert_eq!(body["first_name"], "George");
        assert!(body.get("avatar").is_none());
    }

    #[test]
    fn build_update_user_targets_collection_with_put() {
        let req = client().build_update_user(&user()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.uri, "http://localhost:3000/api/users");
        let body: User = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, user());
    }

    #[test]
    fn from_config_rejects_bad_host() {
        let config = ClientConfig::new("localhost:3000/api");
        assert!(UsersClient::from_config(&config).is_err());
    }
}
