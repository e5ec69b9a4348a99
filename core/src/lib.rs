//! Synchronous typed client for a reqres-style users REST API.
//!
//! # Overview
//! Assembles request URIs, executes GET/POST/PUT calls through `ureq`, and
//! decodes JSON responses into typed models. Every failure surfaces as a
//! single `RequestProcessingError` carrying the underlying `Cause`.
//!
//! # Design
//! - `UsersClient` is stateless; it holds only the validated `ApiHost`.
//! - Each operation is split into `build_*` (plain-data `HttpRequest`) and an
//!   execute step, so request building is testable without a network.
//! - A fresh transport agent is created per call and released on return.
//! - `ResponseHandler` decides what a response means: raw text
//!   (`BasicResponseHandler`) or a typed value (`JsonResponseHandler<T>`).
//! - Types are defined independently from the mock-server crate; the
//!   integration tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod json;
pub mod transport;
pub mod types;
pub mod uri;

pub use client::UsersClient;
pub use config::ClientConfig;
pub use error::{Cause, ConfigError, RequestProcessingError};
pub use handler::{BasicResponseHandler, JsonResponseHandler, ResponseHandler};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Envelope, Support, User, UserPage};
pub use uri::ApiHost;
