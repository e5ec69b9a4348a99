//! Response handlers: turn an `HttpResponse` into the value a caller wants.
//!
//! Both handlers reject non-2xx responses with `Cause::Status`. They differ
//! only in what they do with a successful body: `BasicResponseHandler` hands
//! back the text untouched, `JsonResponseHandler<T>` parses it into `T`.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::Cause;
use crate::http::HttpResponse;
use crate::json;

pub trait ResponseHandler {
    type Output;

    fn handle(&self, response: HttpResponse) -> Result<Self::Output, Cause>;
}

/// Returns the raw body text of any successful response.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicResponseHandler;

impl ResponseHandler for BasicResponseHandler {
    type Output = String;

    fn handle(&self, response: HttpResponse) -> Result<String, Cause> {
        check_status(response).map(|response| response.body)
    }
}

/// Parses a successful body directly into `T`.
#[derive(Debug)]
pub struct JsonResponseHandler<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> JsonResponseHandler<T> {
    pub fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T> Default for JsonResponseHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> ResponseHandler for JsonResponseHandler<T> {
    type Output = T;

    fn handle(&self, response: HttpResponse) -> Result<T, Cause> {
        let response = check_status(response)?;
        Ok(json::from_json(&response.body)?)
    }
}

/// Map a non-2xx status to `Cause::Status`, keeping the body for debugging.
fn check_status(response: HttpResponse) -> Result<HttpResponse, Cause> {
    if response.is_success() {
        return Ok(response);
    }
    Err(Cause::Status {
        status: response.status,
        body: response.body,
    })
}
