//! Executes an `HttpRequest` over the network with `ureq`.
//!
//! Each call builds its own `Agent` and drops it before returning, so no
//! pooled connection outlives the call that opened it, whether the call
//! succeeds or fails. Status codes are not treated as transport errors here;
//! deciding what a 4xx/5xx means is the handler's job.

use tracing::debug;
use ureq::Agent;

use crate::error::Cause;
use crate::handler::ResponseHandler;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::uri::ApiHost;

pub fn execute<H: ResponseHandler>(
    host: &ApiHost,
    request: &HttpRequest,
    handler: &H,
) -> Result<H::Output, Cause> {
    let agent: Agent = Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    debug!(
        method = %request.method,
        uri = %request.uri,
        %host,
        "executing request"
    );

    let response = send(&agent, request)?;
    handler.handle(response)
}

fn send(agent: &Agent, request: &HttpRequest) -> Result<HttpResponse, Cause> {
    let uri = request.uri.as_str();
    let content_type = request
        .headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .map_or("application/json", |(_, value)| value.as_str());

    let mut response = match (request.method, request.body.as_deref()) {
        (HttpMethod::Get, _) => agent.get(uri).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(uri).content_type(content_type).send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(uri).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(uri).content_type(content_type).send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(uri).send_empty(),
    }?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = response.body_mut().read_to_string()?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
