//! Target URI assembly for the users resource.
//!
//! # Design
//! `ApiHost` is validated once when the client is configured. Every request
//! URI is derived fresh from it, since nothing is cached between calls. Query
//! parameters go through `url`'s form serializer, so names and values are
//! percent-encoded and appear exactly once each, in the order given.

use std::fmt;

use url::Url;

use crate::error::ConfigError;

/// Path of the users collection on the API host.
pub const USERS_PATH: &str = "/api/users";

/// Scheme, hostname and port of the API, the target of every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiHost {
    base: Url,
    hostname: String,
    port: u16,
}

impl ApiHost {
    /// Parse an origin such as `https://reqres.in` or `http://127.0.0.1:3000/`.
    pub fn parse(base_url: &str) -> Result<Self, ConfigError> {
        let base = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(base.scheme().to_string()));
        }
        let Some(hostname) = base.host_str().map(str::to_string) else {
            return Err(ConfigError::MissingHost(base_url.to_string()));
        };
        if base.path() != "/" || base.query().is_some() || base.fragment().is_some() {
            return Err(ConfigError::UnexpectedPath(base_url.to_string()));
        }
        let Some(port) = base.port_or_known_default() else {
            return Err(ConfigError::UnsupportedScheme(base.scheme().to_string()));
        };
        Ok(Self {
            base,
            hostname,
            port,
        })
    }

    pub fn scheme(&self) -> &str {
        self.base.scheme()
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `{host}/api/users`
    pub fn users_uri(&self) -> Url {
        let mut uri = self.base.clone();
        uri.set_path(USERS_PATH);
        uri
    }

    /// `{host}/api/users/{id}`
    pub fn user_uri(&self, id: u64) -> Url {
        let mut uri = self.base.clone();
        uri.set_path(&format!("{USERS_PATH}/{id}"));
        uri
    }

    /// `{host}/api/users?name=value&...`; no `?` at all when `params` is empty.
    pub fn users_query_uri<I, K, V>(&self, params: I) -> Url
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut uri = self.users_uri();
        let mut params = params.into_iter().peekable();
        if params.peek().is_some() {
            let mut pairs = uri.query_pairs_mut();
            for (name, value) in params {
                pairs.append_pair(name.as_ref(), value.as_ref());
            }
        }
        uri
    }
}

impl fmt::Display for ApiHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme(), self.hostname, self.port)
    }
}
