// OAuth2 client-credentials material and the bearer token it yields.
//
// `ApiClient::connect` runs the grant; this module owns the credential
// container, the grant's wire shape, and the parsed token state.

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Client-credentials grant material for the `/connect/token` endpoint.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    /// Space-joined into the single `scope` form field of the grant.
    pub scopes: Vec<String>,
    pub secret: SecretString,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        scopes: impl IntoIterator<Item = impl Into<String>>,
        secret: SecretString,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            scopes: scopes.into_iter().map(Into::into).collect(),
            secret,
        }
    }

    /// The form body for the token grant. The secret is exposed only at
    /// the moment the request body is built.
    pub(crate) fn grant_form(&self) -> [(&'static str, String); 4] {
        [
            ("grant_type", "client_credentials".to_owned()),
            ("client_id", self.client_id.clone()),
            ("scope", self.scopes.join(" ")),
            ("client_secret", self.secret.expose_secret().to_owned()),
        ]
    }
}

/// Wire shape of a successful token grant.
///
/// A response missing any of these fields is an authentication failure:
/// the endpoint signals rejection with a different body, not a status
/// we can rely on.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token_type: String,
    pub expires_in: u64,
    pub access_token: String,
}

/// Bearer token state recorded after a successful grant.
///
/// Immutable once acquired. Expiry is informational: nothing in this
/// crate renews a token automatically; call
/// [`ApiClient::reauthenticate`](crate::ApiClient::reauthenticate)
/// explicitly.
#[derive(Debug, Clone)]
pub struct Token {
    token_type: String,
    access_token: String,
    expires_in: u64,
    acquired_at: DateTime<Utc>,
}

impl Token {
    pub(crate) fn from_response(resp: TokenResponse, acquired_at: DateTime<Utc>) -> Self {
        Self {
            token_type: resp.token_type,
            access_token: resp.access_token,
            expires_in: resp.expires_in,
            acquired_at,
        }
    }

    /// Renders the `Authorization` header value: `<token_type> <token>`.
    pub fn authorization_value(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Grant-reported lifetime in seconds.
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }

    /// Wall-clock instant the grant completed.
    pub fn acquired_at(&self) -> DateTime<Utc> {
        self.acquired_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        let ttl = i64::try_from(self.expires_in).unwrap_or(i64::MAX);
        self.acquired_at + Duration::seconds(ttl)
    }

    /// Whether the grant-reported lifetime has elapsed.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at()
    }
}
