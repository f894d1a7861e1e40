// Authenticated HTTP client for the availability API
//
// Wraps `reqwest::Client` with the token grant, Authorization-header
// injection, URL construction, and the `message` error-envelope check.
// Endpoint methods live in `availability.rs` and `commerce.rs` as
// separate impl blocks to keep this module focused on transport
// mechanics.

use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::auth::{Credentials, Token, TokenResponse};
use crate::error::Error;
use crate::transport::TransportConfig;

/// Path prefix for the JSON REST endpoints.
const API_PREFIX: &str = "/api/1.3/";

/// OAuth2 client-credentials endpoint. Lives outside the API prefix.
const TOKEN_PATH: &str = "/connect/token";

/// Raw client for the Stokab availability API.
///
/// Construction is two-phase behind one factory: the unauthenticated
/// transport is built first, the client-credentials grant runs against
/// `/connect/token`, and only a fully authenticated client is handed
/// out. Every subsequent request carries
/// `Authorization: <token_type> <token>`.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    token: Token,
}

impl ApiClient {
    /// Connect with the default transport settings.
    pub async fn connect(base_url: Url, credentials: Credentials) -> Result<Self, Error> {
        Self::connect_with_transport(base_url, credentials, &TransportConfig::default()).await
    }

    /// Connect with explicit transport settings.
    pub async fn connect_with_transport(
        base_url: Url,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let token = acquire_token(&http, &base_url, &credentials).await?;
        Ok(Self {
            http,
            base_url,
            credentials,
            token,
        })
    }

    /// The current bearer token.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Run the client-credentials grant again and replace the stored
    /// token. Never triggered automatically: expiry is the caller's
    /// call, via [`Token::is_expired`].
    pub async fn reauthenticate(&mut self) -> Result<(), Error> {
        self.token = acquire_token(&self.http, &self.base_url, &self.credentials).await?;
        Ok(())
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join an endpoint path onto `{base}/api/1.3/`.
    fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{API_PREFIX}{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Authenticated GET decoding a JSON array response.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, Error> {
        let url = self.api_url(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self
            .http
            .get(url)
            .query(params)
            .header(AUTHORIZATION, self.token.authorization_value())
            .send()
            .await?
            .error_for_status()?;

        decode_list(resp).await
    }

    /// Authenticated POST with a JSON body, decoding a JSON array
    /// response.
    pub(crate) async fn post_list<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<Vec<T>, Error> {
        let url = self.api_url(path)?;
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .header(AUTHORIZATION, self.token.authorization_value())
            .send()
            .await?
            .error_for_status()?;

        decode_list(resp).await
    }
}

/// POST the client-credentials grant. The one request that must NOT
/// carry an Authorization header: the token it would need is the very
/// thing being acquired.
async fn acquire_token(
    http: &reqwest::Client,
    base_url: &Url,
    credentials: &Credentials,
) -> Result<Token, Error> {
    let base = base_url.as_str().trim_end_matches('/');
    let url = Url::parse(&format!("{base}{TOKEN_PATH}"))?;
    debug!(client_id = %credentials.client_id, "POST {url} (token grant)");

    let resp = http
        .post(url)
        .form(&credentials.grant_form())
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(Error::Authentication {
            message: format!("token grant rejected (HTTP {status}): {}", preview(&body)),
        });
    }

    let parsed: TokenResponse =
        serde_json::from_str(&body).map_err(|e| Error::Authentication {
            message: format!("token response missing expected fields: {e}"),
        })?;

    let token = Token::from_response(parsed, Utc::now());
    debug!(ttl = token.expires_in(), "token acquired");
    Ok(token)
}

/// Decode a JSON array response, routing the API's `message` error
/// envelope to [`Error::Api`] instead of a decode failure.
async fn decode_list<T: DeserializeOwned>(resp: reqwest::Response) -> Result<Vec<T>, Error> {
    let body = resp.text().await?;

    let value: Value = serde_json::from_str(&body).map_err(|e| Error::Deserialization {
        message: format!("{e} (body preview: {:?})", preview(&body)),
        body: body.clone(),
    })?;

    if let Some(message) = value.get("message").and_then(Value::as_str) {
        return Err(Error::Api {
            message: message.to_owned(),
        });
    }

    serde_json::from_value(value).map_err(|e| {
        let message = format!("{e} (body preview: {:?})", preview(&body));
        Error::Deserialization { message, body }
    })
}

fn preview(body: &str) -> &str {
    &body[..body.len().min(200)]
}
