//! HTTP client for the remote MedPubs backend.
//!
//! One operation per remote action, each a single pass-through request:
//! build, send, branch on the status code. Non-success statuses become
//! [`ApiError::RequestFailed`] carrying the raw response text; success
//! statuses with undecodable bodies become [`ApiError::DecodeFailed`].
//! Nothing is retried.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::ApiError;
use crate::models::{
    Fullname, LoginResponse, NewPublication, Profile, Publication, RegisterRequest, UserRecord,
};

/// Production host. All three resource groups live under it.
const DEFAULT_BASE_URL: &str = "https://medical-backend.azurewebsites.net/api/v1";

/// Per-request timeout. The backend imposes none of its own; an
/// interactive client should not hang forever on a dead connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the auth, profile, and publications resource groups.
///
/// Cheap to clone (the underlying `reqwest::Client` is reference
/// counted); the desktop app provides one instance through context.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    auth_url: String,
    me_url: String,
    publications_url: String,
}

impl ApiClient {
    /// Client against the production backend.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an alternative origin, e.g. a loopback stub
    /// server in tests. `base` replaces the `.../api/v1` prefix.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            auth_url: format!("{base}/auth"),
            me_url: format!("{base}/me"),
            publications_url: format!("{base}/publications"),
        }
    }

    /// Register a new user. Success is a 201 with the created record.
    pub async fn register(&self, req: &RegisterRequest) -> Result<UserRecord, ApiError> {
        let resp = self
            .http
            .post(format!("{}/register", self.auth_url))
            .json(req)
            .send()
            .await?;
        expect_json(resp, StatusCode::CREATED).await
    }

    /// Log in with email and password. Success is a 200 whose body
    /// carries the access token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let resp = self
            .http
            .post(format!("{}/login", self.auth_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        expect_json(resp, StatusCode::OK).await
    }

    /// Fetch the current user's profile.
    ///
    /// The profile endpoint has been seen answering 200 with a blank
    /// body; that is reported as [`ApiError::EmptyResponse`], distinct
    /// from a malformed-JSON body.
    pub async fn get_profile(&self, token: &str) -> Result<Profile, ApiError> {
        let resp = self
            .http
            .get(&self.me_url)
            .bearer_auth(token)
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        if status != StatusCode::OK {
            return Err(ApiError::RequestFailed { status, body });
        }
        if body.trim().is_empty() {
            return Err(ApiError::EmptyResponse);
        }
        serde_json::from_str(&body).map_err(|_| ApiError::DecodeFailed { body })
    }

    /// Update the profile. The backend expects first/last name nested
    /// under `fullname`.
    pub async fn update_profile(
        &self,
        token: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Profile, ApiError> {
        let body = Profile {
            email: email.to_string(),
            fullname: Fullname {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            },
        };
        let resp = self
            .http
            .put(&self.me_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        expect_json(resp, StatusCode::OK).await
    }

    /// List all publications.
    pub async fn list_publications(&self, token: &str) -> Result<Vec<Publication>, ApiError> {
        let resp = self
            .http
            .get(&self.publications_url)
            .bearer_auth(token)
            .send()
            .await?;
        expect_json(resp, StatusCode::OK).await
    }

    /// Create a publication. The draft carries the owner stamp; see
    /// [`NewPublication::new`].
    pub async fn create_publication(
        &self,
        token: &str,
        draft: &NewPublication,
    ) -> Result<Publication, ApiError> {
        let resp = self
            .http
            .post(&self.publications_url)
            .bearer_auth(token)
            .json(draft)
            .send()
            .await?;
        expect_json(resp, StatusCode::CREATED).await
    }

    /// Delete a publication by id. Success is a 204; anything else is
    /// an error carrying the response text.
    pub async fn delete_publication(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(format!("{}/{}", self.publications_url, id))
            .bearer_auth(token)
            .send()
            .await?;
        let status = resp.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(());
        }
        let body = resp.text().await?;
        Err(ApiError::RequestFailed { status, body })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the body once, then branch: wrong status keeps the raw text for
/// the user, expected status must parse as `T`.
async fn expect_json<T: DeserializeOwned>(
    resp: Response,
    expected: StatusCode,
) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await?;
    if status != expected {
        return Err(ApiError::RequestFailed { status, body });
    }
    serde_json::from_str(&body).map_err(|_| ApiError::DecodeFailed { body })
}
