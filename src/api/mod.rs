//! Blocking HTTP client for the Chemical Equipment Analyzer backend.
//! One method per endpoint; the stored token is attached as
//! `Authorization: Token <token>` when present. Calls without a token go out
//! unauthenticated and the backend's rejection is surfaced as-is.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{AuthResponse, UploadSummary};
use crate::session::Session;
use reqwest::blocking::multipart::Form;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::AUTHORIZATION;
use serde_json::json;
use std::path::Path;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(120);

pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(cfg: &Config, session: Option<&Session>) -> AppResult<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: cfg.api_url.trim_end_matches('/').to_string(),
            token: session.map(|s| s.token.clone()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.header(AUTHORIZATION, format!("Token {}", token)),
            None => req,
        }
    }

    /// Map a non-2xx response to `AppError::Api`, preferring the backend's
    /// `error` field over the caller-supplied fallback message.
    fn check(resp: Response, fallback: &str) -> AppResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .text()
            .ok()
            .and_then(|body| serde_json::from_str::<serde_json::Value>(&body).ok())
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| fallback.to_string());
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// `POST /register/`
    pub fn register(
        &self,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> AppResult<AuthResponse> {
        let body = json!({
            "username": username,
            "password": password,
            "email": email.unwrap_or(""),
        });
        let resp = self.http.post(self.url("/register/")).json(&body).send()?;
        Ok(Self::check(resp, "Registration failed")?.json()?)
    }

    /// `POST /login/`
    pub fn login(&self, username: &str, password: &str) -> AppResult<AuthResponse> {
        let body = json!({
            "username": username,
            "password": password,
        });
        let resp = self.http.post(self.url("/login/")).json(&body).send()?;
        Ok(Self::check(resp, "Login failed")?.json()?)
    }

    /// `POST /upload/` (multipart field `file`)
    pub fn upload(&self, file: &Path) -> AppResult<UploadSummary> {
        let form = Form::new().file("file", file)?;
        let req = self
            .http
            .post(self.url("/upload/"))
            .timeout(UPLOAD_TIMEOUT)
            .multipart(form);
        let resp = self.authorize(req).send()?;
        Ok(Self::check(resp, "Upload failed")?.json()?)
    }

    /// `GET /history/`
    pub fn history(&self) -> AppResult<Vec<UploadSummary>> {
        let resp = self.authorize(self.http.get(self.url("/history/"))).send()?;
        Ok(Self::check(resp, "Failed to fetch history")?.json()?)
    }

    /// `GET /summary/{id}/`
    pub fn summary(&self, id: i64) -> AppResult<UploadSummary> {
        let url = self.url(&format!("/summary/{}/", id));
        let resp = self.authorize(self.http.get(url)).send()?;
        Ok(Self::check(resp, "Failed to fetch summary")?.json()?)
    }

    /// `GET /summary/{id}/pdf/`, returns the raw PDF bytes.
    /// Any non-2xx outcome reports one fixed message, whatever the body
    /// says; there is nothing actionable in a failed binary download.
    pub fn download_pdf(&self, id: i64) -> AppResult<Vec<u8>> {
        let url = self.url(&format!("/summary/{}/pdf/", id));
        let resp = self.authorize(self.http.get(url)).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Api {
                status: status.as_u16(),
                message: "Failed to download PDF".to_string(),
            });
        }
        Ok(resp.bytes()?.to_vec())
    }
}
