use crate::{CliClientResult, ClientError};

use um_core::{CoreError, Credentials, LoginGateway, LoginResponse, Result as CoreErrorResult};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde_json::Value;

const LOGIN_PATH: &str = "/api/login";

/// HTTP client for the um-server login endpoint
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8080")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// POST the credentials to `/api/login`.
    ///
    /// Both 200 and 401 carry a `{"success": bool}` body and are returned as
    /// a [`LoginResponse`]; any other status is an API error.
    pub async fn login(&self, credentials: &Credentials) -> CliClientResult<LoginResponse> {
        let req = self.request(Method::POST, LOGIN_PATH).json(credentials);
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("POST {LOGIN_PATH} -> {status}");

        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            return Ok(serde_json::from_str(&text)?);
        }

        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
        let error = body.get("error");
        let code = error
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let message = error
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Unexpected status {status}"));

        Err(ClientError::api_error(code, message))
    }
}

#[async_trait]
impl LoginGateway for Client {
    async fn login(&self, credentials: &Credentials) -> CoreErrorResult<LoginResponse> {
        Client::login(self, credentials)
            .await
            .map_err(|e| CoreError::login_gateway(e.to_string()))
    }
}
