//! HTTP client for talking to a running climate-api test server.

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error;
use std::net::SocketAddr;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// A reqwest client bound to one server address
pub struct TestClient {
    base: Url,
    client: Client,
}

impl TestClient {
    pub fn new(addr: SocketAddr) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build test HTTP client");
        let base = format!("http://{}", addr)
            .parse()
            .expect("Failed to parse server URL");
        Self { base, client }
    }

    /// GET `path` and hand back the raw response
    pub async fn get(&self, path: &str) -> reqwest::Result<Response> {
        let url = self.base.join(path).expect("Invalid request path");
        self.client.get(url).send().await
    }

    /// GET `path`, require 200 and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Box<dyn Error>> {
        let response = self.get(path).await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("GET {} returned {}: {}", path, status, body).into());
        }
        Ok(response.json::<T>().await?)
    }

    /// GET `path` and return the status with whatever JSON came back
    pub async fn get_status_json(&self, path: &str) -> Result<(StatusCode, Value), Box<dyn Error>> {
        let response = self.get(path).await?;
        let status = response.status();
        Ok((status, response.json::<Value>().await?))
    }
}
