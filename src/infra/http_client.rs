use crate::app::ports::{HttpClientPort, HttpResponse};
use crate::config::HttpConfig;
use crate::error::{IndicatorError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// [`HttpClientPort`] backed by a shared, connection-pooling `reqwest::Client`.
pub struct ReqwestHttp {
    client: reqwest::Client,
}

impl ReqwestHttp {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| {
            IndicatorError::Config(format!("Failed to create HTTP client: {}", e))
        })?;
        Ok(Self { client })
    }

    async fn into_response(resp: reqwest::Response) -> std::result::Result<HttpResponse, String> {
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = resp.bytes().await.map_err(|e| e.to_string())?.to_vec();
        Ok(HttpResponse { status, bytes, content_type })
    }
}

#[async_trait]
impl HttpClientPort for ReqwestHttp {
    async fn get(&self, url: &str) -> std::result::Result<HttpResponse, String> {
        let resp = self.client.get(url).send().await.map_err(|e| e.to_string())?;
        Self::into_response(resp).await
    }

    async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> std::result::Result<HttpResponse, String> {
        let resp = self
            .client
            .post(url)
            .form(fields)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::into_response(resp).await
    }
}
