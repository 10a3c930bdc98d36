// crates/distortion-app/src/api.rs
// HTTP client for the classification service

use async_trait::async_trait;
use distortion_types::{ClassificationResponse, ClassifyRequest};

use crate::config::AppConfig;
use crate::error::ClassifyError;

pub const CLASSIFY_PATH: &str = "/classify";
pub const HEALTH_PATH: &str = "/health";

/// Status and body text of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body of a 2xx reply, or the status and raw body as an error
    pub fn into_success(self) -> Result<String, ClassifyError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(ClassifyError::Http {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// Fetch seam. Errors are transport failures only; any HTTP status is a reply.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn post_json(&self, url: &str, body: &ClassifyRequest) -> Result<HttpReply, String>;

    async fn get(&self, url: &str) -> Result<HttpReply, String>;
}

/// Browser fetch via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: &ClassifyRequest) -> Result<HttpReply, String> {
        // .json() sets Content-Type: application/json
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_reply(resp).await
    }

    async fn get(&self, url: &str) -> Result<HttpReply, String> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_reply(resp).await
    }
}

async fn read_reply(resp: gloo_net::http::Response) -> Result<HttpReply, String> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| e.to_string())?;
    Ok(HttpReply { status, body })
}

/// Join a base URL and a path, dropping trailing slashes from the base
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[derive(Debug, Clone)]
pub struct ClassifyClient<T> {
    transport: T,
    config: AppConfig,
}

impl<T: HttpTransport> ClassifyClient<T> {
    pub fn new(transport: T, config: AppConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn base_url(&self, api_field: &str) -> Result<String, ClassifyError> {
        self.config
            .resolve_api_base(api_field)
            .ok_or(ClassifyError::Configuration)
    }

    /// One `POST {base}/classify` attempt. No retries, no timeout.
    pub async fn classify(
        &self,
        text: &str,
        api_field: &str,
    ) -> Result<ClassificationResponse, ClassifyError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClassifyError::Validation);
        }
        let url = endpoint(&self.base_url(api_field)?, CLASSIFY_PATH);

        log::debug!("POST {} ({} chars)", url, text.len());
        let reply = self
            .transport
            .post_json(&url, &ClassifyRequest::new(text))
            .await
            .map_err(|e| {
                log::warn!("Request to {} failed: {}", url, e);
                ClassifyError::Network(e)
            })?;

        let status = reply.status;
        let body = reply.into_success().inspect_err(|_| {
            log::warn!("{} answered with status {}", url, status);
        })?;

        ClassificationResponse::from_json(&body).map_err(|e| {
            log::warn!("Unparseable body from {}: {}", url, e);
            ClassifyError::MalformedResponse(e.to_string())
        })
    }

    /// `GET {base}/health`, returning the body text
    pub async fn health(&self, api_field: &str) -> Result<String, ClassifyError> {
        let url = endpoint(&self.base_url(api_field)?, HEALTH_PATH);
        log::debug!("GET {}", url);
        let reply = self
            .transport
            .get(&url)
            .await
            .map_err(ClassifyError::Network)?;
        reply.into_success()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StubTransport;
    use super::*;

    fn client(transport: StubTransport) -> ClassifyClient<StubTransport> {
        ClassifyClient::new(
            transport,
            AppConfig::default().with_default_api_base("https://api.example/prod"),
        )
    }

    #[test]
    fn test_endpoint_trims_trailing_slashes() {
        assert_eq!(endpoint("https://a.example/prod///", CLASSIFY_PATH), "https://a.example/prod/classify");
        assert_eq!(endpoint("https://a.example", CLASSIFY_PATH), "https://a.example/classify");
    }

    #[test]
    fn test_reply_success_range() {
        assert!(HttpReply { status: 204, body: String::new() }.is_success());
        assert!(!HttpReply { status: 302, body: String::new() }.is_success());
    }

    #[tokio::test]
    async fn test_classify_sends_trimmed_text() {
        let c = client(StubTransport::replying(200, r#"{"has_cognitive_distortion": false}"#));
        c.classify("\n  I practice daily.  \t", "").await.unwrap();

        let posts = c.transport().posts.borrow();
        assert_eq!(posts[0].1.text, "I practice daily.");
    }

    #[tokio::test]
    async fn test_classify_posts_text_to_endpoint() {
        let c = client(StubTransport::replying(200, r#"{"has_cognitive_distortion": false}"#));
        let resp = c.classify("I practice daily.", "").await.unwrap();
        assert!(!resp.has_cognitive_distortion);

        let posts = c.transport().posts.borrow();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].0, "https://api.example/prod/classify");
        assert_eq!(posts[0].1, ClassifyRequest::new("I practice daily."));
    }

    #[tokio::test]
    async fn test_classify_field_overrides_default() {
        let c = client(StubTransport::replying(200, "{}"));
        c.classify("text", "http://localhost:8000/").await.unwrap();
        assert_eq!(c.transport().posts.borrow()[0].0, "http://localhost:8000/classify");
    }

    #[tokio::test]
    async fn test_classify_unconfigured_sends_nothing() {
        let c = ClassifyClient::new(StubTransport::replying(200, "{}"), AppConfig::default());
        let err = c.classify("text", "").await.unwrap_err();
        assert_eq!(err, ClassifyError::Configuration);
        assert_eq!(c.transport().call_count(), 0);
    }

    #[tokio::test]
    async fn test_classify_blank_text_rejected() {
        let c = client(StubTransport::replying(200, "{}"));
        assert_eq!(c.classify(" \n\t ", "").await.unwrap_err(), ClassifyError::Validation);
        assert_eq!(c.transport().call_count(), 0);
    }

    #[tokio::test]
    async fn test_classify_http_error_keeps_raw_body() {
        let c = client(StubTransport::replying(500, "internal error"));
        let err = c.classify("text", "").await.unwrap_err();
        assert_eq!(
            err,
            ClassifyError::Http {
                status: 500,
                body: "internal error".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_classify_malformed_body() {
        let c = client(StubTransport::replying(200, "<html>gateway</html>"));
        let err = c.classify("text", "").await.unwrap_err();
        assert!(matches!(err, ClassifyError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_classify_network_failure() {
        let c = client(StubTransport::failing("Failed to fetch"));
        let err = c.classify("text", "").await.unwrap_err();
        assert_eq!(err, ClassifyError::Network("Failed to fetch".to_string()));
    }

    #[tokio::test]
    async fn test_health_hits_health_path() {
        let c = client(StubTransport::replying(200, r#"{"status":"ok"}"#));
        let body = c.health("").await.unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
        assert_eq!(c.transport().gets.borrow()[0], "https://api.example/prod/health");
    }
}
