use dashboard_core::{Article, CrawlResult, DeleteResult, Keyword, KeywordId, TrendPoint};
use dashboard_logging::{dashboard_debug, dashboard_warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::{GatewayError, GatewaySettings};

/// Typed request/response boundary to the backend. Holds no client state.
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    /// `GET /health`; `true` when the backend reports itself healthy.
    async fn health(&self) -> Result<bool, GatewayError>;
    async fn list_keywords(&self) -> Result<Vec<Keyword>, GatewayError>;
    /// Fails with [`GatewayError::Validation`] for a blank term without
    /// sending anything. `None` when the server answers with an empty body.
    async fn create_keyword(&self, term: &str) -> Result<Option<Keyword>, GatewayError>;
    /// `None` when the server answers with an empty body, e.g. 204.
    async fn delete_keyword(&self, id: KeywordId) -> Result<Option<DeleteResult>, GatewayError>;
    /// An empty body is a [`GatewayError::Decode`]; there is no summary to show.
    async fn crawl_keyword(&self, id: KeywordId) -> Result<CrawlResult, GatewayError>;
    async fn list_articles(&self, keyword_id: KeywordId) -> Result<Vec<Article>, GatewayError>;
    async fn list_trend(&self, keyword_id: KeywordId) -> Result<Vec<TrendPoint>, GatewayError>;
}

#[derive(Debug, Deserialize)]
struct HealthBody {
    #[serde(default)]
    ok: bool,
}

#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestGateway {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let mut base_url = Url::parse(&settings.base_url)
            .map_err(|err| GatewayError::InvalidUrl(format!("{}: {err}", settings.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidUrl(settings.base_url));
        }
        // Keep any path prefix when joining endpoint paths.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| GatewayError::Network(err.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|err| GatewayError::InvalidUrl(format!("{path}: {err}")))
    }

    fn keyword_query(&self, path: &str, keyword_id: KeywordId) -> Result<Url, GatewayError> {
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut()
            .append_pair("keyword_id", &keyword_id.to_string());
        Ok(url)
    }

    /// Sends one request and returns the success body text.
    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<String, GatewayError> {
        dashboard_debug!("{} {}", method, url);
        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;
        dashboard_debug!("{} {} -> {} ({} bytes)", method, url, status, text.len());

        if !status.is_success() {
            let err = GatewayError::remote(status, &text);
            dashboard_warn!("{} {} failed: {}", method, url, err);
            return Err(err);
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl Gateway for ReqwestGateway {
    async fn health(&self) -> Result<bool, GatewayError> {
        let text = self
            .execute(Method::GET, self.endpoint("health")?, None)
            .await?;
        Ok(decode_optional::<HealthBody>(&text)?.is_some_and(|body| body.ok))
    }

    async fn list_keywords(&self) -> Result<Vec<Keyword>, GatewayError> {
        let text = self
            .execute(Method::GET, self.endpoint("keywords")?, None)
            .await?;
        decode_list(&text)
    }

    async fn create_keyword(&self, term: &str) -> Result<Option<Keyword>, GatewayError> {
        if term.trim().is_empty() {
            return Err(GatewayError::Validation("term is empty".to_string()));
        }
        let body = serde_json::json!({ "term": term }).to_string();
        let text = self
            .execute(Method::POST, self.endpoint("keywords")?, Some(body))
            .await?;
        decode_optional(&text)
    }

    async fn delete_keyword(&self, id: KeywordId) -> Result<Option<DeleteResult>, GatewayError> {
        let url = self.endpoint(&format!("keywords/{id}"))?;
        let text = self.execute(Method::DELETE, url, None).await?;
        decode_optional(&text)
    }

    async fn crawl_keyword(&self, id: KeywordId) -> Result<CrawlResult, GatewayError> {
        let url = self.endpoint(&format!("keywords/{id}/crawl"))?;
        let text = self.execute(Method::POST, url, None).await?;
        decode_required(&text)
    }

    async fn list_articles(&self, keyword_id: KeywordId) -> Result<Vec<Article>, GatewayError> {
        let url = self.keyword_query("articles", keyword_id)?;
        let text = self.execute(Method::GET, url, None).await?;
        decode_list(&text)
    }

    async fn list_trend(&self, keyword_id: KeywordId) -> Result<Vec<TrendPoint>, GatewayError> {
        let url = self.keyword_query("trend", keyword_id)?;
        let text = self.execute(Method::GET, url, None).await?;
        decode_list(&text)
    }
}

/// An empty body decodes to `None` instead of failing.
fn decode_optional<T: DeserializeOwned>(text: &str) -> Result<Option<T>, GatewayError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text).map_err(|err| GatewayError::Decode(err.to_string()))
}

fn decode_required<T: DeserializeOwned>(text: &str) -> Result<T, GatewayError> {
    decode_optional(text)?.ok_or_else(|| GatewayError::Decode("empty response body".to_string()))
}

fn decode_list<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, GatewayError> {
    Ok(decode_optional::<Vec<T>>(text)?.unwrap_or_default())
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::Timeout(err.to_string());
    }
    GatewayError::Network(err.to_string())
}
