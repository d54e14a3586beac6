use reqwest::Url;

use crate::error::ConnectorError;
use crate::query::{QueryOptions, build_url};
use crate::types::{DatagrepperResponse, MessagePage};

/// Default public Datagrepper instance.
pub const DEFAULT_ENDPOINT: &str = "https://apps.fedoraproject.org/datagrepper";

// ═══════════════════════════════════════════════════════════════
//  DgConnector
// ═══════════════════════════════════════════════════════════════

/// Client for the Datagrepper `/raw` endpoint, scoped to package feeds.
///
/// Every call is one independent GET. Nothing is cached or retried, and no
/// timeout is applied beyond whatever the supplied `reqwest::Client` carries.
#[derive(Clone, Debug)]
pub struct DgConnector {
    endpoint: Url,
    http: reqwest::Client,
}

impl DgConnector {
    pub fn new(endpoint: &str) -> Result<Self, ConnectorError> {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    pub fn with_client(endpoint: &str, http: reqwest::Client) -> Result<Self, ConnectorError> {
        let endpoint = Url::parse(endpoint).map_err(|e| ConnectorError::Endpoint {
            endpoint: endpoint.to_string(),
            detail: e.to_string(),
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(ConnectorError::Endpoint {
                endpoint: endpoint.to_string(),
                detail: "not a base URL".into(),
            });
        }
        Ok(Self { endpoint, http })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// URL that `get_messages` would request for these arguments.
    pub fn request_url(&self, package: &str, opts: &QueryOptions) -> Result<Url, ConnectorError> {
        if package.trim().is_empty() {
            return Err(ConnectorError::EmptyPackage);
        }
        Ok(build_url(&self.endpoint, package, opts))
    }

    /// Fetch one page of messages for `package`.
    pub async fn get_messages(
        &self,
        package: &str,
        opts: &QueryOptions,
    ) -> Result<MessagePage, ConnectorError> {
        let url = self.request_url(package, opts)?;
        tracing::debug!(%url, package, "querying datagrepper");

        let resp = self.http.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(%url, %status, body = %body, "datagrepper request failed");
            return Err(ConnectorError::Unavailable { status });
        }

        let body = resp.bytes().await?;
        let parsed: DatagrepperResponse = serde_json::from_slice(&body)?;
        let page = MessagePage::from(parsed);

        tracing::debug!(
            package,
            page = page.page,
            pages = page.pages,
            count = page.count,
            messages = page.messages.len(),
            "datagrepper page received"
        );

        Ok(page)
    }
}
