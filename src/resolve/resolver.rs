use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::resolve::error::ResolveError;
use crate::resolve::scrape::extract_service_link;
use crate::services::Service;

const AGGREGATOR_ENDPOINT: &str = "https://songwhip.com/";

/// The part of the aggregator's response we care about: the canonical page
/// address. Everything else in the payload is ignored.
#[derive(Deserialize)]
struct AggregatorPage {
    url: String,
}

/// Resolves track URLs against the aggregator.
///
/// One instance performs at most two outbound calls per [`resolve`]: the
/// POST that turns a track URL into the canonical aggregator page, and (only
/// when a service was requested) the GET that fetches that page's markup.
/// The stages are strictly sequential since the second URL comes out of the
/// first response.
///
/// [`resolve`]: Resolver::resolve
pub struct Resolver {
    http: Client,
    endpoint: String,
}

impl Resolver {
    pub fn new() -> Self {
        Self::with_endpoint(AGGREGATOR_ENDPOINT)
    }

    /// Aims the chain at a different resolution endpoint. Tests point this
    /// at a local mock server.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Resolves `track` to a shareable URL.
    ///
    /// With `service` set, the result is that service's deep link scraped
    /// from the aggregator page; otherwise it is the canonical page URL
    /// itself. An unknown service selector fails before any network call.
    pub async fn resolve(
        &self,
        track: &Url,
        service: Option<&str>,
    ) -> Result<String, ResolveError> {
        let service = match service {
            Some(id) => Some(
                Service::from_id(id)
                    .ok_or_else(|| ResolveError::InvalidService(id.to_owned()))?,
            ),
            None => None,
        };

        let page = self.lookup(track).await?;
        let Some(service) = service else {
            return Ok(page);
        };

        let html = self.fetch_page(&page).await?;
        extract_service_link(&html, service).ok_or(ResolveError::LinkNotFound {
            service: service.id(),
            page,
        })
    }

    /// Stage 1: POST the track URL to the resolution endpoint and pull the
    /// canonical page URL out of the JSON payload.
    async fn lookup(&self, track: &Url) -> Result<String, ResolveError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({ "url": track.as_str() }))
            .send()
            .await
            .map_err(|e| ResolveError::Upstream(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| ResolveError::Upstream(e.to_string()))?;

        let page: AggregatorPage = response
            .json()
            .await
            .map_err(|e| ResolveError::Upstream(format!("unusable payload: {e}")))?;
        Ok(page.url)
    }

    /// Stage 2: fetch the canonical page's markup.
    async fn fetch_page(&self, page: &str) -> Result<String, ResolveError> {
        let response = self
            .http
            .get(page)
            .send()
            .await
            .map_err(|e| ResolveError::Upstream(format!("page fetch failed: {e}")))?
            .error_for_status()
            .map_err(|e| ResolveError::Upstream(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| ResolveError::Upstream(format!("page read failed: {e}")))
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_the_aggregator() {
        let resolver = Resolver::new();
        assert_eq!(resolver.endpoint, "https://songwhip.com/");
    }

    #[test]
    fn endpoint_can_be_overridden() {
        let resolver = Resolver::with_endpoint("http://localhost:8080/");
        assert_eq!(resolver.endpoint, "http://localhost:8080/");
    }
}
