use crate::adapters::http::ReqwestTransport;
use crate::config::ClientConfig;
use crate::core::image::get_image_url;
use crate::domain::model::Envelope;
use crate::domain::ports::{ArtworkApi, Transport, TransportResponse};
use crate::utils::error::{ArticError, Result};
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_PAGE: u32 = 1;

/// Art Institute of Chicago API client.
///
/// Every call is a single attempt bounded by a timeout; nothing is cached and
/// no state is shared between calls, so one client can serve any number of
/// concurrent requests.
pub struct ArticClient<T: Transport = ReqwestTransport> {
    transport: T,
    config: ClientConfig,
}

impl ArticClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.user_agent)?;
        Ok(Self { transport, config })
    }
}

impl<T: Transport> ArticClient<T> {
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn list_url(&self, limit: u32, page: u32, fields: Option<&str>) -> String {
        let mut url = format!(
            "{}/artworks?limit={}&page={}",
            self.config.api_base(),
            limit,
            page
        );
        if let Some(fields) = fields.filter(|f| !f.is_empty()) {
            url.push_str("&fields=");
            url.push_str(&urlencoding::encode(fields));
        }
        url
    }

    fn detail_url(&self, id: i64) -> String {
        format!("{}/artworks/{}", self.config.api_base(), id)
    }

    fn search_url(&self, query: &str, limit: u32) -> String {
        format!(
            "{}/artworks/search?q={}&limit={}",
            self.config.api_base(),
            urlencoding::encode(query),
            limit
        )
    }

    async fn send_within(&self, url: &str, bound: Duration) -> Result<TransportResponse> {
        // Dropping the transport future on expiry aborts the request.
        match tokio::time::timeout(bound, self.transport.get(url)).await {
            Ok(result) => result,
            Err(_) => Err(ArticError::timeout_after(bound)),
        }
    }

    async fn get_envelope(&self, url: &str) -> Result<Envelope> {
        tracing::debug!("Fetching from: {}", url);

        let response = self.send_within(url, self.config.request_timeout).await?;
        tracing::debug!("API response status: {}", response.status);

        if !response.is_success() {
            return Err(ArticError::HttpError {
                status: response.status,
                reason: response.reason,
            });
        }

        Envelope::from_slice(&response.body)
    }
}

#[async_trait]
impl<T: Transport> ArtworkApi for ArticClient<T> {
    async fn test_connection(&self) -> bool {
        tracing::info!("🔍 Testing API connectivity...");
        let url = self.list_url(1, DEFAULT_PAGE, None);

        match self.send_within(&url, self.config.probe_timeout).await {
            Ok(response) if response.is_success() => {
                tracing::info!("✅ API connection successful");
                true
            }
            Ok(response) => {
                tracing::warn!("❌ API returned status: {}", response.status);
                false
            }
            Err(e) if e.is_timeout() => {
                tracing::warn!("❌ API connection timed out");
                false
            }
            Err(e) => {
                tracing::warn!("❌ API connection failed: {}", e);
                false
            }
        }
    }

    async fn fetch_artworks(&self, limit: u32, page: u32, fields: Option<&str>) -> Result<Envelope> {
        let url = self.list_url(limit, page, fields);

        let envelope = self.get_envelope(&url).await.inspect_err(|e| {
            tracing::error!("Error fetching artworks: {}", e);
        })?;

        tracing::info!("Retrieved {} artworks", envelope.len());
        if let Some(pagination) = &envelope.pagination {
            tracing::debug!("Pagination info: {}", pagination);
        }
        Ok(envelope)
    }

    async fn fetch_artwork_by_id(&self, id: i64) -> Result<Envelope> {
        let url = self.detail_url(id);

        let envelope = self.get_envelope(&url).await.inspect_err(|e| {
            tracing::error!("Error fetching artwork {}: {}", id, e);
        })?;

        if let Some(data) = envelope.data.as_object() {
            tracing::info!(
                "Retrieved artwork: {} ({})",
                data.get("title").and_then(|v| v.as_str()).unwrap_or("Unknown Title"),
                data.get("artist_display")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown Artist")
            );
        }
        Ok(envelope)
    }

    async fn search_artworks(&self, query: &str, limit: u32) -> Result<Envelope> {
        let url = self.search_url(query, limit);

        let envelope = self.get_envelope(&url).await.inspect_err(|e| {
            tracing::error!("Error searching for \"{}\": {}", query, e);
        })?;

        tracing::info!("Found {} search results for \"{}\"", envelope.len(), query);
        Ok(envelope)
    }

    fn image_url(&self, image_id: Option<&str>, size: &str) -> Option<String> {
        get_image_url(self.config.image_base(), image_id, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingTransport {
        urls: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn get(&self, url: &str) -> Result<TransportResponse> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(TransportResponse::new(200, r#"{"data": []}"#))
        }
    }

    fn client() -> (ArticClient<RecordingTransport>, Arc<Mutex<Vec<String>>>) {
        let transport = RecordingTransport::default();
        let urls = transport.urls.clone();
        let config = ClientConfig::default().with_api_base_url("http://api.test/v1/");
        (ArticClient::with_transport(transport, config), urls)
    }

    #[tokio::test]
    async fn test_urls_for_each_endpoint() {
        let (client, urls) = client();

        client.fetch_artworks(DEFAULT_LIMIT, DEFAULT_PAGE, None).await.unwrap();
        client
            .fetch_artworks(20, 2, Some("id,title,image_id"))
            .await
            .unwrap();
        client.fetch_artwork_by_id(129884).await.unwrap();
        client.search_artworks("a b", 5).await.unwrap();
        assert!(client.test_connection().await);

        let urls = urls.lock().unwrap();
        assert_eq!(
            *urls,
            vec![
                "http://api.test/v1/artworks?limit=10&page=1",
                "http://api.test/v1/artworks?limit=20&page=2&fields=id%2Ctitle%2Cimage_id",
                "http://api.test/v1/artworks/129884",
                "http://api.test/v1/artworks/search?q=a%20b&limit=5",
                "http://api.test/v1/artworks?limit=1&page=1",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_fields_are_not_sent() {
        let (client, urls) = client();
        client.fetch_artworks(3, 4, Some("")).await.unwrap();
        assert_eq!(
            urls.lock().unwrap()[0],
            "http://api.test/v1/artworks?limit=3&page=4"
        );
    }

    #[test]
    fn test_image_url_uses_configured_base() {
        let (client, _) = client();
        assert_eq!(
            client.image_url(Some("abc"), "400").as_deref(),
            Some("https://www.artic.edu/iiif/2/abc/full/400,/0/default.jpg")
        );
        assert_eq!(client.image_url(None, "400"), None);
    }
}
