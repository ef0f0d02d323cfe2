use crate::domain::model::Envelope;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Raw answer from a transport: the status line and the fully read body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub reason: String,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            reason: String::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues one HTTP GET and reads the whole body.
///
/// Implementations must not retry and must not impose their own deadline
/// shorter than the caller's; the client wraps every call in its own bound.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse>;
}

/// The operations caller code depends on.
#[async_trait]
pub trait ArtworkApi: Send + Sync {
    /// `true` iff a minimal list request succeeds within the probe bound.
    async fn test_connection(&self) -> bool;

    async fn fetch_artworks(&self, limit: u32, page: u32, fields: Option<&str>) -> Result<Envelope>;

    async fn fetch_artwork_by_id(&self, id: i64) -> Result<Envelope>;

    async fn search_artworks(&self, query: &str, limit: u32) -> Result<Envelope>;

    fn image_url(&self, image_id: Option<&str>, size: &str) -> Option<String>;
}
