use crate::domain::model::ImageSize;
use crate::domain::ports::ArtworkApi;
use crate::utils::error::Result;
use std::time::Duration;

/// The public API asks clients to stay at or below one request per second.
pub const RECOMMENDED_REQUEST_INTERVAL: Duration = Duration::from_secs(1);

/// "Starry Night and the Astronauts", Alma Thomas.
pub const SMOKE_ARTWORK_ID: i64 = 129884;
pub const SMOKE_QUERY: &str = "monet";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmokeReport {
    pub connected: bool,
    pub listed: usize,
    pub first_image_url: Option<String>,
    pub detail_title: Option<String>,
    pub detail_image_url: Option<String>,
    pub search_results: usize,
}

/// Probe, list, fetch one artwork and search once, pausing between calls.
///
/// A failed probe only logs troubleshooting hints; the first failing data
/// call ends the run with its error.
pub async fn run_smoke<A: ArtworkApi + ?Sized>(api: &A, pause: Duration) -> Result<SmokeReport> {
    tracing::info!("🎨 Starting Art Institute of Chicago API smoke run");
    let mut report = SmokeReport {
        connected: api.test_connection().await,
        ..Default::default()
    };

    if !report.connected {
        tracing::warn!("⚠️  API connectivity issues detected. You may experience errors.");
        tracing::warn!("💡 Check your internet connection or the configured base URL; the API may be temporarily unavailable");
    }

    tracing::info!("📋 Step 1: fetching artworks");
    let listed = api.fetch_artworks(10, 1, None).await?.artworks()?;
    report.listed = listed.len();
    if let Some(first) = listed.first() {
        tracing::info!(
            "   First artwork: \"{}\" by {}",
            first.title.as_deref().unwrap_or("Untitled"),
            first.artist_display.as_deref().unwrap_or("Unknown Artist")
        );
        if first.has_image() {
            report.first_image_url = api.image_url(first.image_id.as_deref(), ImageSize::STANDARD);
        }
    }

    tokio::time::sleep(pause).await;

    tracing::info!("🖼️  Step 2: fetching artwork {}", SMOKE_ARTWORK_ID);
    let detail = api.fetch_artwork_by_id(SMOKE_ARTWORK_ID).await?.artwork()?;
    report.detail_title = detail.title.clone();
    if detail.has_image() {
        report.detail_image_url = api.image_url(detail.image_id.as_deref(), ImageSize::LARGE);
    }

    tokio::time::sleep(pause).await;

    tracing::info!("🔍 Step 3: searching for \"{}\"", SMOKE_QUERY);
    let results = api.search_artworks(SMOKE_QUERY, 10).await?.artworks()?;
    report.search_results = results.len();
    for (index, artwork) in results.iter().take(3).enumerate() {
        tracing::info!(
            "   {}. \"{}\" (ID: {})",
            index + 1,
            artwork.title.as_deref().unwrap_or("Untitled"),
            artwork.id
        );
    }

    tracing::info!(
        "📊 Summary: {} artworks listed, detail {}, {} search results",
        report.listed,
        if report.detail_title.is_some() { "retrieved" } else { "missing" },
        report.search_results
    );
    Ok(report)
}
