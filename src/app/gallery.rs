//! Call-site patterns built on top of [`ArtworkApi`]: the featured gallery,
//! search with detail hydration, and the random artwork picker, plus the
//! view models they are rendered from.

use crate::domain::model::{Artwork, ImageSize};
use crate::domain::ports::ArtworkApi;
use crate::utils::error::{ArticError, Result};
use futures::future::join_all;
use rand::Rng;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

pub const FEATURED_COUNT: usize = 12;
/// Below this many image-bearing artworks the featured gallery tops up from page 2.
pub const FEATURED_MIN_WITH_IMAGES: usize = 8;
pub const FEATURED_TOP_UP_LIMIT: u32 = 20;
pub const SEARCH_LIMIT: u32 = 20;
pub const SEARCH_HYDRATE_MAX: usize = 12;
pub const RANDOM_PAGE_MAX: u32 = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("html tag pattern is valid"));

/// Up to [`FEATURED_COUNT`] artworks that have an image.
///
/// A failing top-up request is logged and the first batch is returned as is.
pub async fn featured_artworks<A: ArtworkApi + ?Sized>(api: &A) -> Result<Vec<Artwork>> {
    tracing::info!("Loading featured artworks...");
    let first = api.fetch_artworks(FEATURED_COUNT as u32, 1, None).await?;

    let mut featured: Vec<Artwork> = first
        .artworks()?
        .into_iter()
        .filter(Artwork::has_image)
        .collect();

    if featured.len() < FEATURED_MIN_WITH_IMAGES {
        tracing::info!(
            "Only {} artworks with images, getting additional artworks",
            featured.len()
        );
        match api.fetch_artworks(FEATURED_TOP_UP_LIMIT, 2, None).await {
            Ok(more) => {
                let missing = FEATURED_COUNT.saturating_sub(featured.len());
                featured.extend(
                    more.artworks()?
                        .into_iter()
                        .filter(Artwork::has_image)
                        .take(missing),
                );
            }
            Err(e) => tracing::warn!("Top-up fetch for featured gallery failed: {}", e),
        }
    }

    featured.truncate(FEATURED_COUNT);
    Ok(featured)
}

/// Search, then fetch the full record of each of the first hits concurrently.
///
/// Hits whose detail request fails are dropped (best-effort aggregation); the
/// order of the surviving records follows the search ranking.
pub async fn search_gallery<A: ArtworkApi + ?Sized>(api: &A, query: &str) -> Result<Vec<Artwork>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ArticError::ValidationError {
            message: "Please enter a search term".to_string(),
        });
    }

    tracing::info!("Searching for: {}", query);
    let hits = api.search_artworks(query, SEARCH_LIMIT).await?.artworks()?;

    let details = join_all(
        hits.iter()
            .take(SEARCH_HYDRATE_MAX)
            .map(|hit| api.fetch_artwork_by_id(hit.id)),
    )
    .await;

    let artworks: Vec<Artwork> = hits
        .iter()
        .zip(details)
        .filter_map(|(hit, result)| match result.and_then(|envelope| envelope.artwork()) {
            Ok(artwork) => Some(artwork),
            Err(e) => {
                tracing::warn!("Error fetching artwork {}: {}", hit.id, e);
                None
            }
        })
        .collect();

    tracing::info!(
        "Hydrated {} of {} search results for \"{}\"",
        artworks.len(),
        hits.len().min(SEARCH_HYDRATE_MAX),
        query
    );
    Ok(artworks)
}

pub fn random_page<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(1..=RANDOM_PAGE_MAX)
}

/// The full record of the single artwork listed on `page` with `limit=1`.
pub async fn artwork_on_page<A: ArtworkApi + ?Sized>(api: &A, page: u32) -> Result<Option<Artwork>> {
    let listed = api.fetch_artworks(1, page, None).await?.artworks()?;

    match listed.first() {
        Some(artwork) => {
            let full = api.fetch_artwork_by_id(artwork.id).await?;
            Ok(Some(full.artwork()?))
        }
        None => Ok(None),
    }
}

pub async fn random_artwork<A, R>(api: &A, rng: &mut R) -> Result<Option<Artwork>>
where
    A: ArtworkApi + ?Sized,
    R: Rng,
{
    let page = random_page(rng);
    tracing::info!("Getting random artwork from page {}", page);
    artwork_on_page(api, page).await
}

/// Compact gallery tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtworkCard {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub image_url: Option<String>,
}

impl ArtworkCard {
    pub fn from_artwork<A: ArtworkApi + ?Sized>(api: &A, artwork: &Artwork) -> Self {
        Self {
            id: artwork.id,
            title: display_title(artwork),
            artist: display_artist(artwork),
            image_url: image_for(api, artwork, ImageSize::CARD),
        }
    }
}

/// Single-artwork view with the large image and a cleaned description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtworkDetailView {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub date: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub description_truncated: bool,
}

impl ArtworkDetailView {
    pub fn from_artwork<A: ArtworkApi + ?Sized>(api: &A, artwork: &Artwork) -> Self {
        let raw = artwork
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .or(artwork.short_description.as_deref())
            .unwrap_or_default();
        let (description, description_truncated) = clean_description(raw, DESCRIPTION_MAX_CHARS);

        Self {
            id: artwork.id,
            title: display_title(artwork),
            artist: display_artist(artwork),
            date: non_empty(artwork.date_display.as_deref()).unwrap_or("Date unknown").to_string(),
            image_url: image_for(api, artwork, ImageSize::LARGE),
            description: (!description.is_empty()).then_some(description),
            description_truncated,
        }
    }

    /// Description with a trailing ellipsis when it was cut.
    pub fn description_text(&self) -> Option<String> {
        self.description.as_ref().map(|d| {
            if self.description_truncated {
                format!("{}...", d)
            } else {
                d.clone()
            }
        })
    }
}

/// Strip HTML tags and keep at most `max_chars` characters.
/// The flag tells whether anything was cut.
pub fn clean_description(raw: &str, max_chars: usize) -> (String, bool) {
    let stripped = HTML_TAG.replace_all(raw, "");
    let stripped = stripped.trim();

    let mut chars = stripped.char_indices();
    match chars.nth(max_chars) {
        Some((cut, _)) => (stripped[..cut].to_string(), true),
        None => (stripped.to_string(), false),
    }
}

fn display_title(artwork: &Artwork) -> String {
    non_empty(artwork.title.as_deref()).unwrap_or("Untitled").to_string()
}

fn display_artist(artwork: &Artwork) -> String {
    non_empty(artwork.artist_display.as_deref())
        .unwrap_or("Unknown Artist")
        .to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn image_for<A: ArtworkApi + ?Sized>(api: &A, artwork: &Artwork, size: &str) -> Option<String> {
    if !artwork.has_image() {
        return None;
    }
    api.image_url(artwork.image_id.as_deref(), size)
}
