pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;

pub use adapters::http::ReqwestTransport;
pub use config::ClientConfig;
pub use crate::core::client::{ArticClient, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use crate::core::image::get_image_url;
pub use domain::model::{Artwork, Envelope, ImageSize, Pagination, DEFAULT_IMAGE_SIZE};
pub use domain::ports::{ArtworkApi, Transport, TransportResponse};
pub use utils::error::{ArticError, Result};
