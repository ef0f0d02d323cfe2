pub mod client;
pub mod image;

pub use crate::domain::model::{Artwork, Envelope, Pagination};
pub use crate::domain::ports::{ArtworkApi, Transport, TransportResponse};
pub use crate::utils::error::Result;
