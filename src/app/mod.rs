// App layer: caller-side workflows built on the ArtworkApi port.

pub mod export;
pub mod gallery;
pub mod game;
pub mod smoke;
