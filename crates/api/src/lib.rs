//! # Vodloop API
//!
//! Client for the vodloop video catalogue service: a single unauthenticated
//! endpoint returning a JSON array of video descriptors.
//!
//! The client owns transport concerns only (HTTP, status handling, JSON
//! decoding). Ordering and adaptation into playable items happen downstream
//! in `vodloop-player`.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::VideosClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{Author, VideoDescriptor};
