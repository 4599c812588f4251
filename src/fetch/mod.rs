//! Fetching media by shortcode
//!
//! [`MediaFetcher`] is the seam between the decoders and the network.
//! [`Media::update`](crate::model::Media::update) only needs something that
//! implements it; [`InstagramClient`] is the reqwest-backed implementation.

mod client;
mod shortcode;
mod types;

pub use client::InstagramClient;
pub use shortcode::{is_valid_shortcode, shortcode_from_url};
pub use types::MediaFetcher;

#[cfg(test)]
mod tests;
