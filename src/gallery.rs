// src/gallery.rs

use crate::config::SiteConfig;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Caption shown next to the gallery photo, nudging the visitor toward the
/// matching marker on the map.
pub const MAP_PROMPT: &str = "Can you find the right location tag on the map?";

/// Alt text for the gallery photo when the image cannot be shown.
pub const IMAGE_ALT: &str = "I am sorry, the image cannot be displayed";

/// Gallery photos are displayed at a fixed square size.
pub const IMAGE_WIDTH: u32 = 300;
pub const IMAGE_HEIGHT: u32 = 300;

/// A photo of one of the site's places.
///
/// The photo files live on the server under `/images/`, named after the
/// place exactly as it appears in the config, spaces included.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaceImage {
    place: String,
}

impl PlaceImage {
    pub fn new(place: impl Into<String>) -> Self {
        PlaceImage {
            place: place.into(),
        }
    }

    /// The place name, doubling as the photo's visible label.
    pub fn place(&self) -> &str {
        &self.place
    }

    /// The URL the photo is served from. The place name is kept verbatim;
    /// the server stores the files under their display names.
    pub fn image_url(&self) -> String {
        format!("/images/{}.jpg", self.place)
    }
}

/// Picks a random place from the config for the gallery.
///
/// Every configured place is equally likely. Returns `None` when the config
/// lists no places, so a page with an empty gallery section still loads.
///
/// # Examples
/// ```rust
/// use portfolio_rs::{gallery, SiteConfig};
///
/// let config = SiteConfig::default();
/// let image = gallery::pick_place(&config, &mut rand::thread_rng()).unwrap();
/// assert!(config.places.contains(&image.place().to_string()));
/// ```
pub fn pick_place<R: Rng + ?Sized>(config: &SiteConfig, rng: &mut R) -> Option<PlaceImage> {
    config
        .places
        .choose(rng)
        .map(|place| PlaceImage::new(place.clone()))
}
