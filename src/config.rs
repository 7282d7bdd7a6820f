// src/config.rs

use crate::error::PortfolioError;
use crate::geo::{LatLng, LatLngBounds, Region};
use crate::map::{Marker, MarkerIcon};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything on the page that is content rather than behavior: the map
/// viewport, the markers pinned on every load, and the photo gallery's
/// place names.
///
/// The defaults carry the site's real content, so a page works without any
/// config file on disk. Deployments that want different content ship a JSON
/// file and read it with [`SiteConfig::load`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    /// The viewport the map opens with.
    pub region: Region,
    /// Markers shown on every page load, independent of the backend.
    pub fixed_markers: Vec<Marker>,
    /// Place names the gallery picks from. Each name is expected to have a
    /// photo at `/images/<name>.jpg` on the server.
    pub places: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            region: Region::new(
                // Givatayim, with panning restricted to Israel.
                LatLng::new(32.08, 34.80),
                14,
                LatLngBounds::new(33.34, 29.49, 35.53, 34.28),
            ),
            fixed_markers: vec![
                Marker::pin(
                    LatLng::new(32.7577, 35.2207),
                    "Alon Hagalil",
                    "My hometown",
                    MarkerIcon::pushpin("pink-pushpin.png"),
                ),
                Marker::pin(
                    LatLng::new(32.0722, 34.8089),
                    "Givatayim",
                    "The city I currently live in",
                    MarkerIcon::pushpin("wht-pushpin.png"),
                ),
            ],
            places: [
                "Alon Hagalil",
                "Tel Aviv",
                "Mitzpe Ramon",
                "Hasbani river",
                "Jerusalem",
                "Tzipori stream",
                "Habonim beach",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl SiteConfig {
    /// Parses a config from its JSON form.
    ///
    /// # Returns
    /// A `Result` containing the `SiteConfig`, or a `PortfolioError` if the
    /// JSON does not match the expected shape.
    pub fn from_json(json: &str) -> Result<Self, PortfolioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a config file from disk.
    ///
    /// A missing file is not an error: the defaults are returned so a fresh
    /// deployment works without any setup. A file that exists but cannot be
    /// read or parsed is reported, since silently discarding edited content
    /// would be worse than failing.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON config file.
    ///
    /// # Returns
    /// A `Result` containing the `SiteConfig` or a `PortfolioError`.
    pub fn load(path: &Path) -> Result<Self, PortfolioError> {
        if !path.exists() {
            log::debug!(
                "No config file at '{}', using default site content",
                path.display()
            );
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Writes the config to disk as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), PortfolioError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
