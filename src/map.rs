// src/map.rs

use crate::client::PortfolioClient;
use crate::config::SiteConfig;
use crate::error::PortfolioError;
use crate::geo::{LatLng, Region};

use serde::{Deserialize, Serialize};

/// Where the pushpin marker icons are served from.
pub const ICON_BASE_URL: &str = "http://maps.google.com/mapfiles/kml/pushpin/";

/// Pushpin icons are drawn at this size regardless of the source image.
pub const ICON_SCALED_SIZE: (u32, u32) = (50, 50);

/// A custom icon for a map marker, scaled to a fixed display size.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MarkerIcon {
    pub url: String,
    pub scaled_size: (u32, u32),
}

impl MarkerIcon {
    /// Creates an icon drawn at the standard scaled size.
    pub fn new(url: impl Into<String>) -> Self {
        MarkerIcon {
            url: url.into(),
            scaled_size: ICON_SCALED_SIZE,
        }
    }

    /// Creates an icon for one of the stock pushpin images, e.g.
    /// `"pink-pushpin.png"`.
    pub fn pushpin(file_name: &str) -> Self {
        Self::new(format!("{}{}", ICON_BASE_URL, file_name))
    }
}

/// A single marker on the map.
///
/// Fixed markers carry a title, a description shown in an info window when
/// the marker is clicked, and a custom icon. Remote pins from the backend
/// are position-only and use the widget's default marker.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<MarkerIcon>,
}

impl Marker {
    /// Creates a titled marker with an info window and a custom icon.
    pub fn pin(
        position: LatLng,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: MarkerIcon,
    ) -> Self {
        Marker {
            position,
            title: title.into(),
            description: description.into(),
            icon: Some(icon),
        }
    }

    /// Creates a plain, position-only marker.
    pub fn at(position: LatLng) -> Self {
        Marker {
            position,
            title: String::new(),
            description: String::new(),
            icon: None,
        }
    }

    /// Whether clicking this marker opens an info window.
    pub fn has_info_window(&self) -> bool {
        !self.description.is_empty()
    }
}

/// The state of the map on the page: the viewport plus every marker on it.
///
/// Markers are kept in one list with the fixed ones first, so the fixed
/// markers survive any number of remote loads and the two groups can still
/// be told apart.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    region: Region,
    markers: Vec<Marker>,
    fixed_count: usize,
}

impl MapView {
    /// Creates a map with no markers.
    pub fn new(region: Region) -> Self {
        MapView {
            region,
            markers: Vec::new(),
            fixed_count: 0,
        }
    }

    /// Creates a map pre-populated with fixed markers.
    pub fn with_markers(region: Region, fixed: Vec<Marker>) -> Self {
        let fixed_count = fixed.len();
        MapView {
            region,
            markers: fixed,
            fixed_count,
        }
    }

    /// Creates the site's map: the configured viewport with the configured
    /// markers already placed.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::with_markers(config.region, config.fixed_markers.clone())
    }

    /// The viewport the map opens with.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Every marker on the map, fixed ones first.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The markers that are always on the map.
    pub fn fixed_markers(&self) -> &[Marker] {
        &self.markers[..self.fixed_count]
    }

    /// The position-only pins fetched from the backend.
    pub fn remote_markers(&self) -> &[Marker] {
        &self.markers[self.fixed_count..]
    }

    /// Fetches location pins from the backend and adds them to the map.
    ///
    /// The fixed markers are untouched, and if the fetch fails the map keeps
    /// exactly the markers it had.
    ///
    /// # Returns
    /// A `Result` containing the number of pins added, or a `PortfolioError`
    /// if the fetch failed.
    ///
    /// # Examples
    /// ```rust,no_run
    /// use portfolio_rs::{MapView, Portfolio, SiteConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Portfolio::new("http://localhost:8080")?;
    ///     let config = SiteConfig::default();
    ///     let mut map = MapView::from_config(&config);
    ///     let added = map.load_remote_pins(&client).await?;
    ///     println!("placed {} pins", added);
    ///     Ok(())
    /// }
    /// ```
    pub async fn load_remote_pins(
        &mut self,
        client: &PortfolioClient,
    ) -> Result<usize, PortfolioError> {
        let pins = client.get_location_pins().await?;
        let count = pins.len();
        self.markers.extend(pins.into_iter().map(Marker::at));
        Ok(count)
    }

    /// Serializes the viewport and markers as the JSON payload the map
    /// widget on the page reads.
    pub fn widget_payload_json(&self) -> Result<String, PortfolioError> {
        #[derive(Serialize)]
        struct WidgetPayload<'a> {
            region: &'a Region,
            markers: &'a [Marker],
        }
        Ok(serde_json::to_string(&WidgetPayload {
            region: &self.region,
            markers: &self.markers,
        })?)
    }
}

impl PortfolioClient {
    /// Fetches the location pins the backend wants shown on the map.
    ///
    /// Issues a GET to the `location-data` endpoint, which replies with a
    /// JSON array of points.
    ///
    /// # Returns
    /// A `Result` containing the points, or a `PortfolioError` if the
    /// request or decoding failed.
    pub async fn get_location_pins(&self) -> Result<Vec<LatLng>, PortfolioError> {
        self._get_with_params("location-data", &[]).await
    }
}
