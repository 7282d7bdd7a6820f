// src/geo.rs

use serde::{Deserialize, Serialize};

/// A geographical point, serialized the way map widgets expect it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new `LatLng`.
    ///
    /// # Panics
    /// Panics if latitude is not between -90 and 90, or longitude is not between -180 and 180.
    pub fn new(lat: f64, lng: f64) -> Self {
        if !(-90.0..=90.0).contains(&lat) {
            panic!("Latitude must be between -90 and 90 degrees.");
        }
        if !(-180.0..=180.0).contains(&lng) {
            panic!("Longitude must be between -180 and 180 degrees.");
        }
        LatLng { lat, lng }
    }
}

/// A rectangle on the map given by its bounding latitudes and longitudes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl LatLngBounds {
    /// Creates a new `LatLngBounds`.
    ///
    /// # Panics
    /// Panics if the latitudes or longitudes are out of range, or if `north`
    /// is below `south`.
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        for lat in [north, south] {
            if !(-90.0..=90.0).contains(&lat) {
                panic!("Latitude must be between -90 and 90 degrees.");
            }
        }
        for lng in [east, west] {
            if !(-180.0..=180.0).contains(&lng) {
                panic!("Longitude must be between -180 and 180 degrees.");
            }
        }
        if north < south {
            panic!("Northern bound must not be below the southern bound.");
        }
        LatLngBounds {
            north,
            south,
            east,
            west,
        }
    }

    /// Whether the point lies inside this rectangle (edges included).
    pub fn contains(&self, point: &LatLng) -> bool {
        (self.south..=self.north).contains(&point.lat)
            && (self.west..=self.east).contains(&point.lng)
    }
}

/// The viewport the map opens with: where it is centered, how far it is
/// zoomed in, and the rectangle panning is restricted to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: LatLng,
    pub zoom: u8,
    pub bounds: LatLngBounds,
    /// When false the restriction is soft: the viewport may show area
    /// outside the bounds as long as its center stays inside.
    #[serde(default)]
    pub strict_bounds: bool,
}

impl Region {
    /// Creates a region with a soft bounds restriction.
    pub fn new(center: LatLng, zoom: u8, bounds: LatLngBounds) -> Self {
        Region {
            center,
            zoom,
            bounds,
            strict_bounds: false,
        }
    }
}
