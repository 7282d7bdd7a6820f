pub mod client;
pub mod comments;
pub mod config;
pub mod error;
pub mod gallery;
pub mod geo;
pub mod map;
pub mod meeting;
pub mod page;
pub mod render;
mod requests;

pub use client::PortfolioClient as Portfolio; // Alias for convenience
pub use client::PortfolioClient;
pub use comments::{CommentLimit, CommentPanel};
pub use config::SiteConfig;
pub use error::PortfolioError;
pub use gallery::PlaceImage;
pub use geo::{LatLng, LatLngBounds, Region};
pub use map::{MapView, Marker, MarkerIcon};
pub use page::PortfolioPage;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_default_site_builds_a_page() {
        let page = PortfolioPage::new(SiteConfig::default());
        assert_eq!(page.map().fixed_markers().len(), 2);
        assert_eq!(page.panel().limit(), CommentLimit::Five);
    }
}
