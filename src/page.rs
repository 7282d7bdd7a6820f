// src/page.rs

use crate::client::PortfolioClient;
use crate::comments::{CommentLimit, CommentPanel};
use crate::config::SiteConfig;
use crate::error::PortfolioError;
use crate::gallery::{self, PlaceImage, MAP_PROMPT};
use crate::map::MapView;
use crate::render;

use rand::Rng;

/// Reads the comment limit out of the page's own URL.
///
/// The backend redirects here with `?maxComments=N` after a comment is
/// posted, so the page can come back up showing the same number of
/// comments. Only the first `maxComments` parameter counts, and anything
/// but the two valid values is ignored.
pub fn limit_from_page_url(page_url: &str) -> Option<CommentLimit> {
    let url = url::Url::parse(page_url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "maxComments")
        .and_then(|(_, value)| CommentLimit::from_query_value(&value))
}

/// The whole page: site content plus the state of every dynamic section.
///
/// [`load`](Self::load) builds the page the way a visitor sees it load. It
/// never fails: a backend hiccup costs the affected section its data and a
/// warning in the log, while the map's fixed markers and the rest of the
/// page come up regardless.
#[derive(Debug, Clone)]
pub struct PortfolioPage {
    config: SiteConfig,
    panel: CommentPanel,
    map: MapView,
    image: Option<PlaceImage>,
}

impl PortfolioPage {
    /// Builds the page in its pre-fetch state: default comment limit, no
    /// comments, the map showing only the fixed markers, no gallery photo.
    pub fn new(config: SiteConfig) -> Self {
        let map = MapView::from_config(&config);
        PortfolioPage {
            config,
            panel: CommentPanel::new(),
            map,
            image: None,
        }
    }

    /// Loads the page: picks the comment limit from the page URL, fetches
    /// the comment history, and places the backend's location pins on the
    /// map.
    ///
    /// # Arguments
    /// * `client` - The backend client.
    /// * `config` - The site content to build the page from.
    /// * `page_url` - The URL the page was opened with, checked for a
    ///   `maxComments` parameter.
    ///
    /// # Examples
    /// ```rust,no_run
    /// use portfolio_rs::{Portfolio, PortfolioPage, SiteConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Portfolio::new("http://localhost:8080")?;
    ///     let page = PortfolioPage::load(
    ///         &client,
    ///         SiteConfig::default(),
    ///         "http://localhost:8080/index.html?maxComments=10",
    ///     )
    ///     .await;
    ///     println!("{} comments shown", page.panel().comments().len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn load(client: &PortfolioClient, config: SiteConfig, page_url: &str) -> Self {
        let mut page = Self::new(config);
        if let Some(limit) = limit_from_page_url(page_url) {
            page.panel.set_limit(limit);
        }

        if let Err(e) = page.panel.load_comments(client).await {
            log::warn!("Could not load the comment history: {}", e);
        }
        if let Err(e) = page.map.load_remote_pins(client).await {
            log::warn!("Could not load location pins, showing fixed markers only: {}", e);
        }
        page
    }

    /// Switches the comment limit and reloads the history at the new size.
    ///
    /// # Returns
    /// A `Result` containing the number of comments now shown, or a
    /// `PortfolioError` if the reload failed. On failure the panel is left
    /// cleared, exactly like the page it models.
    pub async fn change_limit(
        &mut self,
        client: &PortfolioClient,
        limit: CommentLimit,
    ) -> Result<usize, PortfolioError> {
        self.panel.set_limit(limit);
        self.panel.refresh(client).await
    }

    /// Deletes every comment on the backend and empties the history.
    pub async fn delete_comments(&mut self, client: &PortfolioClient) -> Result<(), PortfolioError> {
        self.panel.delete_all(client).await
    }

    /// Swaps the gallery photo for a random place from the config.
    ///
    /// Returns the picked image, or `None` when the config lists no places.
    pub fn shuffle_image<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&PlaceImage> {
        self.image = gallery::pick_place(&self.config, rng);
        self.image.as_ref()
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn panel(&self) -> &CommentPanel {
        &self.panel
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    pub fn image(&self) -> Option<&PlaceImage> {
        self.image.as_ref()
    }

    /// The caption above the map, present once a photo has been picked.
    pub fn map_title(&self) -> Option<&'static str> {
        self.image.as_ref().map(|_| MAP_PROMPT)
    }

    /// The name of the pictured place, present once a photo has been picked.
    pub fn location_label(&self) -> Option<&str> {
        self.image.as_ref().map(|image| image.place())
    }

    /// The comment history list's markup.
    pub fn comment_history_html(&self) -> String {
        render::comment_items(self.panel.comments())
    }

    /// The limit dropdown's markup, current limit preselected.
    pub fn limit_selector_html(&self) -> String {
        render::limit_selector(self.panel.limit())
    }

    /// The map container's markup with the widget payload embedded.
    pub fn map_html(&self) -> Result<String, PortfolioError> {
        render::map_container(&self.map)
    }

    /// The gallery section's markup: the photo, its label, and the map
    /// prompt. `None` until a photo has been picked.
    pub fn gallery_html(&self) -> Option<String> {
        self.image.as_ref().map(|image| {
            format!(
                "{}\n<p id=\"location-name\">{}</p>\n<p id=\"map-title\">{}</p>",
                render::place_image(image),
                render::escape_text(image.place()),
                MAP_PROMPT
            )
        })
    }
}
