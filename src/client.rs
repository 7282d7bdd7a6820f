// src/client.rs

use crate::error::PortfolioError;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// The main client for interacting with a portfolio site backend.
///
/// `PortfolioClient` holds the backend base URL and the underlying
/// `reqwest::Client`, and provides the typed operations the rest of the
/// crate builds on: listing, creating and deleting comments (see
/// [`crate::comments`]) and fetching the location pins shown on the map
/// (see [`crate::map`]).
///
/// The client is cheap to clone; clones share the same connection pool.
///
/// # Initialization
///
/// A `PortfolioClient` is created with [`PortfolioClient::new()`], giving
/// the base URL the backend is served from. Endpoints such as `/data` and
/// `/location-data` are resolved relative to that base.
///
/// ```rust,no_run
/// use portfolio_rs::Portfolio;
/// # use portfolio_rs::PortfolioError;
///
/// # fn main() -> Result<(), PortfolioError> {
/// let client = Portfolio::new("http://localhost:8080")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    pub server_url: String,
    pub(crate) http_client: Client,
}

impl PortfolioClient {
    /// Creates a new `PortfolioClient` instance.
    ///
    /// # Arguments
    ///
    /// * `server_url`: The base URL the backend is served from (e.g.
    ///   `"http://localhost:8080"`). A missing scheme defaults to `http://`,
    ///   and trailing slashes are trimmed so endpoint paths join cleanly.
    ///
    /// # Returns
    ///
    /// A `Result` containing the new `PortfolioClient` if successful, or a
    /// `PortfolioError` if the URL is invalid or the HTTP client cannot be
    /// constructed.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use portfolio_rs::PortfolioClient;
    /// # use portfolio_rs::PortfolioError;
    ///
    /// # fn main() -> Result<(), PortfolioError> {
    /// // Scheme is optional; "localhost:8080" works too.
    /// let client = PortfolioClient::new("localhost:8080")?;
    /// assert_eq!(client.server_url, "http://localhost:8080");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(server_url: &str) -> Result<Self, PortfolioError> {
        let mut temp_url_string = server_url.to_string();

        // Ensure scheme is present
        if !temp_url_string.starts_with("http://") && !temp_url_string.starts_with("https://") {
            temp_url_string = format!("http://{}", temp_url_string);
        }

        let parsed_server_url = Url::parse(&temp_url_string)?;

        if parsed_server_url.cannot_be_a_base() {
            return Err(PortfolioError::InvalidUrl(format!(
                "The server_url '{}' (after ensuring scheme) resolved to '{}', which cannot be a base URL. Please provide a full base URL (e.g., http://localhost:8080).",
                server_url, parsed_server_url
            )));
        }

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("portfolio-rs/", env!("CARGO_PKG_VERSION"))),
        );

        let http_client = Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(PortfolioError::ReqwestError)?;

        let final_server_url = parsed_server_url.as_str().trim_end_matches('/').to_string();

        log::debug!(
            "PortfolioClient initialized with base server_url: {}",
            final_server_url
        );

        Ok(Self {
            server_url: final_server_url,
            http_client,
        })
    }

    // Resolves a relative endpoint like "data" or "location-data" against
    // the base server URL.
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> Result<Url, PortfolioError> {
        let full_url_str = format!(
            "{}/{}",
            self.server_url,
            endpoint.trim_start_matches('/')
        );
        Url::parse(&full_url_str).map_err(|e| {
            PortfolioError::InvalidUrl(format!(
                "Failed to build URL for endpoint '{}' against base '{}': {}",
                endpoint, self.server_url, e
            ))
        })
    }

    // Helper for GET requests with URL query parameters. The response body
    // is decoded as JSON into `R`.
    pub(crate) async fn _get_with_params<R: DeserializeOwned + Send + 'static>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<R, PortfolioError> {
        let mut full_url = self.endpoint_url(endpoint)?;

        if !params.is_empty() {
            for (key, value) in params {
                full_url.query_pairs_mut().append_pair(key, value);
            }
        }

        log::debug!("Preparing GET request: URL={}", full_url.as_str());

        let response = self
            .http_client
            .get(full_url)
            .send()
            .await
            .map_err(PortfolioError::ReqwestError)?;

        self._send_and_process_response(response, endpoint).await
    }

    // Helper for POST requests carrying a urlencoded form body. The backend
    // answers these with a redirect back to the page, so the response body
    // is ignored.
    pub(crate) async fn _post_form<T: serde::Serialize + Send + Sync + ?Sized>(
        &self,
        endpoint: &str,
        form: &T,
    ) -> Result<(), PortfolioError> {
        let full_url = self.endpoint_url(endpoint)?;

        log::debug!("Preparing POST form request: URL={}", full_url.as_str());

        let response = self
            .http_client
            .post(full_url)
            .form(form)
            .send()
            .await
            .map_err(PortfolioError::ReqwestError)?;

        self._send_and_ignore_body(response, endpoint).await
    }

    // Helper for bodyless POST requests whose response body is ignored.
    pub(crate) async fn _post_empty(&self, endpoint: &str) -> Result<(), PortfolioError> {
        let full_url = self.endpoint_url(endpoint)?;

        log::debug!("Preparing POST request: URL={}", full_url.as_str());

        let response = self
            .http_client
            .post(full_url)
            .send()
            .await
            .map_err(PortfolioError::ReqwestError)?;

        self._send_and_ignore_body(response, endpoint).await
    }
}
