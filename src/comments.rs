use crate::client::PortfolioClient;
use crate::error::PortfolioError;

use std::fmt;

/// How many comments the page asks the backend for.
///
/// The comment feed only offers two page sizes, five or ten, and the
/// backend rejects nothing else because nothing else is ever sent. The
/// selector on the page and the `maxComments` query parameter both speak
/// in terms of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentLimit {
    /// Show at most five comments. This is the default for a fresh page.
    #[default]
    Five,
    /// Show at most ten comments.
    Ten,
}

impl CommentLimit {
    /// Parses the value of a `maxComments` query parameter.
    ///
    /// Only the exact strings `"5"` and `"10"` are recognized; anything
    /// else (including `"05"` or `" 5"`) yields `None` so the caller can
    /// fall back to the default.
    ///
    /// # Examples
    /// ```rust
    /// use portfolio_rs::CommentLimit;
    ///
    /// assert_eq!(CommentLimit::from_query_value("10"), Some(CommentLimit::Ten));
    /// assert_eq!(CommentLimit::from_query_value("7"), None);
    /// ```
    pub fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "5" => Some(CommentLimit::Five),
            "10" => Some(CommentLimit::Ten),
            _ => None,
        }
    }

    /// The numeric count this limit stands for.
    pub fn as_count(&self) -> usize {
        match self {
            CommentLimit::Five => 5,
            CommentLimit::Ten => 10,
        }
    }

    /// The wire form used in query strings and form fields.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            CommentLimit::Five => "5",
            CommentLimit::Ten => "10",
        }
    }
}

impl fmt::Display for CommentLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

impl PortfolioClient {
    /// Fetches the most recent comments from the backend.
    ///
    /// Issues a GET to the `data` endpoint with the `maxComments` query
    /// parameter set from `limit`. The backend replies with a JSON array
    /// of comment strings, newest last, containing at most `limit` entries.
    ///
    /// # Arguments
    /// * `limit` - The maximum number of comments to request.
    ///
    /// # Returns
    /// A `Result` containing the comment texts, or a `PortfolioError` if
    /// the request or decoding failed.
    ///
    /// # Examples
    /// ```rust,no_run
    /// use portfolio_rs::{CommentLimit, Portfolio};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Portfolio::new("http://localhost:8080")?;
    ///     let comments = client.get_comments(CommentLimit::Ten).await?;
    ///     for comment in comments {
    ///         println!("{}", comment);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_comments(&self, limit: CommentLimit) -> Result<Vec<String>, PortfolioError> {
        let params = [(
            "maxComments".to_string(),
            limit.as_query_value().to_string(),
        )];
        self._get_with_params("data", &params).await
    }

    /// Submits a new comment to the backend.
    ///
    /// Posts a form to the `data` endpoint with the comment text and the
    /// currently selected limit, mirroring what the comment form on the
    /// page sends. The backend stores the comment and answers with a
    /// redirect back to the page, which this client treats as completion.
    ///
    /// # Arguments
    /// * `text` - The comment text. Must not be empty or all whitespace.
    /// * `limit` - The limit currently selected on the page, echoed back
    ///   so the redirect lands on a page showing the same number of
    ///   comments.
    ///
    /// # Returns
    /// A `Result` containing `()` on success, or a `PortfolioError` if the
    /// text was empty or the request failed.
    ///
    /// # Examples
    /// ```rust,no_run
    /// use portfolio_rs::{CommentLimit, Portfolio};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Portfolio::new("http://localhost:8080")?;
    ///     client.create_comment("Nice site!", CommentLimit::Five).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_comment(
        &self,
        text: &str,
        limit: CommentLimit,
    ) -> Result<(), PortfolioError> {
        if text.trim().is_empty() {
            return Err(PortfolioError::InvalidInput(
                "Comment text cannot be empty".to_string(),
            ));
        }
        let form = [("comment", text), ("numOfCom", limit.as_query_value())];
        self._post_form("data", &form).await
    }

    /// Deletes every stored comment on the backend.
    ///
    /// Issues an empty POST to the `delete-data` endpoint. The response
    /// body is ignored; only the status code decides success.
    ///
    /// # Returns
    /// A `Result` containing `()` on success, or a `PortfolioError` if the
    /// request failed.
    pub async fn delete_all_comments(&self) -> Result<(), PortfolioError> {
        self._post_empty("delete-data").await
    }
}

/// The comment section of the page: the selected limit plus the comments
/// currently shown.
///
/// `CommentPanel` is plain state; it performs no I/O of its own. The async
/// methods borrow a [`PortfolioClient`] to talk to the backend and update
/// the panel from the outcome, so rendering and networking stay separate.
#[derive(Debug, Clone, Default)]
pub struct CommentPanel {
    limit: CommentLimit,
    comments: Vec<String>,
}

impl CommentPanel {
    /// Creates an empty panel with the default limit of five.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty panel with the given limit preselected.
    pub fn with_limit(limit: CommentLimit) -> Self {
        Self {
            limit,
            comments: Vec::new(),
        }
    }

    /// The currently selected limit.
    pub fn limit(&self) -> CommentLimit {
        self.limit
    }

    /// The comments currently shown, oldest first.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Whether the panel shows no comments.
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Selects a new limit without touching the shown comments.
    ///
    /// The panel keeps displaying what it already has until the next
    /// [`refresh`](Self::refresh).
    pub fn set_limit(&mut self, limit: CommentLimit) {
        self.limit = limit;
    }

    /// Empties the shown comments without contacting the backend.
    pub fn clear(&mut self) {
        self.comments.clear();
    }

    /// Fetches comments at the current limit and appends them to the panel.
    ///
    /// This matches how the page fills an initially empty comment list; it
    /// does not clear first. Use [`refresh`](Self::refresh) to replace the
    /// contents instead.
    ///
    /// # Returns
    /// A `Result` containing the number of comments appended, or a
    /// `PortfolioError` if the fetch failed. On error the panel is left
    /// unchanged.
    pub async fn load_comments(
        &mut self,
        client: &PortfolioClient,
    ) -> Result<usize, PortfolioError> {
        let fetched = client.get_comments(self.limit).await?;
        let count = fetched.len();
        self.comments.extend(fetched);
        Ok(count)
    }

    /// Clears the panel and reloads it at the current limit.
    ///
    /// This is what the page does when the limit selector changes: the old
    /// list is dropped before the new one arrives. If the fetch fails the
    /// panel stays empty and the error is returned.
    pub async fn refresh(&mut self, client: &PortfolioClient) -> Result<usize, PortfolioError> {
        self.clear();
        self.load_comments(client).await
    }

    /// Deletes all comments on the backend and, on success, clears the panel.
    ///
    /// If the delete request fails the panel keeps its current contents so
    /// the page does not pretend data is gone when it is not.
    pub async fn delete_all(&mut self, client: &PortfolioClient) -> Result<(), PortfolioError> {
        client.delete_all_comments().await?;
        self.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_parses_only_exact_query_values() {
        assert_eq!(CommentLimit::from_query_value("5"), Some(CommentLimit::Five));
        assert_eq!(CommentLimit::from_query_value("10"), Some(CommentLimit::Ten));
        assert_eq!(CommentLimit::from_query_value("7"), None);
        assert_eq!(CommentLimit::from_query_value("05"), None);
        assert_eq!(CommentLimit::from_query_value(" 5"), None);
        assert_eq!(CommentLimit::from_query_value(""), None);
    }

    #[test]
    fn limit_defaults_to_five() {
        assert_eq!(CommentLimit::default(), CommentLimit::Five);
        assert_eq!(CommentLimit::default().as_count(), 5);
    }

    #[test]
    fn limit_round_trips_through_wire_form() {
        for limit in [CommentLimit::Five, CommentLimit::Ten] {
            assert_eq!(CommentLimit::from_query_value(limit.as_query_value()), Some(limit));
        }
        assert_eq!(CommentLimit::Ten.to_string(), "10");
    }

    #[test]
    fn panel_starts_empty_with_default_limit() {
        let panel = CommentPanel::new();
        assert!(panel.is_empty());
        assert_eq!(panel.limit(), CommentLimit::Five);
    }

    #[test]
    fn set_limit_keeps_existing_comments() {
        let mut panel = CommentPanel::with_limit(CommentLimit::Ten);
        panel.comments = vec!["first".to_string(), "second".to_string()];

        panel.set_limit(CommentLimit::Five);

        assert_eq!(panel.limit(), CommentLimit::Five);
        assert_eq!(panel.comments(), ["first", "second"]);
    }

    #[test]
    fn clear_empties_the_panel() {
        let mut panel = CommentPanel::new();
        panel.comments = vec!["only".to_string()];

        panel.clear();

        assert!(panel.is_empty());
    }
}
