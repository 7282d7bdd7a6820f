// src/render.rs
//
// Pure HTML builders for the page fragments. Nothing here does I/O; the
// functions take the view state and return markup, so they are trivial to
// test and the async layer stays free of presentation concerns.

use crate::comments::CommentLimit;
use crate::error::PortfolioError;
use crate::gallery::{PlaceImage, IMAGE_ALT, IMAGE_HEIGHT, IMAGE_WIDTH};
use crate::map::MapView;

/// Escapes text for safe interpolation into HTML content or attribute
/// values. Comment text comes from anonymous visitors, so everything that
/// could open a tag or break out of an attribute is replaced.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders one comment as a list item.
pub fn comment_item(comment: &str) -> String {
    format!(
        "<li class=\"comment\"><span>{}</span></li>",
        escape_text(comment)
    )
}

/// Renders comments as the contents of the history list, in the order
/// given (the panel keeps them oldest first).
pub fn comment_items(comments: &[String]) -> String {
    comments
        .iter()
        .map(|comment| comment_item(comment))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the gallery photo at its fixed display size.
pub fn place_image(image: &PlaceImage) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\">",
        escape_text(&image.image_url()),
        escape_text(IMAGE_ALT),
        IMAGE_WIDTH,
        IMAGE_HEIGHT
    )
}

/// Renders the comment-limit dropdown with the active limit preselected.
pub fn limit_selector(limit: CommentLimit) -> String {
    let mut html = String::from("<select id=\"maxComments\" name=\"numOfCom\">\n");
    for option in [CommentLimit::Five, CommentLimit::Ten] {
        let selected = if option == limit { " selected" } else { "" };
        html.push_str(&format!(
            "  <option value=\"{0}\"{1}>{0}</option>\n",
            option.as_query_value(),
            selected
        ));
    }
    html.push_str("</select>");
    html
}

/// Renders the map container with the widget payload embedded as a data
/// attribute for the script on the page to read.
pub fn map_container(map: &MapView) -> Result<String, PortfolioError> {
    let payload = map.widget_payload_json()?;
    Ok(format!(
        "<div id=\"map\" data-map-config=\"{}\"></div>",
        escape_text(&payload)
    ))
}
