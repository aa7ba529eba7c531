//! Landing page handler.
//!
//! Lists the available routes as a small HTML page.

use axum::response::Html;

const HOME_PAGE: &str = concat!(
    "<b>Available Routes:</b><br/><br/>",
    "/api/v1.0/precipitation<br/>",
    "/api/v1.0/stations<br/>",
    "/api/v1.0/tobs<br/><br/>",
    "Please enter start date in the API below in the format YYYY-MM-DD:<br/><br/>",
    "/api/v1.0/&lt;start&gt;<br/><br/>",
    "Please enter start and end dates in the API below in the format YYYY-MM-DD/YYYY-MM-DD:<br/><br/>",
    "/api/v1.0/&lt;start&gt;/&lt;end&gt;",
);

/// Handle GET / requests
pub async fn home_handler() -> Html<&'static str> {
    Html(HOME_PAGE)
}
