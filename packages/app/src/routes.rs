use actix_web::{ResponseError, http::StatusCode, web};
use chrono::{Duration, Utc};
use linereview_app_ui::CommentBox;
use linereview_comment_models::{Comment, DiffView, Viewer};
use maud::Markup;
use serde::Deserialize;

use crate::{page, state::AppState};

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Invalid body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl ResponseError for RouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Props for a single comment box, in the data layer's JSON shape.
#[derive(Debug, Deserialize)]
pub struct CommentBoxRequest {
    pub viewer: Viewer,
    pub comment: Comment,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    /// Render with the actions menu already open.
    #[serde(default)]
    pub open: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub diff_view: DiffView,
    #[serde(default)]
    pub site_admin: bool,
    #[serde(default)]
    pub author: bool,
    #[serde(default)]
    pub open: bool,
}

/// `POST /api/comment-box`: renders the table row for the posted comment.
///
/// # Errors
///
/// * If the body is not a valid comment box request
#[allow(clippy::future_not_send)]
pub async fn render_comment_box(
    query: web::Query<RenderQuery>,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<Markup, RouteError> {
    let request: CommentBoxRequest = serde_json::from_slice(&body).inspect_err(|e| {
        log::error!("Failed to parse comment box request: {e}");
    })?;

    log::debug!(
        "render_comment_box: comment={} diff_view={} open={}",
        request.comment.id,
        request.viewer.diff_view,
        query.open
    );

    let mut comment_box = CommentBox::new(request.viewer, request.comment, state.origin.clone());
    comment_box.set_actions_open(query.open);

    Ok(comment_box.render())
}

/// `GET /preview`: a full page with a sample comment inside a diff table.
#[allow(clippy::future_not_send)]
pub async fn preview(query: web::Query<PreviewQuery>, state: web::Data<AppState>) -> Markup {
    let viewer = Viewer::new(query.site_admin, query.diff_view.clone());
    let comment = page::sample_comment(query.author, Utc::now() - Duration::hours(3));

    let mut comment_box = CommentBox::new(viewer, comment, state.origin.clone());
    comment_box.set_actions_open(query.open);

    page::page_shell("Diff comment preview", &page::render_diff_table(&comment_box))
}
