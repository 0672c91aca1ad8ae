//! A single review comment rendered as a row of the diff table.

use linereview_comment_models::{Comment, DiffView, Viewer};
use maud::{Markup, PreEscaped, html};

use crate::actions_menu::{self, ActionsMenu, MenuItem};
use crate::clipboard::Clipboard;
use crate::origin::Origin;
use crate::relative_time::{self, Ago, RelativeTimeFormatter};

const BORDER: &str = "1px solid #d0d7de";

const LABEL_STYLE: &str = "display:inline-block;padding:0 7px;font-size:12px;font-weight:500;\
    line-height:18px;white-space:nowrap;border:1px solid #d0d7de;border-radius:2em;\
    color:#57606a";

const MENU_ITEM_STYLE: &str = "display:block;width:100%;padding:8px;margin:0;border:0;\
    border-radius:0;background:transparent;color:#24292f;font-size:14px;text-align:left;\
    text-decoration:none;cursor:pointer";

const KEBAB_ICON: &str = r#"<svg aria-hidden="true" width="16" height="16" viewBox="0 0 16 16" fill="currentColor"><path d="M8 9a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3ZM1.5 9a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3Zm13 0a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3Z"></path></svg>"#;

/// A diff-line comment together with its local UI state.
///
/// Everything except the actions menu flag is read-only input; the menu
/// flag lives and dies with the instance.
#[derive(Debug, Clone)]
pub struct CommentBox {
    viewer: Viewer,
    comment: Comment,
    origin: Origin,
    actions: ActionsMenu,
}

impl CommentBox {
    #[must_use]
    pub fn new(viewer: Viewer, comment: Comment, origin: Origin) -> Self {
        Self {
            viewer,
            comment,
            origin,
            actions: ActionsMenu::default(),
        }
    }

    #[must_use]
    pub const fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    #[must_use]
    pub const fn comment(&self) -> &Comment {
        &self.comment
    }

    #[must_use]
    pub const fn is_actions_open(&self) -> bool {
        self.actions.is_open()
    }

    /// Trigger activation: flips the menu between open and closed.
    pub fn toggle_actions(&mut self) {
        self.actions.toggle();
        log::debug!(
            "toggle_actions: comment={} open={}",
            self.comment.id,
            self.actions.is_open()
        );
    }

    /// Open-state change requested by the menu itself.
    pub fn set_actions_open(&mut self, open: bool) {
        self.actions.set_open(open);
    }

    /// Dismissal, e.g. focus leaving the menu or Escape.
    pub fn close_actions(&mut self) {
        self.actions.close();
    }

    /// Absolute link to this comment, as placed on the clipboard.
    #[must_use]
    pub fn copy_link_value(&self) -> String {
        self.origin.join(&self.comment.current_diff_resource_path)
    }

    /// "Copy link" activation. Closes the menu afterwards.
    pub fn copy_link(&mut self, clipboard: &mut impl Clipboard) {
        let link = self.copy_link_value();
        log::debug!("copy_link: comment={} link={link}", self.comment.id);
        clipboard.write_text(&link);
        self.actions.close();
    }

    #[must_use]
    pub fn render(&self) -> Markup {
        self.render_with(&Ago::now())
    }

    #[must_use]
    pub fn render_with(&self, time_formatter: &impl RelativeTimeFormatter) -> Markup {
        render_comment_box(
            &self.viewer,
            &self.comment,
            &self.copy_link_value(),
            self.actions,
            time_formatter,
        )
    }
}

/// Number of diff table columns the comment row spans.
#[must_use]
pub const fn column_span(diff_view: &DiffView) -> u8 {
    if diff_view.is_split() { 2 } else { 3 }
}

/// DOM id of the comment box, the anchor target of its permalink.
#[must_use]
pub fn comment_id(comment: &Comment) -> String {
    format!("comment-{}", comment.id)
}

/// DOM id of the actions menu, referenced by the toggle's `aria-controls`.
#[must_use]
pub fn comment_actions_menu_id(comment: &Comment) -> String {
    format!("comment-{}-actions", comment.id)
}

/// `data-testid` of the rendered comment body.
#[must_use]
pub fn comment_body_test_id(comment: &Comment) -> String {
    format!("Comment body html for comment {}", comment.id)
}

#[must_use]
pub fn render_comment_box(
    viewer: &Viewer,
    comment: &Comment,
    copy_link_value: &str,
    actions: ActionsMenu,
    time_formatter: &impl RelativeTimeFormatter,
) -> Markup {
    log::trace!(
        "render_comment_box: comment={} diff_view={} actions_open={}",
        comment.id,
        viewer.diff_view,
        actions.is_open()
    );

    html! {
        tr
            id=(comment_id(comment))
            style={ "border-top:" (BORDER) ";border-bottom:" (BORDER) ";border-left:0;border-right:0" }
        {
            td colspan=(column_span(&viewer.diff_view)) {
                div style={
                    "display:block;border:" (BORDER) ";border-radius:6px;margin:8px;padding:16px;max-width:714px"
                } {
                    div style="display:flex;justify-content:space-between;align-items:center" {
                        div {
                            (render_author(comment, time_formatter))
                        }
                        div style="display:flex;align-items:center" {
                            (render_labels(comment))
                            (render_actions_menu(viewer, comment, copy_link_value, actions))
                        }
                    }
                    div style="margin-left:32px;margin-top:8px" {
                        div data-testid=(comment_body_test_id(comment)) {
                            (PreEscaped(comment.body_html.as_str()))
                        }
                    }
                }
            }
        }
    }
}

fn render_author(comment: &Comment, time_formatter: &impl RelativeTimeFormatter) -> Markup {
    let published_at = &comment.published_at;

    html! {
        img
            alt="Avatar image for comment author"
            width="24"
            height="24"
            src=(comment.author.avatar_url)
            style="border-radius:50%;margin-right:8px;vertical-align:middle";
        strong style="font-weight:600;margin-right:4px" {
            a href=(comment.author.url) style="color:#24292f;text-decoration:none" {
                (comment.author.login)
            }
        }
        a
            href=(comment.current_diff_resource_path)
            style="color:#57606a;font-weight:400;text-decoration:none"
        {
            time
                datetime=(published_at.to_rfc3339())
                title=(relative_time::format_title(published_at))
            {
                (time_formatter.format(published_at))
            }
        }
    }
}

fn render_labels(comment: &Comment) -> Markup {
    html! {
        span style={ (LABEL_STYLE) ";margin-right:4px;text-transform:capitalize" } {
            (comment.relationship_label())
        }
        @if comment.viewer_did_author {
            span style=(LABEL_STYLE) { "Author" }
        }
    }
}

fn render_actions_menu(
    viewer: &Viewer,
    comment: &Comment,
    copy_link_value: &str,
    actions: ActionsMenu,
) -> Markup {
    let menu_id = comment_actions_menu_id(comment);
    let open = actions.is_open();

    html! {
        div style="position:relative;display:inline-block" {
            button
                type="button"
                aria-label="Open comment options"
                aria-haspopup="true"
                aria-expanded=(open)
                aria-controls=(menu_id)
                data-comment-actions-toggle=(menu_id)
                style="margin-left:4px;padding:4px 8px;border:0;border-radius:6px;background:transparent;color:#57606a;cursor:pointer"
            {
                (PreEscaped(KEBAB_ICON))
            }
            ul
                id=(menu_id)
                role="menu"
                aria-label="Comment options menu"
                hidden[!open]
                style={
                    "position:absolute;right:0;z-index:10;min-width:192px;margin:4px 0 0;padding:0;list-style:none;background:#ffffff;border:"
                    (BORDER)
                    ";border-radius:6px;box-shadow:0 8px 24px rgba(140,149,159,0.2)"
                }
            {
                @for item in actions_menu::visible_actions(viewer) {
                    @match item {
                        MenuItem::CopyLink => {
                            li role="none" {
                                button
                                    type="button"
                                    role="menuitem"
                                    aria-label="Copy comment link"
                                    data-clipboard-value=(copy_link_value)
                                    data-comment-actions-close=(menu_id)
                                    style=(MENU_ITEM_STYLE)
                                {
                                    "Copy link"
                                }
                            }
                        }
                        MenuItem::Divider => {
                            li role="separator" aria-hidden="true" style={ "height:0;margin:0;border-top:" (BORDER) } {}
                        }
                        MenuItem::ViewInStafftools => {
                            li role="none" {
                                a
                                    role="menuitem"
                                    aria-label="View in Stafftools link"
                                    href=(comment.stafftools_url)
                                    style=(MENU_ITEM_STYLE)
                                {
                                    "View in Stafftools"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use linereview_comment_models::{
        CommentAuthor, CommentRepository, RepositoryOwner, SafeHtml,
    };

    use super::*;
    use crate::clipboard::MemoryClipboard;

    fn test_comment(viewer_did_author: bool) -> Comment {
        Comment {
            id: 42,
            author: CommentAuthor {
                login: "monalisa".to_string(),
                avatar_url: "https://avatars.example.com/u/1".to_string(),
                url: "https://github.com/monalisa".to_string(),
            },
            repository: CommentRepository {
                owner: RepositoryOwner {
                    login: "octo-org".to_string(),
                },
            },
            is_minimized: false,
            path: "src/lib.rs".to_string(),
            body_html: SafeHtml::from_trusted("<p>hello</p>"),
            current_diff_resource_path: "/octo-org/hello/pull/7/files#r42".to_string(),
            viewer_did_author,
            stafftools_url: "/stafftools/comments/42".to_string(),
            viewer_relationship: "COLLABORATOR".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap(),
        }
    }

    fn test_box(is_site_admin: bool, diff_view: DiffView, viewer_did_author: bool) -> CommentBox {
        CommentBox::new(
            Viewer::new(is_site_admin, diff_view),
            test_comment(viewer_did_author),
            Origin::parse("https://github.com").unwrap(),
        )
    }

    fn render(comment_box: &CommentBox) -> String {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        comment_box.render_with(&Ago::at(now)).into_string()
    }

    #[test]
    fn test_column_span() {
        assert_eq!(column_span(&DiffView::Split), 2);
        assert_eq!(column_span(&DiffView::Unified), 3);
        assert_eq!(column_span(&DiffView::Other("inline".to_string())), 3);
        assert_eq!(column_span(&DiffView::from("Split".to_string())), 3);
    }

    #[test]
    fn test_unified_non_admin_non_author() {
        let html = render(&test_box(false, DiffView::Unified, false));

        assert!(html.contains(r#"colspan="3""#));
        assert!(!html.contains(">Author</span>"));
        assert!(!html.contains("View in Stafftools"));
        assert!(!html.contains(r#"role="separator""#));
        assert!(html.contains("Copy link"));
    }

    #[test]
    fn test_split_admin_author() {
        let html = render(&test_box(true, DiffView::Split, true));

        assert!(html.contains(r#"colspan="2""#));
        assert!(html.contains(">Author</span>"));

        let divider = html.find(r#"role="separator""#).unwrap();
        let stafftools = html.find("View in Stafftools").unwrap();
        let copy_link = html.find("Copy link").unwrap();
        assert!(copy_link < divider);
        assert!(divider < stafftools);
        assert!(html.contains(r#"href="/stafftools/comments/42""#));
    }

    #[test]
    fn test_header_links() {
        let html = render(&test_box(false, DiffView::Unified, false));

        assert!(html.contains(r#"href="https://github.com/monalisa""#));
        assert!(html.contains(">monalisa</a>"));
        assert!(html.contains(r#"href="/octo-org/hello/pull/7/files#r42""#));
        assert!(html.contains(r#"src="https://avatars.example.com/u/1""#));
        assert!(html.contains(r#"width="24""#));
        assert!(html.contains(">3 hours ago</time>"));
        assert!(html.contains(r#"datetime="2024-06-15T09:00:00+00:00""#));
    }

    #[test]
    fn test_relationship_label_is_lower_cased_and_styled() {
        let html = render(&test_box(false, DiffView::Unified, false));

        assert!(html.contains(">collaborator</span>"));
        assert!(!html.contains("COLLABORATOR"));
        assert!(html.contains("text-transform:capitalize"));
    }

    #[test]
    fn test_body_html_is_rendered_verbatim() {
        let html = render(&test_box(false, DiffView::Unified, false));

        assert!(html.contains(
            r#"<div data-testid="Comment body html for comment 42"><p>hello</p></div>"#
        ));
        assert!(!html.contains("&lt;p&gt;"));
    }

    #[test]
    fn test_dom_ids_are_derived_from_comment_id() {
        let comment_box = test_box(false, DiffView::Unified, false);
        let comment = comment_box.comment();

        assert_eq!(comment_id(comment), "comment-42");
        assert_eq!(comment_actions_menu_id(comment), "comment-42-actions");
        assert_eq!(
            comment_body_test_id(comment),
            "Comment body html for comment 42"
        );

        let html = render(&comment_box);
        assert!(html.contains(r#"id="comment-42""#));
        assert!(html.contains(r#"aria-controls="comment-42-actions""#));
    }

    #[test]
    fn test_menu_is_hidden_until_toggled() {
        let mut comment_box = test_box(false, DiffView::Unified, false);

        assert!(!comment_box.is_actions_open());
        let html = render(&comment_box);
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"aria-label="Comment options menu" hidden"#));

        comment_box.toggle_actions();
        assert!(comment_box.is_actions_open());
        let html = render(&comment_box);
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(!html.contains(r#"aria-label="Comment options menu" hidden"#));

        comment_box.toggle_actions();
        assert!(!comment_box.is_actions_open());
    }

    #[test]
    fn test_dismissal_closes_menu() {
        let mut comment_box = test_box(false, DiffView::Unified, false);

        comment_box.set_actions_open(true);
        assert!(comment_box.is_actions_open());
        comment_box.close_actions();
        assert!(!comment_box.is_actions_open());
    }

    #[test_log::test]
    fn test_copy_link_writes_origin_and_path_and_closes() {
        let mut comment_box = test_box(false, DiffView::Unified, false);
        let mut clipboard = MemoryClipboard::new();

        comment_box.toggle_actions();
        comment_box.copy_link(&mut clipboard);

        assert_eq!(
            clipboard.contents(),
            Some("https://github.com/octo-org/hello/pull/7/files#r42")
        );
        assert!(!comment_box.is_actions_open());
    }

    #[test]
    fn test_copy_link_value_is_in_markup() {
        let html = render(&test_box(false, DiffView::Unified, false));

        assert!(html.contains(
            r#"data-clipboard-value="https://github.com/octo-org/hello/pull/7/files#r42""#
        ));
    }
}
