//! Standalone HTML page hosting comment boxes, plus the browser-side half of
//! the actions menu (toggle, dismissal and clipboard copy).

use chrono::{DateTime, Utc};
use linereview_app_ui::{CommentBox, comment_box::column_span};
use linereview_comment_models::{
    Comment, CommentAuthor, CommentRepository, RepositoryOwner, SafeHtml,
};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const PAGE_CSS: &str = "body{margin:0;padding:24px;font-family:-apple-system,BlinkMacSystemFont,\"Segoe UI\",Helvetica,Arial,sans-serif;font-size:14px;color:#24292f;background:#ffffff}\
table{border-collapse:collapse;width:100%;max-width:980px;border:1px solid #d0d7de}\
td.num{width:1%;min-width:40px;padding:0 8px;color:#57606a;text-align:right;font-family:monospace;font-size:12px;user-select:none}\
td.code{padding:0 8px;font-family:monospace;font-size:12px;white-space:pre}\
tr.addition td{background:#e6ffec}";

/// Wires `data-comment-actions-toggle`, `data-comment-actions-close` and
/// `data-clipboard-value` attributes emitted by the comment box.
pub const CLIENT_SCRIPT: &str = r#"(() => {
  const toggles = (menuId) =>
    document.querySelectorAll(`[data-comment-actions-toggle="${menuId}"]`);
  const setOpen = (menuId, open) => {
    const menu = document.getElementById(menuId);
    if (!menu) return;
    menu.hidden = !open;
    toggles(menuId).forEach((t) => t.setAttribute("aria-expanded", String(open)));
  };
  const closeAll = () =>
    document
      .querySelectorAll('[data-comment-actions-toggle][aria-expanded="true"]')
      .forEach((t) => setOpen(t.dataset.commentActionsToggle, false));

  document.addEventListener("click", (event) => {
    const toggle = event.target.closest("[data-comment-actions-toggle]");
    if (toggle) {
      const menuId = toggle.dataset.commentActionsToggle;
      const menu = document.getElementById(menuId);
      closeAll();
      setOpen(menuId, menu ? menu.hidden : false);
      return;
    }
    const copy = event.target.closest("[data-clipboard-value]");
    if (copy) {
      if (navigator.clipboard) navigator.clipboard.writeText(copy.dataset.clipboardValue);
      setOpen(copy.dataset.commentActionsClose, false);
      return;
    }
    if (!event.target.closest('[role="menu"]')) closeAll();
  });
  document.addEventListener("keydown", (event) => {
    if (event.key === "Escape") closeAll();
  });
})();"#;

#[must_use]
pub fn page_shell(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (content) }
                script { (PreEscaped(CLIENT_SCRIPT)) }
            }
        }
    }
}

/// A small diff hunk with `comment_box` attached below its last line.
#[must_use]
pub fn render_diff_table(comment_box: &CommentBox) -> Markup {
    let comment = comment_box.comment();
    let split = column_span(&comment_box.viewer().diff_view) == 2;
    let lines = [
        (10, " ", "pub fn render(&self) -> Markup {"),
        (11, "+", "    self.render_with(&Ago::now())"),
        (12, " ", "}"),
    ];

    html! {
        p { code { (comment.path) } }
        table {
            tbody {
                @for (number, marker, code) in lines {
                    tr class=[(marker == "+").then_some("addition")] {
                        @if !split {
                            td class="num" { @if marker != "+" { (number) } }
                        }
                        td class="num" { (number) }
                        td class="code" { (marker) (code) }
                    }
                }
                (comment_box.render())
            }
        }
    }
}

/// Fixture comment shown on the preview page.
#[must_use]
pub fn sample_comment(viewer_did_author: bool, published_at: DateTime<Utc>) -> Comment {
    Comment {
        id: 1,
        author: CommentAuthor {
            login: "monalisa".to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/583231?v=4".to_string(),
            url: "https://github.com/monalisa".to_string(),
        },
        repository: CommentRepository {
            owner: RepositoryOwner {
                login: "octo-org".to_string(),
            },
        },
        is_minimized: false,
        path: "packages/app/ui/src/comment_box.rs".to_string(),
        body_html: SafeHtml::from_trusted(
            "<p>Could this take the formatter by reference so tests can pin <code>now</code>?</p>",
        ),
        current_diff_resource_path: "/octo-org/linereview/pull/7/files#r1".to_string(),
        viewer_did_author,
        stafftools_url: "/stafftools/repositories/octo-org/linereview/pull_request_review_comments/1"
            .to_string(),
        viewer_relationship: "MEMBER".to_string(),
        published_at,
    }
}
