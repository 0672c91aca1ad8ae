//! The per-comment "..." menu: its open/closed state and the list of entries
//! it offers.

use linereview_comment_models::Viewer;

/// Open/closed state of a comment's actions menu. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActionsMenu {
    #[default]
    Closed,
    Open,
}

impl ActionsMenu {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    pub fn open(&mut self) {
        *self = Self::Open;
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn set_open(&mut self, open: bool) {
        *self = if open { Self::Open } else { Self::Closed };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    CopyLink,
    Divider,
    ViewInStafftools,
}

/// Capability a viewer needs for a menu entry to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Always,
    SiteAdmin,
}

impl Visibility {
    #[must_use]
    pub const fn is_satisfied_by(self, viewer: &Viewer) -> bool {
        match self {
            Self::Always => true,
            Self::SiteAdmin => viewer.is_site_admin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentAction {
    pub item: MenuItem,
    pub visible_if: Visibility,
}

pub const COMMENT_ACTIONS: &[CommentAction] = &[
    CommentAction {
        item: MenuItem::CopyLink,
        visible_if: Visibility::Always,
    },
    CommentAction {
        item: MenuItem::Divider,
        visible_if: Visibility::SiteAdmin,
    },
    CommentAction {
        item: MenuItem::ViewInStafftools,
        visible_if: Visibility::SiteAdmin,
    },
];

/// Menu entries `viewer` is allowed to see, in display order.
pub fn visible_actions(viewer: &Viewer) -> impl Iterator<Item = MenuItem> + '_ {
    COMMENT_ACTIONS
        .iter()
        .filter(|action| action.visible_if.is_satisfied_by(viewer))
        .map(|action| action.item)
}
