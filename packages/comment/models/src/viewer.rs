use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Capabilities of the user looking at the diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    pub is_site_admin: bool,
    pub diff_view: DiffView,
}

impl Viewer {
    #[must_use]
    pub const fn new(is_site_admin: bool, diff_view: DiffView) -> Self {
        Self {
            is_site_admin,
            diff_view,
        }
    }
}

/// How the surrounding diff table is laid out.
///
/// The data layer sends this as a free-form string. Only `"split"` changes
/// layout, so unrecognized modes are kept verbatim in [`DiffView::Other`]
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, EnumString, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DiffView {
    #[default]
    #[strum(serialize = "unified")]
    Unified,
    #[strum(serialize = "split")]
    Split,
    #[strum(default)]
    Other(String),
}

impl DiffView {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unified => "unified",
            Self::Split => "split",
            Self::Other(mode) => mode,
        }
    }

    #[must_use]
    pub const fn is_split(&self) -> bool {
        matches!(self, Self::Split)
    }
}

impl std::fmt::Display for DiffView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DiffView {
    fn from(value: String) -> Self {
        Self::from_str(&value).unwrap_or(Self::Other(value))
    }
}

impl From<DiffView> for String {
    fn from(value: DiffView) -> Self {
        match value {
            DiffView::Other(mode) => mode,
            known => known.as_str().to_string(),
        }
    }
}
