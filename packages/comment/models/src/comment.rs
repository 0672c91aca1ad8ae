use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::html::SafeHtml;

/// A review comment attached to a single diff line, as delivered by the
/// GraphQL data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub author: CommentAuthor,
    pub repository: CommentRepository,
    /// Arrives either as a JSON boolean or as `"true"`/`"false"`.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_minimized: bool,
    pub path: String,
    #[serde(rename = "bodyHTML")]
    pub body_html: SafeHtml,
    /// Deep link to the comment inside the diff view, relative to the site
    /// origin.
    pub current_diff_resource_path: String,
    pub viewer_did_author: bool,
    pub stafftools_url: String,
    pub viewer_relationship: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    pub login: String,
    pub avatar_url: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRepository {
    pub owner: RepositoryOwner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

impl Comment {
    /// Relationship label in the form it is displayed: lower-cased text,
    /// with capitalization left to styling.
    #[must_use]
    pub fn relationship_label(&self) -> String {
        self.viewer_relationship.to_lowercase()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Flag::deserialize(deserializer)? {
        Flag::Bool(flag) => Ok(flag),
        Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            _ => Err(de::Error::invalid_value(
                de::Unexpected::Str(&text),
                &"a boolean or \"true\"/\"false\"",
            )),
        },
    }
}
