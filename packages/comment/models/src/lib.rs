#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

pub mod comment;
pub mod html;
pub mod viewer;

pub use comment::{Comment, CommentAuthor, CommentRepository, RepositoryOwner};
pub use html::SafeHtml;
pub use viewer::{DiffView, Viewer};
