#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

pub mod actions_menu;
pub mod clipboard;
pub mod comment_box;
pub mod origin;
pub mod relative_time;

pub use actions_menu::{ActionsMenu, CommentAction, MenuItem, Visibility};
pub use clipboard::{Clipboard, MemoryClipboard};
pub use comment_box::CommentBox;
pub use origin::{InvalidOriginError, Origin};
pub use relative_time::{Ago, RelativeTimeFormatter};
