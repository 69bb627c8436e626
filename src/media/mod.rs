//! Media module for asset kinds and selection.

pub mod kind;
pub mod selector;

pub use kind::MediaKind;
pub use selector::{select_asset, SelectedAsset};
