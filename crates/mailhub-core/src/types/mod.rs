//! Shared domain types.

pub mod id;

pub use id::{AccountId, FolderId};
