//! # mailhub-entity
//!
//! Domain entity models for MailHub, together with the persistence seams
//! they are stored through.

pub mod folder;

pub use folder::{CreateFolder, Folder, FolderStore};
