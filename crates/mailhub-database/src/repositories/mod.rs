//! Repository implementations for the MailHub entities.

pub mod folder;

pub use folder::FolderRepository;
