//! IMAP folder entity and its storage seam.

pub mod model;
pub mod store;

pub use model::{CreateFolder, Folder, names_equal};
pub use store::FolderStore;
