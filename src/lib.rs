//! drivepath - folder-tree conveniences for the Google Drive v3 files API
//!
//! This library exposes a [`resolver::FolderResolver`] with three operations:
//! fetching a folder's metadata by id, searching a folder tree for the first
//! folder whose name contains a substring, and resolving a slash-separated
//! path to a folder id. The Drive API itself sits behind the
//! [`traits::DriveApi`] trait, so tests can swap the REST client for an
//! in-memory double.

pub mod adapters;
pub mod error;
pub mod models;
pub mod prelude;
pub mod query;
pub mod resolver;
pub mod traits;
