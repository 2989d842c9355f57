//! Prelude module for convenient imports.
//!
//! ```ignore
//! use drivepath::prelude::*;
//! ```

pub use crate::adapters::{InMemoryDrive, RestDriveClient};
pub use crate::error::DriveError;
pub use crate::models::{DriveFile, FileList, FILE_FIELDS, FOLDER_MIME_TYPE};
pub use crate::query::Query;
pub use crate::resolver::{FolderResolver, ResolverOptions};
pub use crate::traits::DriveApi;
