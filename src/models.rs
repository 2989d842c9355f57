//! Wire types for the Drive v3 files API.

use serde::{Deserialize, Serialize};

/// MIME type the Drive API uses to mark an entry as a folder.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Field projection requested on every list call.
///
/// Keeping the projection narrow keeps list responses small; everything the
/// resolver looks at is included here.
pub const FILE_FIELDS: &str = "nextPageToken, files(id, name, mimeType, parents, trashed)";

/// A file or folder entry as returned by the Drive API.
///
/// Only the attributes the resolver uses are modeled; unknown fields in a
/// response are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// Opaque identifier, unique within the storage system.
    pub id: String,
    /// Display name. Not guaranteed unique among siblings.
    pub name: String,
    /// MIME type; [`FOLDER_MIME_TYPE`] marks a folder.
    #[serde(default)]
    pub mime_type: String,
    /// Parent folder ids. Normally a single entry.
    #[serde(default)]
    pub parents: Vec<String>,
    /// Soft-delete flag.
    #[serde(default)]
    pub trashed: bool,
}

impl DriveFile {
    /// Whether this entry is a folder.
    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME_TYPE
    }
}

/// One page of a files.list response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileList {
    #[serde(default)]
    pub files: Vec<DriveFile>,
    /// Token for the next page, absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}
