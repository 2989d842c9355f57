//! In-memory Drive double for testing.
//!
//! Holds a fixed file graph, evaluates [`Query`] filters locally, and
//! records every call so tests can verify traversal order and query shape
//! without network access.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::DriveError;
use crate::models::{DriveFile, FileList, FOLDER_MIME_TYPE};
use crate::query::Query;
use crate::traits::DriveApi;

/// A recorded API call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    /// A get-by-id lookup.
    Get { id: String },
    /// A listing, with the rendered query string and page token.
    List {
        query: String,
        page_token: Option<String>,
    },
}

/// In-memory [`DriveApi`] implementation.
///
/// Entries are returned in insertion order, which stands in for the server's
/// default ordering. An optional page size splits listings into pages joined
/// by numeric page tokens, for exercising pagination handling.
///
/// # Example
///
/// ```ignore
/// use drivepath::adapters::InMemoryDrive;
///
/// let drive = InMemoryDrive::new();
/// drive.add_folder("root", "My Drive", None);
/// drive.add_folder("A", "docs", Some("root"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDrive {
    files: Arc<Mutex<Vec<DriveFile>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    page_size: Arc<Mutex<Option<usize>>>,
}

impl InMemoryDrive {
    /// Create an empty drive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a folder entry and return a copy of it.
    pub fn add_folder(&self, id: &str, name: &str, parent: Option<&str>) -> DriveFile {
        let file = DriveFile {
            id: id.to_string(),
            name: name.to_string(),
            mime_type: FOLDER_MIME_TYPE.to_string(),
            parents: parent.map(|p| vec![p.to_string()]).unwrap_or_default(),
            trashed: false,
        };
        self.insert(file.clone());
        file
    }

    /// Insert an arbitrary entry (non-folder, trashed, multi-parent, ...).
    pub fn insert(&self, file: DriveFile) {
        self.files.lock().unwrap().push(file);
    }

    /// Split listings into pages of `size` entries. `None` disables paging.
    pub fn set_page_size(&self, size: Option<usize>) {
        *self.page_size.lock().unwrap() = size;
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the rendered query strings of recorded listings, in call order.
    pub fn list_queries(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::List { query, .. } => Some(query),
                RecordedCall::Get { .. } => None,
            })
            .collect()
    }

    /// Clear all recorded calls.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DriveApi for InMemoryDrive {
    async fn get_file(&self, id: &str) -> Result<Option<DriveFile>, DriveError> {
        self.record(RecordedCall::Get { id: id.to_string() });
        let files = self.files.lock().unwrap();
        Ok(files.iter().find(|f| f.id == id).cloned())
    }

    async fn list_files(
        &self,
        query: &Query,
        page_token: Option<&str>,
    ) -> Result<FileList, DriveError> {
        self.record(RecordedCall::List {
            query: query.to_query_string(),
            page_token: page_token.map(str::to_string),
        });

        let matched: Vec<DriveFile> = self
            .files
            .lock()
            .unwrap()
            .iter()
            .filter(|f| query.matches(f))
            .cloned()
            .collect();

        let page_size = *self.page_size.lock().unwrap();
        let Some(size) = page_size else {
            return Ok(FileList {
                files: matched,
                next_page_token: None,
            });
        };

        let start = page_token.and_then(|t| t.parse::<usize>().ok()).unwrap_or(0);
        let end = (start + size).min(matched.len());
        let next_page_token = (end < matched.len()).then(|| end.to_string());
        Ok(FileList {
            files: matched[start.min(end)..end].to_vec(),
            next_page_token,
        })
    }
}
