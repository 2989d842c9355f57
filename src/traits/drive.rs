//! Drive API trait abstraction.
//!
//! Provides a trait-based abstraction over the Drive files API, enabling
//! dependency injection and mocking in tests.

use async_trait::async_trait;

use crate::error::DriveError;
use crate::models::{DriveFile, FileList};
use crate::query::Query;

/// Trait for Drive files API operations.
///
/// This is the only boundary the resolver has. Implementations include the
/// production reqwest-based client and an in-memory double for tests.
///
/// Contract: every lookup must request cross-shared-drive visibility
/// (`supportsAllDrives`, and `includeItemsFromAllDrives` on listings) —
/// omitting those flags silently hides valid results in shared-drive
/// deployments.
///
/// # Example
///
/// ```ignore
/// use drivepath::traits::DriveApi;
/// use drivepath::query::Query;
///
/// async fn child_count<C: DriveApi>(api: &C, folder_id: &str) -> usize {
///     let query = Query::new().in_parent(folder_id);
///     api.list_files(&query, None).await.map(|l| l.files.len()).unwrap_or(0)
/// }
/// ```
#[async_trait]
pub trait DriveApi: Send + Sync {
    /// Fetch a single entry by id.
    ///
    /// Returns `Ok(None)` when the entry does not exist or is not visible to
    /// the caller; the two cases are indistinguishable.
    async fn get_file(&self, id: &str) -> Result<Option<DriveFile>, DriveError>;

    /// List entries matching a query, one page at a time.
    ///
    /// `page_token` is `None` for the first page; pass the previous page's
    /// `next_page_token` to continue. Result ordering within a page is the
    /// server's default and is otherwise unspecified.
    async fn list_files(
        &self,
        query: &Query,
        page_token: Option<&str>,
    ) -> Result<FileList, DriveError>;
}
