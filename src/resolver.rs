//! Folder lookup, tree search, and path resolution.
//!
//! [`FolderResolver`] wraps any [`DriveApi`] implementation with three
//! conveniences:
//!
//! - [`get_folder_by_id`](FolderResolver::get_folder_by_id) - fetch an
//!   entry's metadata by id
//! - [`find_folder_containing`](FolderResolver::find_folder_containing) -
//!   pre-order search of a folder tree for a name substring
//! - [`folder_id_by_path`](FolderResolver::folder_id_by_path) - walk a
//!   slash-separated path down parent/child links
//!
//! All three are stateless pass-throughs over the injected client: nothing
//! is cached across calls, queries run one at a time, and API faults
//! propagate to the caller untranslated.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::DriveError;
use crate::models::DriveFile;
use crate::query::Query;
use crate::traits::DriveApi;

/// Tuning knobs for tree traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Follow `next_page_token` when listing a directory level, so levels
    /// with more children than one response page are fully visited. Disable
    /// to read only the first page per level.
    pub follow_pages: bool,
    /// Track visited folder ids during [`find_folder_containing`] so a
    /// malformed remote graph with a parent/child cycle cannot cause an
    /// endless walk. Disable to skip the bookkeeping when the graph is known
    /// to be acyclic.
    ///
    /// [`find_folder_containing`]: FolderResolver::find_folder_containing
    pub detect_cycles: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            follow_pages: true,
            detect_cycles: true,
        }
    }
}

/// Folder-tree operations over an injected Drive client.
///
/// # Example
///
/// ```ignore
/// use drivepath::adapters::RestDriveClient;
/// use drivepath::resolver::FolderResolver;
///
/// let client = RestDriveClient::new().with_auth("ya29.token");
/// let resolver = FolderResolver::new(client);
/// let id = resolver.folder_id_by_path("/docs/reports/", "root").await?;
/// ```
#[derive(Debug, Clone)]
pub struct FolderResolver<C> {
    api: C,
    options: ResolverOptions,
}

impl<C: DriveApi> FolderResolver<C> {
    /// Create a resolver with default options.
    pub fn new(api: C) -> Self {
        Self::with_options(api, ResolverOptions::default())
    }

    /// Create a resolver with explicit options.
    pub fn with_options(api: C, options: ResolverOptions) -> Self {
        Self { api, options }
    }

    /// Fetch an entry's metadata by id.
    ///
    /// Returns the entry verbatim if found, `None` when the API reports no
    /// such entry. "Not found" and "no permission" are indistinguishable;
    /// transport and quota faults propagate as errors.
    pub async fn get_folder_by_id(&self, id: &str) -> Result<Option<DriveFile>, DriveError> {
        self.api.get_file(id).await
    }

    /// Find the first folder under `parent_folder_id` whose name contains
    /// `search_string`.
    ///
    /// The tree is walked in pre-order: at each visited folder the matching
    /// child folders are queried first, and the first match in server order
    /// is returned before any descent. Only when a level has no match are
    /// its child folders listed and explored, in server order, returning on
    /// the first hit. `None` means the whole tree was exhausted.
    ///
    /// An empty `search_string` is not special-cased: under substring
    /// semantics every name contains it, so the first child folder of the
    /// start folder wins.
    pub async fn find_folder_containing(
        &self,
        parent_folder_id: &str,
        search_string: &str,
    ) -> Result<Option<DriveFile>, DriveError> {
        let mut stack = vec![parent_folder_id.to_string()];
        let mut visited: HashSet<String> = HashSet::new();

        while let Some(folder_id) = stack.pop() {
            if self.options.detect_cycles && !visited.insert(folder_id.clone()) {
                debug!("already visited {folder_id}, skipping");
                continue;
            }

            let matches = self
                .list_level(
                    &Query::new()
                        .in_parent(&folder_id)
                        .folders_only()
                        .name_contains(search_string),
                )
                .await?;
            if let Some(first) = matches.into_iter().next() {
                return Ok(Some(first));
            }

            let children = self
                .list_level(&Query::new().in_parent(&folder_id).folders_only())
                .await?;
            // Reversed so the server's first child is popped next, giving
            // depth-first pre-order.
            for child in children.into_iter().rev() {
                stack.push(child.id);
            }
        }

        Ok(None)
    }

    /// Resolve a slash-separated path of folder names to a folder id,
    /// starting from `parent_folder_id`.
    ///
    /// Leading, trailing, and repeated slashes are collapsed, so
    /// `//a//b/` resolves like `a/b`. Each segment must name a non-trashed
    /// child folder of the previous one; among duplicate same-named siblings
    /// the server's first result wins. Segment lookups honor
    /// [`ResolverOptions::follow_pages`], so a segment whose folder sits on
    /// a later response page is still found. The first missing segment is
    /// logged and ends the walk with `None`. An empty path (after
    /// normalization) returns `parent_folder_id` unchanged.
    pub async fn folder_id_by_path(
        &self,
        path: &str,
        parent_folder_id: &str,
    ) -> Result<Option<String>, DriveError> {
        let mut current_parent_id = parent_folder_id.to_string();

        for segment in segments(path) {
            let found = self
                .list_level(
                    &Query::new()
                        .in_parent(&current_parent_id)
                        .folders_only()
                        .name_equals(segment)
                        .not_trashed(),
                )
                .await?;

            match found.into_iter().next() {
                Some(folder) => current_parent_id = folder.id,
                None => {
                    warn!("folder not found: {segment}");
                    return Ok(None);
                }
            }
        }

        Ok(Some(current_parent_id))
    }

    /// List everything matching `query`, following page tokens when
    /// configured.
    async fn list_level(&self, query: &Query) -> Result<Vec<DriveFile>, DriveError> {
        let mut page = self.api.list_files(query, None).await?;
        let mut files = std::mem::take(&mut page.files);

        if self.options.follow_pages {
            let mut token = page.next_page_token;
            while let Some(page_token) = token {
                let mut next = self.api.list_files(query, Some(&page_token)).await?;
                files.append(&mut next.files);
                token = next.next_page_token;
            }
        }

        Ok(files)
    }
}

/// Path segments after stripping empty pieces.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
