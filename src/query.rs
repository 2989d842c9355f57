//! Structured builder for the Drive files.list query language.
//!
//! The Drive API filters listings with a query string such as
//! `'root' in parents and mimeType = 'application/vnd.google-apps.folder'
//! and trashed = false`. Building that string by hand means interpolating
//! user-supplied folder names into quoted literals; [`Query`] keeps the
//! clauses structured until render time and escapes quoting characters, so a
//! folder named `bob's files` cannot break the filter.

use crate::models::{DriveFile, FOLDER_MIME_TYPE};

/// A conjunction of files.list filter clauses.
///
/// Clauses are combined with `and` and rendered in a fixed order: parent,
/// MIME type, `name contains`, `name =`, `trashed`.
///
/// # Example
///
/// ```ignore
/// use drivepath::query::Query;
///
/// let q = Query::new().in_parent("root").folders_only().name_equals("docs");
/// assert_eq!(
///     q.to_query_string(),
///     "'root' in parents and mimeType = 'application/vnd.google-apps.folder' and name = 'docs'"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    parent: Option<String>,
    folders_only: bool,
    name_contains: Option<String>,
    name_equals: Option<String>,
    trashed: Option<bool>,
}

impl Query {
    /// Create an empty query matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to direct children of the given folder.
    pub fn in_parent(mut self, folder_id: &str) -> Self {
        self.parent = Some(folder_id.to_string());
        self
    }

    /// Restrict results to folders.
    pub fn folders_only(mut self) -> Self {
        self.folders_only = true;
        self
    }

    /// Restrict results to entries whose name contains the given substring.
    ///
    /// Substring semantics are the server's; an empty needle matches every
    /// name.
    pub fn name_contains(mut self, needle: &str) -> Self {
        self.name_contains = Some(needle.to_string());
        self
    }

    /// Restrict results to entries named exactly `name`.
    pub fn name_equals(mut self, name: &str) -> Self {
        self.name_equals = Some(name.to_string());
        self
    }

    /// Exclude soft-deleted entries.
    pub fn not_trashed(mut self) -> Self {
        self.trashed = Some(false);
        self
    }

    /// Render the query string sent as the `q` parameter.
    pub fn to_query_string(&self) -> String {
        let mut clauses = Vec::new();
        if let Some(ref parent) = self.parent {
            clauses.push(format!("'{}' in parents", escape(parent)));
        }
        if self.folders_only {
            clauses.push(format!("mimeType = '{FOLDER_MIME_TYPE}'"));
        }
        if let Some(ref needle) = self.name_contains {
            clauses.push(format!("name contains '{}'", escape(needle)));
        }
        if let Some(ref name) = self.name_equals {
            clauses.push(format!("name = '{}'", escape(name)));
        }
        if let Some(trashed) = self.trashed {
            clauses.push(format!("trashed = {trashed}"));
        }
        clauses.join(" and ")
    }

    /// Evaluate the query against a single entry.
    ///
    /// This mirrors the server-side filter semantics locally and backs the
    /// in-memory test double. Case sensitivity follows Rust's `str::contains`
    /// here; the live API applies its own collation.
    pub fn matches(&self, file: &DriveFile) -> bool {
        if let Some(ref parent) = self.parent {
            if !file.parents.iter().any(|p| p == parent) {
                return false;
            }
        }
        if self.folders_only && !file.is_folder() {
            return false;
        }
        if let Some(ref needle) = self.name_contains {
            if !file.name.contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(ref name) = self.name_equals {
            if &file.name != name {
                return false;
            }
        }
        if let Some(trashed) = self.trashed {
            if file.trashed != trashed {
                return false;
            }
        }
        true
    }
}

/// Escape a string for inclusion in a single-quoted query literal.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
