//! Static route table for history-based navigation.
//!
//! Routes are declared as a tree of [`RouteEntry`] values (layouts with
//! children), validated once at startup, and flattened into a lookup table.
//! Resolution is an exact match on the normalized path; there are no
//! parameters and no wildcards, so ordering never matters.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::Page;

// ============================================================================
// Route Entries
// ============================================================================

/// One node of the declared route tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path relative to the parent entry. Empty for index entries.
    pub path: String,
    /// Page mounted when this entry matches. `None` for pure layouts.
    pub page: Option<Page>,
    /// Whether this entry matches its parent's path exactly.
    pub index: bool,
    /// Nested entries, in declaration order.
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    /// A layout entry contributing only a path prefix.
    pub fn layout(path: impl Into<String>, children: Vec<RouteEntry>) -> Self {
        Self {
            path: path.into(),
            page: None,
            index: false,
            children,
        }
    }

    /// A leaf entry mounting `page` at `path`.
    pub fn page(path: impl Into<String>, page: Page) -> Self {
        Self {
            path: path.into(),
            page: Some(page),
            index: false,
            children: Vec::new(),
        }
    }

    /// An index entry mounting `page` at its parent's path.
    pub fn index(page: Page) -> Self {
        Self {
            path: String::new(),
            page: Some(page),
            index: true,
            children: Vec::new(),
        }
    }

    /// Sibling-uniqueness key: lowercase path without surrounding slashes.
    fn key(&self) -> String {
        self.path.trim_matches('/').to_ascii_lowercase()
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Reasons a declared route table is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    /// No entry mounts a page.
    #[error("route table has no pages")]
    Empty,
    /// Two entries resolve to the same path.
    #[error("duplicate route path '{0}'")]
    DuplicatePath(String),
    /// More than one index entry under the same parent.
    #[error("more than one index route under '{0}'")]
    DuplicateIndex(String),
    /// A path segment that the router cannot match literally.
    #[error("unsupported segment '{segment}' in route path '{path}'")]
    UnsupportedSegment { path: String, segment: String },
}

// ============================================================================
// Route Table
// ============================================================================

/// Result of resolving a location against the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The location matched exactly one page.
    Matched(Page),
    /// No entry matches; the error page is shown.
    NotFound,
}

/// Validated, flattened route table.
#[derive(Clone, Debug)]
pub struct RouteTable {
    /// Normalized path -> page.
    routes: HashMap<String, Page>,
    /// Declared paths in declaration order, for display and iteration.
    order: Vec<(String, Page)>,
}

impl RouteTable {
    /// Validates `entries` and builds the lookup table.
    pub fn new(entries: &[RouteEntry]) -> Result<Self, RouteTableError> {
        let mut table = Self {
            routes: HashMap::new(),
            order: Vec::new(),
        };
        table.insert_siblings("/", entries)?;

        if table.order.is_empty() {
            return Err(RouteTableError::Empty);
        }
        Ok(table)
    }

    fn insert_siblings(
        &mut self,
        parent: &str,
        entries: &[RouteEntry],
    ) -> Result<(), RouteTableError> {
        let mut seen = HashSet::new();
        let mut has_index = false;

        for entry in entries {
            if entry.index {
                if has_index {
                    return Err(RouteTableError::DuplicateIndex(parent.to_string()));
                }
                has_index = true;
            } else if !seen.insert(entry.key()) {
                return Err(RouteTableError::DuplicatePath(join_path(parent, &entry.path)));
            }

            validate_segments(&entry.path)?;
            let full = join_path(parent, &entry.path);

            if let Some(page) = entry.page {
                let key = normalize_location(&full);
                if self.routes.insert(key, page).is_some() {
                    return Err(RouteTableError::DuplicatePath(full));
                }
                self.order.push((full.clone(), page));
            }

            self.insert_siblings(&full, &entry.children)?;
        }
        Ok(())
    }

    /// Resolves a location (`pathname`, optionally with query or fragment).
    pub fn resolve(&self, location: &str) -> Resolution {
        match self.routes.get(&normalize_location(location)) {
            Some(page) => Resolution::Matched(*page),
            None => Resolution::NotFound,
        }
    }

    /// Declared `(path, page)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Page)> {
        self.order.iter().map(|(path, page)| (path.as_str(), *page))
    }
}

/// Rejects segments the literal matcher cannot honor.
fn validate_segments(path: &str) -> Result<(), RouteTableError> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Ok(());
    }

    for segment in trimmed.split('/') {
        let unsupported = segment.is_empty()
            || segment.starts_with(':')
            || segment.contains(['*', '?', '#']);
        if unsupported {
            return Err(RouteTableError::UnsupportedSegment {
                path: path.to_string(),
                segment: segment.to_string(),
            });
        }
    }
    Ok(())
}

/// Joins a parent path and a relative child path into an absolute path.
fn join_path(parent: &str, child: &str) -> String {
    let parent = parent.trim_end_matches('/');
    let child = child.trim_matches('/');
    match (parent.is_empty(), child.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{}", child),
        (false, true) => parent.to_string(),
        (false, false) => format!("{}/{}", parent, child),
    }
}

/// Normalizes a location for matching.
///
/// Drops the query and fragment, collapses leading and trailing slashes,
/// percent-decodes each segment and lowercases ASCII letters. A segment that
/// does not decode to UTF-8 is kept as written.
pub fn normalize_location(location: &str) -> String {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = location[..end].trim_matches('/');

    let segments: Vec<Cow<'_, str>> = path
        .split('/')
        .map(|segment| urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment)))
        .collect();

    format!("/{}", segments.join("/")).to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{self, paths};

    fn app_table() -> RouteTable {
        RouteTable::new(&config::route_entries()).expect("shipped table is valid")
    }

    #[test]
    fn test_shipped_table_resolves_every_page() {
        let table = app_table();
        assert_eq!(table.entries().count(), Page::ALL.len());

        let expected = [
            (paths::HOME, Page::Home),
            (paths::ACCOUNT, Page::Account),
            (paths::DELETE_ACCOUNT, Page::DeleteAccount),
            (paths::SIGN_OUT, Page::SignOut),
            (paths::AUTH_CALLBACK, Page::AuthCallback),
            (paths::VERIFY_SUBSCRIPTION, Page::VerifySubscription),
        ];
        for (path, page) in expected {
            assert_eq!(table.resolve(path), Resolution::Matched(page), "{path}");
        }
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        let table = app_table();
        assert_eq!(table.resolve("/nope"), Resolution::NotFound);
        assert_eq!(table.resolve("/saintspace"), Resolution::NotFound);
        assert_eq!(table.resolve("/saintspace/universe"), Resolution::NotFound);
        assert_eq!(
            table.resolve("/saintspace/universe/account/delete/now"),
            Resolution::NotFound
        );
    }

    #[test]
    fn test_location_variants_resolve_alike() {
        let table = app_table();
        let account = Resolution::Matched(Page::Account);

        assert_eq!(table.resolve("/saintspace/universe/account/"), account);
        assert_eq!(table.resolve("/saintspace/universe/account//"), account);
        assert_eq!(table.resolve("/saintspace/universe/%61ccount"), account);
        assert_eq!(table.resolve("/saintspace/universe/%41ccount/"), account);
        assert_eq!(table.resolve("/saintspace/universe/account?tab=1"), account);
        assert_eq!(table.resolve("/saintspace/universe/account#top"), account);
        assert_eq!(table.resolve("/SaintSpace/Universe/Account"), account);
        assert_eq!(table.resolve(""), Resolution::Matched(Page::Home));
        assert_eq!(table.resolve("/?code=abc"), Resolution::Matched(Page::Home));
        assert_eq!(table.resolve("//"), Resolution::Matched(Page::Home));
        assert_eq!(table.resolve("///"), Resolution::Matched(Page::Home));
    }

    #[test]
    fn test_entries_keep_declaration_order() {
        let table = app_table();
        let pages: Vec<Page> = table.entries().map(|(_, page)| page).collect();
        assert_eq!(pages, Page::ALL.to_vec());

        let (path, _) = table.entries().nth(1).unwrap();
        assert_eq!(path, paths::ACCOUNT);
    }

    #[test]
    fn test_rejects_duplicate_siblings() {
        let entries = vec![RouteEntry::layout(
            "/",
            vec![
                RouteEntry::page("a", Page::Account),
                RouteEntry::page("A/", Page::SignOut),
            ],
        )];
        assert_eq!(
            RouteTable::new(&entries).unwrap_err(),
            RouteTableError::DuplicatePath("/A".to_string())
        );
    }

    #[test]
    fn test_rejects_duplicates_after_flattening() {
        let entries = vec![RouteEntry::layout(
            "/",
            vec![
                RouteEntry::page("a/b", Page::Account),
                RouteEntry::layout("a", vec![RouteEntry::page("b", Page::SignOut)]),
            ],
        )];
        assert_eq!(
            RouteTable::new(&entries).unwrap_err(),
            RouteTableError::DuplicatePath("/a/b".to_string())
        );
    }

    #[test]
    fn test_rejects_second_index() {
        let entries = vec![RouteEntry::layout(
            "/",
            vec![RouteEntry::index(Page::Home), RouteEntry::index(Page::Account)],
        )];
        assert_eq!(
            RouteTable::new(&entries).unwrap_err(),
            RouteTableError::DuplicateIndex("/".to_string())
        );
    }

    #[test]
    fn test_rejects_dynamic_segments() {
        for path in ["users/:id", "files/*", "a//b", "a?b"] {
            let entries = vec![RouteEntry::page(path, Page::Account)];
            assert!(
                matches!(
                    RouteTable::new(&entries),
                    Err(RouteTableError::UnsupportedSegment { .. })
                ),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_empty_table() {
        assert_eq!(RouteTable::new(&[]).unwrap_err(), RouteTableError::Empty);
        let layout_only = vec![RouteEntry::layout("/", Vec::new())];
        assert_eq!(
            RouteTable::new(&layout_only).unwrap_err(),
            RouteTableError::Empty
        );
    }

    #[test]
    fn test_error_messages_name_the_path() {
        let entries = vec![RouteEntry::page("users/:id", Page::Account)];
        let err = RouteTable::new(&entries).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported segment ':id' in route path 'users/:id'"
        );
        assert_eq!(
            RouteTableError::DuplicateIndex("/".to_string()).to_string(),
            "more than one index route under '/'"
        );
    }

    #[test]
    fn test_normalize_location() {
        assert_eq!(normalize_location(""), "/");
        assert_eq!(normalize_location("/"), "/");
        assert_eq!(normalize_location("/A/B/"), "/a/b");
        assert_eq!(normalize_location("a/b?x=1#y"), "/a/b");
        assert_eq!(normalize_location("/a/b///"), "/a/b");
        assert_eq!(normalize_location("/verify%2Dsubscription"), "/verify-subscription");
        assert_eq!(normalize_location("/bad%FF"), "/bad%ff");
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/", ""), "/");
        assert_eq!(join_path("/", "a/b"), "/a/b");
        assert_eq!(join_path("/a", "b/"), "/a/b");
        assert_eq!(join_path("/a", ""), "/a");
    }
}
