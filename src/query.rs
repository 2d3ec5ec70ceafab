//! Filter/sort/paginate derivation over a loaded collection.
//!
//! `derive` is a pure function: no side effects, identical output for
//! identical input, cheap enough to run on every render. Only a `Ready`
//! store produces a non-empty derived view.

use crate::models::Resource;
use crate::store::ResourceStore;

// ============================================================================
// QuerySpec
// ============================================================================

/// Status narrowing for a view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Keep every record.
    #[default]
    All,
    /// Keep records whose status equals the value (case-insensitive).
    Only(String),
}

/// Sort direction. Repeated clicks on the same key flip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Operator-controlled filter/sort/paginate parameters for one view.
///
/// Created fresh per view session, mutated by interaction, never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    /// Status narrowing.
    pub status_filter: StatusFilter,
    /// Free-text search over the resource's searchable fields.
    pub search: String,
    /// Field to sort by, `None` for server order.
    pub sort_key: Option<String>,
    /// Direction applied when `sort_key` is set.
    pub sort_direction: SortDirection,
    /// 1-based page number; out-of-range values clamp silently.
    pub page: usize,
    /// Records per page.
    pub page_size: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            status_filter: StatusFilter::All,
            search: String::new(),
            sort_key: None,
            sort_direction: SortDirection::Ascending,
            page: 1,
            page_size: 10,
        }
    }
}

impl QuerySpec {
    /// Create a spec with defaults (all statuses, empty search, page 1).
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrow to one status value.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status_filter = StatusFilter::Only(status.into());
        self
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Handle a click on a sort column header.
    ///
    /// Clicking a new key sorts ascending; clicking the current key flips
    /// the direction. Resets to the first page either way.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.sort_key.as_deref() == Some(key) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = Some(key.to_string());
            self.sort_direction = SortDirection::Ascending;
        }
        self.page = 1;
    }
}

// ============================================================================
// DerivedPage
// ============================================================================

/// The visible subset of a collection for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedPage<R: Resource> {
    /// Records on the clamped current page.
    pub page_items: Vec<R>,
    /// Records matching the filter and search, before pagination.
    pub total_count: usize,
    /// Page count; `0` when nothing matches.
    pub total_pages: usize,
    /// The page actually shown after clamping.
    pub page: usize,
}

impl<R: Resource> DerivedPage<R> {
    fn empty() -> Self {
        Self {
            page_items: Vec::new(),
            total_count: 0,
            total_pages: 0,
            page: 1,
        }
    }
}

// ============================================================================
// derive
// ============================================================================

/// Derive the visible page for a view.
///
/// Non-`Ready` stores yield an empty view. Filtering keeps records whose
/// status matches (or all), search is a case-insensitive substring match
/// over the resource's fixed searchable fields, sorting is stable with
/// ties keeping server order, and the page clamps into `[1, total_pages]`.
pub fn derive<R: Resource>(store: &ResourceStore<R>, spec: &QuerySpec) -> DerivedPage<R> {
    if !store.state().is_ready() {
        return DerivedPage::empty();
    }

    let needle = spec.search.trim().to_lowercase();
    let mut matches: Vec<&R> = store
        .records()
        .iter()
        .filter(|r| matches_status(*r, &spec.status_filter))
        .filter(|r| matches_search(*r, &needle))
        .collect();

    if let Some(key) = &spec.sort_key {
        // Vec::sort_by is stable, so equal keys keep server order.
        matches.sort_by(|a, b| {
            let ordering = match (a.sort_value(key), b.sort_value(key)) {
                (Some(va), Some(vb)) => va.compare(&vb),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            };
            match spec.sort_direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    let total_count = matches.len();
    let page_size = spec.page_size.max(1);
    let total_pages = total_count.div_ceil(page_size);
    let page = spec.page.clamp(1, total_pages.max(1));

    let start = (page - 1) * page_size;
    let page_items = matches
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    DerivedPage {
        page_items,
        total_count,
        total_pages,
        page,
    }
}

fn matches_status<R: Resource>(record: &R, filter: &StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(wanted) => record.status_or_default().eq_ignore_ascii_case(wanted),
    }
}

fn matches_search<R: Resource>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .search_haystack()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn user(id: &str, name: &str, email: &str, status: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    fn ready_store(records: Vec<User>) -> ResourceStore<User> {
        let mut store = ResourceStore::new();
        store.replace_all(records);
        store
    }

    #[test]
    fn test_non_ready_store_derives_empty() {
        let store: ResourceStore<User> = ResourceStore::new();
        let page = derive(&store, &QuerySpec::default());
        assert!(page.page_items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_status_filter_keeps_only_matching_records() {
        let store = ready_store(vec![
            user("1", "Ada", "ada@x.com", "active"),
            user("2", "Bob", "bob@x.com", "suspended"),
            user("3", "Cleo", "cleo@x.com", "active"),
        ]);
        let spec = QuerySpec::new().with_status("active");
        let page = derive(&store, &spec);

        assert_eq!(page.total_count, 2);
        assert!(page
            .page_items
            .iter()
            .all(|u| u.status.as_deref() == Some("active")));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let store = ready_store(vec![
            user("1", "Ada Lovelace", "ada@x.com", "active"),
            user("2", "Bob", "bob@x.com", "active"),
        ]);
        let spec = QuerySpec::new().with_search("LOVEL");
        let page = derive(&store, &spec);

        assert_eq!(page.total_count, 1);
        assert_eq!(page.page_items[0].id, "1");
    }

    #[test]
    fn test_search_matches_any_searchable_field() {
        let store = ready_store(vec![
            user("1", "Ada", "ada@example.com", "active"),
            user("2", "Bob", "bob@other.org", "active"),
        ]);
        let spec = QuerySpec::new().with_search("other.org");
        let page = derive(&store, &spec);
        assert_eq!(page.page_items[0].id, "2");
    }

    #[test]
    fn test_sort_flips_direction_on_second_toggle() {
        let store = ready_store(vec![
            user("1", "Cleo", "c@x.com", "active"),
            user("2", "ada", "a@x.com", "active"),
            user("3", "Bob", "b@x.com", "active"),
        ]);
        let mut spec = QuerySpec::new();

        spec.toggle_sort("name");
        let asc = derive(&store, &spec);
        let names: Vec<_> = asc.page_items.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["ada", "Bob", "Cleo"]);

        spec.toggle_sort("name");
        let desc = derive(&store, &spec);
        let names: Vec<_> = desc.page_items.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Cleo", "Bob", "ada"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let store = ready_store(vec![
            user("first", "Same", "1@x.com", "active"),
            user("second", "same", "2@x.com", "active"),
            user("third", "Same", "3@x.com", "active"),
        ]);
        let mut spec = QuerySpec::new();
        spec.toggle_sort("name");

        let page = derive(&store, &spec);
        let ids: Vec<_> = page.page_items.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);

        // Sorting again with identical inputs is bit-identical.
        assert_eq!(page, derive(&store, &spec));
    }

    #[test]
    fn test_pagination_splits_and_reports_totals() {
        let records: Vec<User> = (0..25)
            .map(|i| user(&format!("u{}", i), &format!("User {}", i), "", "active"))
            .collect();
        let store = ready_store(records);

        let mut spec = QuerySpec::new().with_page_size(10);
        spec.page = 3;
        let page = derive(&store, &spec);

        assert_eq!(page.page_items.len(), 5);
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_out_of_range_page_clamps_silently() {
        let store = ready_store(vec![user("1", "Ada", "", "active")]);

        let mut spec = QuerySpec::new().with_page_size(10);
        spec.page = 99;
        let page = derive(&store, &spec);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_items.len(), 1);

        spec.page = 0;
        let page = derive(&store, &spec);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_empty_match_set_has_zero_pages() {
        let store = ready_store(vec![user("1", "Ada", "", "active")]);
        let spec = QuerySpec::new().with_search("no such user");
        let page = derive(&store, &spec);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_count, 0);
        assert!(page.page_items.is_empty());
    }

    #[test]
    fn test_derive_is_idempotent() {
        let store = ready_store(vec![
            user("1", "Ada", "ada@x.com", "active"),
            user("2", "Bob", "bob@x.com", "suspended"),
        ]);
        let spec = QuerySpec::new().with_status("active").with_search("a");
        assert_eq!(derive(&store, &spec), derive(&store, &spec));
    }
}
