//! List Query State
//!
//! Page, sort and filter for the task list, mirrored in the address bar.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::models::TaskStatus;

/// Sortable columns of the task table (backend `orderBy` values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Priority,
    Status,
    Due,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Priority => "priority",
            SortKey::Status => "status",
            SortKey::Due => "due",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortKey::Name),
            "priority" => Some(SortKey::Priority),
            "status" => Some(SortKey::Status),
            "due" => Some(SortKey::Due),
            _ => None,
        }
    }
}

/// One snapshot of the list query. Absent fields mean "no constraint".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub order_by: Option<SortKey>,
    pub status: Option<TaskStatus>,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState {
            page: 1,
            order_by: None,
            status: None,
        }
    }
}

impl QueryState {
    /// Parse a location search string, with or without the leading `?`.
    /// Malformed pages and unrecognized values degrade to the defaults.
    pub fn from_query_string(raw: &str) -> Self {
        let mut state = QueryState::default();
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        for pair in raw.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "page" => {
                    state.page = value.parse::<u32>().ok().filter(|p| *p >= 1).unwrap_or(1);
                }
                "orderBy" => state.order_by = SortKey::from_param(value),
                "status" => state.status = TaskStatus::from_param(value),
                _ => {}
            }
        }
        state
    }

    /// Canonical query string, no leading `?`. The first page and unset
    /// fields are omitted entirely, never written as empty values.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if self.page > 1 {
            pairs.push(format!("page={}", self.page));
        }
        if let Some(key) = self.order_by {
            pairs.push(format!("orderBy={}", key.as_str()));
        }
        if let Some(status) = self.status {
            pairs.push(format!("status={}", status.as_str()));
        }
        pairs.join("&")
    }
}

/// Reactive query state owned by the task list screen.
///
/// Every mutation touches exactly one field, writes the canonical string
/// to the address bar, then updates the signal, so the URL never lags
/// behind what the table shows.
#[derive(Clone, Copy)]
pub struct QueryStore {
    pub state: ReadSignal<QueryState>,
    set_state: WriteSignal<QueryState>,
}

impl QueryStore {
    /// Seed from the current location.
    pub fn mount() -> Self {
        let (state, set_state) = signal(current_location_state());
        QueryStore { state, set_state }
    }

    pub fn set_page(&self, page: u32) {
        let mut next = self.state.get_untracked();
        next.page = page.max(1);
        self.apply(next);
    }

    pub fn set_order_by(&self, key: SortKey) {
        let mut next = self.state.get_untracked();
        next.order_by = Some(key);
        self.apply(next);
    }

    /// `None` drops the filter key from the URL instead of writing `status=`.
    pub fn set_status(&self, status: Option<TaskStatus>) {
        let mut next = self.state.get_untracked();
        next.status = status;
        self.apply(next);
    }

    /// Re-read the location after back/forward navigation.
    pub fn resync(&self) {
        let parsed = current_location_state();
        if parsed != self.state.get_untracked() {
            self.set_state.set(parsed);
        }
    }

    fn apply(&self, next: QueryState) {
        if next == self.state.get_untracked() {
            return;
        }
        write_location(&next);
        self.set_state.set(next);
    }
}

fn current_location_state() -> QueryState {
    let Some(window) = web_sys::window() else {
        return QueryState::default();
    };
    match window.location().search() {
        Ok(search) => QueryState::from_query_string(&search),
        Err(_) => QueryState::default(),
    }
}

fn write_location(state: &QueryState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(pathname) = window.location().pathname() else {
        return;
    };
    let query = state.to_query_string();
    let url = if query.is_empty() {
        pathname
    } else {
        format!("{pathname}?{query}")
    };
    let result = window
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&url)));
    if let Err(err) = result {
        web_sys::console::warn_1(&format!("[QUERY] history write failed: {err:?}").into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = QueryState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.order_by, None);
        assert_eq!(state.status, None);
    }

    #[test]
    fn test_round_trip_all_fields() {
        let state = QueryState {
            page: 3,
            order_by: Some(SortKey::Priority),
            status: Some(TaskStatus::Done),
        };
        let qs = state.to_query_string();
        assert_eq!(qs, "page=3&orderBy=priority&status=done");
        assert_eq!(QueryState::from_query_string(&qs), state);
    }

    #[test]
    fn test_unset_fields_are_absent_not_empty() {
        let state = QueryState {
            page: 1,
            order_by: None,
            status: Some(TaskStatus::Open),
        };
        let qs = state.to_query_string();
        assert_eq!(qs, "status=open");
        assert!(!qs.contains("orderBy"));
        assert!(!qs.contains("page"));
    }

    #[test]
    fn test_first_page_is_omitted() {
        assert_eq!(QueryState::default().to_query_string(), "");
    }

    #[test]
    fn test_parse_accepts_leading_question_mark() {
        let state = QueryState::from_query_string("?page=2&orderBy=due");
        assert_eq!(state.page, 2);
        assert_eq!(state.order_by, Some(SortKey::Due));
    }

    #[test]
    fn test_malformed_page_falls_back_to_one() {
        assert_eq!(QueryState::from_query_string("page=abc").page, 1);
        assert_eq!(QueryState::from_query_string("page=0").page, 1);
        assert_eq!(QueryState::from_query_string("page=-2").page, 1);
        assert_eq!(QueryState::from_query_string("page=").page, 1);
    }

    #[test]
    fn test_unknown_values_mean_no_constraint() {
        let state = QueryState::from_query_string("orderBy=shoe&status=maybe");
        assert_eq!(state.order_by, None);
        assert_eq!(state.status, None);
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let state = QueryState::from_query_string("utm_source=mail&page=2&flag");
        assert_eq!(state.page, 2);
        assert_eq!(state.to_query_string(), "page=2");
    }

    #[test]
    fn test_sort_keys_round_trip() {
        for key in [SortKey::Name, SortKey::Priority, SortKey::Status, SortKey::Due] {
            assert_eq!(SortKey::from_param(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::from_param("color"), None);
    }
}
