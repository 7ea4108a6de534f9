//! URL synchronisation for filter changes.
//!
//! Live mode rewrites the query string in place with `replaceState`.
//! Reload mode replaces the location so the server renders the filtered
//! page, which discards all in-memory state.

use crp_filter_core::{FilterState, QueryError, merge_query, query::build_url};

use crate::models::UpdateMode;
use crate::utils::{dom, log};

/// URL of the current page with its filter parameters replaced.
pub fn target_url(state: &FilterState) -> Result<String, QueryError> {
    let query = merge_query(&dom::location_search(), state)?;
    Ok(build_url(
        &dom::location_pathname(),
        &query,
        &dom::location_hash(),
    ))
}

/// Run the update path for a new filter state.
pub fn apply(state: &FilterState, mode: UpdateMode) {
    let url = match target_url(state) {
        Ok(url) => url,
        Err(e) => {
            log::error(format!("Cannot encode filters: {}", e));
            return;
        }
    };

    let result = match mode {
        UpdateMode::Live => {
            log::info(format!("Filters changed ({} active): {}", state.len(), url));
            dom::replace_history_url(&url)
        }
        UpdateMode::Reload => {
            log::info(format!("Navigating to {}", url));
            dom::replace_location(&url)
        }
    };

    if let Err(e) = result {
        log::error(format!("{}; filters stay applied locally", e));
    }
}
