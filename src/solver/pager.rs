//! Candidate retrieval in fixed-size pages
//!
//! Pages are fetched one at a time until a short page signals the end of the
//! result set. Each page is refined positionally before its words join the
//! candidate pool.

use super::filter::PatternFilter;
use crate::store::{CandidateQuery, WordStore};
use log::{debug, warn};

/// Words per page
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Upper bound on pages fetched for one round
pub const DEFAULT_MAX_PAGES: usize = 10_000;

/// Paging limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerConfig {
    pub page_size: usize,
    pub max_pages: usize,
}

impl PagerConfig {
    /// Create a config; zero values are raised to one
    #[must_use]
    pub fn new(page_size: usize, max_pages: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            max_pages: max_pages.max(1),
        }
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_MAX_PAGES)
    }
}

/// Outcome of paging through the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Retrieval {
    /// Refined candidates, in store rank order
    pub candidates: Vec<String>,
    /// Pages requested, failed ones included
    pub pages: usize,
    /// Pages whose query failed and counted as empty
    pub failed_pages: usize,
    /// Rows returned by the store before refinement
    pub fetched: usize,
    /// The page cap stopped retrieval before the store ran out
    pub capped: bool,
}

/// Fetch every page matching `query`, keeping words that pass `filter`
///
/// A failed page is logged and treated as empty, which also ends the scan.
pub fn retrieve(
    store: &dyn WordStore,
    query: &CandidateQuery<'_>,
    filter: &PatternFilter,
    config: PagerConfig,
) -> Retrieval {
    let mut result = Retrieval::default();
    let mut offset = 0;

    loop {
        if result.pages >= config.max_pages {
            result.capped = has_more(store, query, offset);
            if result.capped {
                warn!(
                    "page cap of {} reached for length {}; keeping {} candidates",
                    config.max_pages,
                    query.length,
                    result.candidates.len()
                );
            }
            break;
        }

        let page = match store.words_page(query, offset, config.page_size) {
            Ok(page) => page,
            Err(err) => {
                warn!("page at offset {offset} failed: {err}");
                result.failed_pages += 1;
                Vec::new()
            }
        };
        result.pages += 1;
        result.fetched += page.len();

        let exhausted = page.len() < config.page_size;
        debug!("page {} at offset {offset}: {} rows", result.pages, page.len());
        result
            .candidates
            .extend(page.into_iter().filter(|w| filter.matches(w)));

        if exhausted {
            break;
        }
        offset += config.page_size;
    }

    result
}

/// Whether any row is left at `offset`; a failed lookup counts as more
fn has_more(store: &dyn WordStore, query: &CandidateQuery<'_>, offset: usize) -> bool {
    !matches!(store.words_page(query, offset, 1), Ok(rest) if rest.is_empty())
}
