use crate::catalog::Catalog;
use crate::search::keyword::MIN_KEYWORD_LEN;
use crate::search::query::{run_query, QueryOutput};
use crate::search::SelectedTag;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tracing::debug;

/// Cache key: queries that are observably equivalent share one entry.
///
/// The keyword is lowercased (matching is case-insensitive) and collapses to
/// empty below the minimum length; tags are sorted and deduplicated since
/// tag order and duplicates cannot affect the result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct QueryKey {
    keyword: String,
    tags: Vec<(String, String)>,
}

impl QueryKey {
    fn new(keyword: &str, selected: &[SelectedTag]) -> Self {
        let keyword = if keyword.chars().count() < MIN_KEYWORD_LEN {
            String::new()
        } else {
            keyword.to_lowercase()
        };

        let mut tags: Vec<(String, String)> = selected
            .iter()
            .map(|tag| (tag.category.clone(), tag.item.clone()))
            .collect();
        tags.sort();
        tags.dedup();

        QueryKey { keyword, tags }
    }
}

/// Bounded LRU memoization of query outputs.
struct QueryCache {
    capacity: usize,
    entries: HashMap<QueryKey, QueryOutput>,
    order: VecDeque<QueryKey>,
}

impl QueryCache {
    fn new(capacity: usize) -> Self {
        QueryCache {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn get(&mut self, key: &QueryKey) -> Option<QueryOutput> {
        let hit = self.entries.get(key).cloned();
        if hit.is_some() {
            self.touch(key);
        }
        hit
    }

    fn insert(&mut self, key: QueryKey, output: QueryOutput) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.insert(key.clone(), output).is_none() {
            self.order.push_back(key);
        } else {
            self.touch(&key);
        }

        while self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            } else {
                break;
            }
        }
    }

    fn touch(&mut self, key: &QueryKey) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A loaded catalog plus query memoization.
///
/// Queries are pure, so the cache can only ever be a speedup; with a
/// capacity of 0 every call falls through to [`run_query`]. The cache is
/// the engine's only mutable state and sits behind a mutex so the engine
/// can be shared across request handlers.
pub struct SearchEngine {
    catalog: Catalog,
    cache: Mutex<QueryCache>,
}

impl SearchEngine {
    pub fn new(catalog: Catalog, cache_capacity: usize) -> Self {
        SearchEngine {
            catalog,
            cache: Mutex::new(QueryCache::new(cache_capacity)),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Evaluate a query against the engine's catalog, memoized.
    pub fn query(&self, keyword: &str, selected: &[SelectedTag]) -> QueryOutput {
        let key = QueryKey::new(keyword, selected);

        if let Ok(mut cache) = self.cache.lock() {
            if let Some(output) = cache.get(&key) {
                debug!("Query cache hit: {:?}", key);
                return output;
            }
        }

        let output = run_query(&self.catalog.recipes, keyword, selected);

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, output.clone());
        }

        output
    }

    #[cfg(test)]
    fn cached_queries(&self) -> usize {
        self.cache.lock().map(|cache| cache.len()).unwrap_or(0)
    }
}
