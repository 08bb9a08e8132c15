//! Case-insensitive callout type resolution with fallback.

use crate::config::defaults::FALLBACK_CALLOUT;
use std::cell::RefCell;
use std::collections::HashMap;

/// Outcome of resolving a marker's type token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCallout {
    /// Lowercase type name found in the table.
    pub kind: String,
    /// Icon markup for `kind`.
    pub icon: String,
    /// True when the token was unknown and `note` was used instead.
    pub fallback: bool,
}

/// Looks up type tokens in a callout table.
///
/// Results are memoized per raw token, so repeated markers in a document
/// only lowercase and look the token up once. The cache makes the resolver
/// `!Sync`; build one per thread.
#[derive(Debug)]
pub struct CalloutResolver {
    table: HashMap<String, String>,
    cache: RefCell<HashMap<String, ResolvedCallout>>,
}

impl CalloutResolver {
    /// Creates a resolver over a table keyed by lowercase names.
    ///
    /// The table must contain the fallback type.
    pub fn new(table: HashMap<String, String>) -> Self {
        debug_assert!(table.contains_key(FALLBACK_CALLOUT));
        Self {
            table,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Resolves a token: exact lowercase match first, otherwise the fallback.
    pub fn resolve(&self, token: &str) -> ResolvedCallout {
        if let Some(hit) = self.cache.borrow().get(token) {
            return hit.clone();
        }

        let resolved = self.lookup(token);
        self.cache
            .borrow_mut()
            .insert(token.to_string(), resolved.clone());
        resolved
    }

    fn lookup(&self, token: &str) -> ResolvedCallout {
        let kind = token.to_lowercase();
        if let Some(icon) = self.table.get(&kind) {
            return ResolvedCallout {
                kind,
                icon: icon.clone(),
                fallback: false,
            };
        }

        ResolvedCallout {
            kind: FALLBACK_CALLOUT.to_string(),
            icon: self
                .table
                .get(FALLBACK_CALLOUT)
                .cloned()
                .unwrap_or_default(),
            fallback: true,
        }
    }

    /// Number of distinct tokens resolved so far.
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }
}
