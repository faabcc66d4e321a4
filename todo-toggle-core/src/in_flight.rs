//! Per-item bookkeeping for toggles that have been sent but not answered.

use std::cell::RefCell;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// What to do with a click on an item whose previous toggle is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InFlightPolicy {
    /// Drop the click; the pending response decides the item's state.
    #[default]
    Ignore,
    /// Send another request; whichever response lands last wins.
    Allow,
}

/// Ids with an outstanding toggle request.
#[derive(Debug, Default)]
pub struct InFlightRegistry {
    pending: RefCell<HashSet<String>>,
}

impl InFlightRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `id` for a new request. Returns `None` when the policy is
    /// [`InFlightPolicy::Ignore`] and a request for `id` is already pending.
    pub fn begin(&self, id: &str, policy: InFlightPolicy) -> Option<InFlightGuard<'_>> {
        let inserted = self.pending.borrow_mut().insert(id.to_string());
        if !inserted && policy == InFlightPolicy::Ignore {
            return None;
        }
        Some(InFlightGuard {
            registry: self,
            id: id.to_string(),
            owner: inserted,
        })
    }

    #[must_use]
    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.borrow().contains(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

/// Releases the id when the request finishes, whatever the outcome.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    registry: &'a InFlightRegistry,
    id: String,
    // Under `Allow` only the first overlapping request owns the entry.
    owner: bool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.owner {
            self.registry.pending.borrow_mut().remove(&self.id);
        }
    }
}
