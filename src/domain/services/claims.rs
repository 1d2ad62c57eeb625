//! Rule priority resolution
//!
//! Rules are visited in declared order. A key belongs to the first rule whose
//! (post-ignore) candidates contain it; later rules see it as shadowed.

use std::collections::HashSet;

/// Candidates split by whether an earlier rule already owns their key.
#[derive(Debug, PartialEq, Eq)]
pub struct Claim<T = String> {
    /// Candidates newly owned by the current rule, in candidate order
    pub owned: Vec<T>,
    /// Candidates whose key an earlier rule already owns
    pub shadowed: Vec<T>,
}

impl<T> Default for Claim<T> {
    fn default() -> Self {
        Self {
            owned: Vec::new(),
            shadowed: Vec::new(),
        }
    }
}

/// Tracks which keys have been claimed by higher-priority rules.
#[derive(Debug, Default)]
pub struct ClaimTracker {
    claimed: HashSet<String>,
}

impl ClaimTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `candidates` for the next rule in priority order.
    ///
    /// Every candidate is recorded as claimed, including the shadowed ones.
    /// Only earlier rules shadow: two candidates of the same rule with the
    /// same key are both owned, leaving the clash to the manifest.
    pub fn claim<T, I>(&mut self, candidates: I) -> Claim<T>
    where
        T: AsRef<str>,
        I: IntoIterator<Item = T>,
    {
        let mut claim = Claim::default();
        let mut fresh = Vec::new();
        for candidate in candidates {
            if self.claimed.contains(candidate.as_ref()) {
                claim.shadowed.push(candidate);
            } else {
                fresh.push(candidate.as_ref().to_string());
                claim.owned.push(candidate);
            }
        }
        self.claimed.extend(fresh);
        claim
    }

    pub fn is_claimed(&self, key: &str) -> bool {
        self.claimed.contains(key)
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}
