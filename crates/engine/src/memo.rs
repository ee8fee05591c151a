//! Caller-side memoization for derived view models.

/// Single-slot cache keyed by input equality.
///
/// Holds the most recent `(key, value)` pair; a call with an equal key
/// returns the cached value, a call with a different key recomputes and
/// replaces it. Correctness never depends on this cache -- derivation
/// functions are pure -- it only skips redundant recomputation.
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
}

impl<K: PartialEq, V> Memo<K, V> {
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Return the cached value for `key`, computing it on a miss.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        let hit = matches!(&self.slot, Some((cached, _)) if *cached == key);
        if !hit {
            self.slot = Some((key, compute()));
        }
        match &self.slot {
            Some((_, value)) => value,
            None => unreachable!("slot was just filled"),
        }
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}

impl<K: PartialEq, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recomputes_only_when_the_key_changes() {
        let mut memo: Memo<u32, String> = Memo::new();

        let first = memo.get_or_compute(1, || "one".to_string());
        assert_eq!(first, "one");

        // Same key: cached, closure not run.
        let again = memo.get_or_compute(1, || "recomputed".to_string());
        assert_eq!(again, "one");

        // New key: recomputed and replaced.
        let second = memo.get_or_compute(2, || "two".to_string());
        assert_eq!(second, "two");
    }

    #[test]
    fn invalidate_forces_recomputation() {
        let mut memo: Memo<u32, u32> = Memo::new();
        memo.get_or_compute(1, || 10);
        memo.invalidate();

        let mut recomputed = false;
        memo.get_or_compute(1, || {
            recomputed = true;
            10
        });
        assert!(recomputed);
    }
}
