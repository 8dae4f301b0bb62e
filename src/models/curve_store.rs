// src/models/curve_store.rs

use std::collections::BTreeMap;

use crate::{
    config::{COMPARE, DF},
    domain::Params,
    models::{Curve, CurveKey},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePhase {
    Empty,
    Populated,
}

/// Curves kept for comparison, keyed by a sequence number the store owns.
///
/// BTreeMap so iteration follows insertion order (keys only ever increase),
/// which keeps legend order and colour assignment stable between frames.
#[derive(Debug, Clone)]
pub struct CurveStore {
    curves: BTreeMap<CurveKey, Curve>,
    next_key: u64,
    capacity: usize,
}

impl Default for CurveStore {
    fn default() -> Self {
        Self::with_capacity(COMPARE.max_stored_curves)
    }
}

impl CurveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capacity of 0 is bumped to 1: the store must be able to hold the curve just added.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            curves: BTreeMap::new(),
            next_key: 0,
            capacity: capacity.max(1),
        }
    }

    /// Store a curve under a fresh key. Evicts the oldest curve(s) when full.
    pub fn insert(&mut self, curve: Curve) -> CurveKey {
        while self.curves.len() >= self.capacity {
            if let Some((evicted_key, evicted)) = self.curves.pop_first() {
                if DF.log_store {
                    log::info!(
                        "Store full ({}): evicted {} '{}'",
                        self.capacity,
                        evicted_key,
                        evicted.label
                    );
                }
            }
        }

        let key = CurveKey(self.next_key);
        self.next_key += 1;

        if DF.log_store {
            log::info!("Store insert {} '{}'", key, curve.label);
        }
        self.curves.insert(key, curve);
        key
    }

    pub fn clear(&mut self) {
        if DF.log_store && !self.curves.is_empty() {
            log::info!("Store cleared ({} curves dropped)", self.curves.len());
        }
        self.curves.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (CurveKey, &Curve)> {
        self.curves.iter().map(|(k, c)| (*k, c))
    }

    pub fn contains_params(&self, params: &Params) -> bool {
        self.curves.values().any(|c| &c.params == params)
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn phase(&self) -> StorePhase {
        if self.curves.is_empty() {
            StorePhase::Empty
        } else {
            StorePhase::Populated
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::CalcKind;

    fn keys(store: &CurveStore) -> Vec<CurveKey> {
        store.iter().map(|(k, _)| k).collect()
    }

    fn fv(rate_pct: u32) -> Curve {
        Curve::from_params(Params::clamped(CalcKind::FutureValue, 10, rate_pct))
    }

    #[test]
    fn starts_empty() {
        let store = CurveStore::new();
        assert!(store.is_empty());
        assert_eq!(store.phase(), StorePhase::Empty);
        assert_eq!(store.capacity(), COMPARE.max_stored_curves);
    }

    #[test]
    fn keys_are_unique_and_increasing() {
        let mut store = CurveStore::new();
        let a = store.insert(fv(5));
        let b = store.insert(fv(5));
        let c = store.insert(fv(6));
        assert!(a < b && b < c);
        assert_eq!(store.len(), 3);
        assert_eq!(store.phase(), StorePhase::Populated);
    }

    #[test]
    fn keys_not_reused_after_clear() {
        let mut store = CurveStore::new();
        let first = store.insert(fv(5));
        store.clear();
        assert_eq!(store.phase(), StorePhase::Empty);
        let second = store.insert(fv(5));
        assert!(second > first);
        assert_eq!(keys(&store), vec![second]);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut store = CurveStore::new();
        for rate in [9, 3, 15] {
            store.insert(fv(rate));
        }
        let labels: Vec<&str> = store.iter().map(|(_, c)| c.label.as_str()).collect();
        assert_eq!(labels, vec!["FV 9% 10y", "FV 3% 10y", "FV 15% 10y"]);
    }

    #[test]
    fn full_store_evicts_oldest() {
        let mut store = CurveStore::with_capacity(2);
        let oldest = store.insert(fv(1));
        store.insert(fv(2));
        store.insert(fv(3));
        assert_eq!(store.len(), 2);
        assert!(!keys(&store).contains(&oldest));
        let labels: Vec<&str> = store.iter().map(|(_, c)| c.label.as_str()).collect();
        assert_eq!(labels, vec!["FV 2% 10y", "FV 3% 10y"]);
    }

    #[test]
    fn zero_capacity_still_holds_one() {
        let mut store = CurveStore::with_capacity(0);
        store.insert(fv(1));
        store.insert(fv(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn contains_params_matches_exactly() {
        let mut store = CurveStore::new();
        store.insert(fv(5));
        assert!(store.contains_params(&Params::clamped(CalcKind::FutureValue, 10, 5)));
        assert!(!store.contains_params(&Params::clamped(CalcKind::FutureValue, 10, 6)));
        assert!(!store.contains_params(&Params::clamped(CalcKind::PresentValue, 10, 5)));
    }
}
