//! Nearest-match ordering.
//!
//! ## Sort Key
//!
//! Every admitted record gets a [`RankKey`] of `(class, distance)`:
//!
//! | Class | Meaning | Distance |
//! |---|---|---|
//! | `Exact` | reference value equals the target | 0 |
//! | `Near` | reference value present, differs | `abs(target - value)` |
//! | `Unranked` | no usable reference value | 0 |
//!
//! Keys compare class first, then distance. The sort is stable, so equal
//! keys keep catalog order. Ranks and scores share this path: ranks are
//! lifted into `Decimal`, and `Decimal` comparison is exact.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::types::score::distance;

/// Ordering class, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RankClass {
    Exact = 0,
    Near = 1,
    Unranked = 2,
}

/// Sort key for one admitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankKey {
    pub class: RankClass,
    pub distance: Decimal,
}

impl RankKey {
    /// Key for a record whose reference value is `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use college_predictor::engine::ranking::{RankClass, RankKey};
    /// use rust_decimal::Decimal;
    ///
    /// let target = Decimal::from(2000);
    /// assert_eq!(RankKey::new(target, Some(Decimal::from(2000))).class, RankClass::Exact);
    ///
    /// let near = RankKey::new(target, Some(Decimal::from(1000)));
    /// assert_eq!(near.class, RankClass::Near);
    /// assert_eq!(near.distance, Decimal::from(1000));
    ///
    /// assert_eq!(RankKey::new(target, None).class, RankClass::Unranked);
    /// ```
    pub fn new(target: Decimal, value: Option<Decimal>) -> Self {
        match value {
            Some(value) if value == target => Self {
                class: RankClass::Exact,
                distance: Decimal::ZERO,
            },
            Some(value) => Self {
                class: RankClass::Near,
                distance: distance(target, value),
            },
            None => Self {
                class: RankClass::Unranked,
                distance: Decimal::ZERO,
            },
        }
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class
            .cmp(&other.class)
            .then_with(|| self.distance.cmp(&other.distance))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Stable sort of `items` by closeness of `value(item)` to `target`.
///
/// Items with equal keys keep their relative order.
pub fn rank_by_closeness<T, F>(items: &mut [T], target: Decimal, value: F)
where
    F: Fn(&T) -> Option<Decimal>,
{
    // slice::sort_by_key is stable
    items.sort_by_key(|item| RankKey::new(target, value(item)));
}

// ============================================================================
// Unit Tests
// ============================================================================
