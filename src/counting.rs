//! Count how many element comparisons a min/max search makes.
use std::cell::Cell;
use std::cmp::Ordering;

use crate::minmax;

/// Owns the comparison tally which [`Counted`] values increment.
#[derive(Debug, Default)]
pub struct ComparisonCounter {
    count: Cell<usize>,
}

impl ComparisonCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn reset(&self) {
        self.count.set(0);
    }

    /// Copy of `seq` where every comparison is tallied on this counter
    pub fn wrap<T: Clone>(&self, seq: &[T]) -> Vec<Counted<'_, T>> {
        seq.iter()
            .map(|value| Counted {
                value: value.clone(),
                counter: &self.count,
            })
            .collect()
    }
}

/// A value which adds one to its counter every time it's ordered against another.
///
/// Equality checks are not counted.
#[derive(Debug, Clone)]
pub struct Counted<'c, T> {
    value: T,
    counter: &'c Cell<usize>,
}

impl<T> Counted<'_, T> {
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: PartialEq> PartialEq for Counted<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: PartialOrd> PartialOrd for Counted<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.counter.set(self.counter.get() + 1);
        self.value.partial_cmp(&other.value)
    }
}

/// [`minmax::find`], also returning how many comparisons it took.
pub fn find_counted<T: PartialOrd + Clone>(seq: &[T], start: usize, end: usize) -> ((T, T), usize) {
    let counter = ComparisonCounter::new();
    let wrapped = counter.wrap(seq);
    let (lo, hi) = minmax::find(&wrapped, start, end);
    ((lo.into_inner(), hi.into_inner()), counter.count())
}

/// `⌈3n/2⌉ - 2`, the fewest comparisons any min & max search can guarantee. 0 for `n < 2`.
///
/// Saturates at `usize::MAX`.
pub fn comparison_bound(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n.div_ceil(2).checked_add(n).map_or(usize::MAX, |c| c - 2)
    }
}

/// `2n - 2`, comparisons for a separate pass for the minimum and for the maximum.
pub fn naive_comparisons(n: usize) -> usize {
    n.saturating_mul(2).saturating_sub(2)
}

/// `⌈5n/3⌉ - 2`, the most comparisons [`minmax::find`] makes on `n` elements.
///
/// The exact count, [`expected_comparisons`], meets [`comparison_bound`] when `n` is a power of
/// two (and at some other sizes, e.g. 7), but not always. With `n = 6` the halves have 3
/// elements each, so it takes 8 comparisons, not 7. Saturates at `usize::MAX`.
pub fn halving_bound(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n.checked_mul(5).map_or(usize::MAX, |c| c.div_ceil(3) - 2)
    }
}

/// Exactly how many comparisons [`minmax::find`] makes on `n` elements.
///
/// `T(1) = 0`, `T(2) = 1`, `T(n) = T(⌈n/2⌉) + T(⌊n/2⌋) + 2`
pub fn expected_comparisons(n: usize) -> usize {
    match n {
        0 | 1 => 0,
        2 => 1,
        n => expected_comparisons(n.div_ceil(2)) + expected_comparisons(n / 2) + 2,
    }
}
