//! Cyclic orders `<_i` on the ground set and their extensions to sets.
//!
//! Under `<_i` the element `i` is the minimum and the order runs
//! `i < i+1 < ... < n < 1 < ... < i-1`. The offset is always passed
//! explicitly so comparisons carry no hidden state.

use std::cmp::Ordering;

use crate::errors::{ErrorInfo, PosError};
use crate::family::is_in_range;
use crate::set::{Element, ElementSet};

fn check_offset(n: usize, i: usize) -> Result<(), PosError> {
    if (1..=n).contains(&i) {
        Ok(())
    } else {
        Err(PosError::Order(
            ErrorInfo::new("offset-out-of-range", "cyclic offset must lie in [1, n]")
                .with_context("n", n.to_string())
                .with_context("offset", i.to_string()),
        ))
    }
}

fn check_range(set: &ElementSet, n: usize) -> Result<(), PosError> {
    if is_in_range(set, n) {
        Ok(())
    } else {
        Err(PosError::Order(
            ErrorInfo::new("out-of-range", "set contains elements outside the ground set")
                .with_context("n", n.to_string())
                .with_set("set", set),
        ))
    }
}

/// Maps `a` onto the line where `i` is the minimum: values below `i` are
/// shifted up by `n`.
pub fn cyclic_shift(a: Element, n: usize, i: usize) -> Result<usize, PosError> {
    check_offset(n, i)?;
    Ok(shift_unchecked(a, n, i))
}

#[inline]
fn shift_unchecked(a: Element, n: usize, i: usize) -> usize {
    if a < i {
        a + n
    } else {
        a
    }
}

/// Compares two elements under `<_i`.
pub fn compare_elements(a: Element, b: Element, n: usize, i: usize) -> Result<Ordering, PosError> {
    check_offset(n, i)?;
    Ok(shift_unchecked(a, n, i).cmp(&shift_unchecked(b, n, i)))
}

/// Members of `set` shifted by `i` and sorted ascending.
pub fn shifted_sorted(set: &ElementSet, n: usize, i: usize) -> Result<Vec<usize>, PosError> {
    check_offset(n, i)?;
    check_range(set, n)?;
    let mut shifted: Vec<usize> = set.iter().map(|&a| shift_unchecked(a, n, i)).collect();
    shifted.sort_unstable();
    Ok(shifted)
}

/// Lexicographic comparison of `a` and `b` under `<_i`.
///
/// Sets of unequal size compare as sequences: a proper prefix is smaller.
pub fn compare_sets(
    a: &ElementSet,
    b: &ElementSet,
    n: usize,
    i: usize,
) -> Result<Ordering, PosError> {
    let left = shifted_sorted(a, n, i)?;
    let right = shifted_sorted(b, n, i)?;
    Ok(left.cmp(&right))
}

/// Gale order under `<_i`: `a ≤ b` iff after sorting both sets by `<_i`
/// every coordinate of `a` is at most the matching coordinate of `b`.
///
/// Sets of different sizes are incomparable and yield `false`.
pub fn gale_leq(a: &ElementSet, b: &ElementSet, n: usize, i: usize) -> Result<bool, PosError> {
    let left = shifted_sorted(a, n, i)?;
    let right = shifted_sorted(b, n, i)?;
    if left.len() != right.len() {
        return Ok(false);
    }
    Ok(left.iter().zip(&right).all(|(x, y)| x <= y))
}

/// Returns the `<_i`-lexicographically smallest set of `sets`, or `None`
/// for an empty input.
pub fn min_under_offset<'a, I>(sets: I, n: usize, i: usize) -> Result<Option<&'a ElementSet>, PosError>
where
    I: IntoIterator<Item = &'a ElementSet>,
{
    let mut best: Option<(Vec<usize>, &'a ElementSet)> = None;
    for set in sets {
        let key = shifted_sorted(set, n, i)?;
        match &best {
            Some((best_key, _)) if *best_key <= key => {}
            _ => best = Some((key, set)),
        }
    }
    Ok(best.map(|(_, set)| set))
}
