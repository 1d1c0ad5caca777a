//! Plus/zero rows and fillings of a fixed shape.
//!
//! A filling satisfies the plus property when no zero cell has a plus both
//! somewhere to its left and somewhere above it.

use crate::diagram::Cell;

/// Successor of `current` among the rows compatible with `mask`, where
/// `mask[j]` marks a plus somewhere above column `j`.
///
/// The rightmost zero becomes a plus, and every later position is reset to
/// zero unless the mask forces a plus there. `None` starts at the all-zero
/// row and signals exhaustion after the all-plus row.
pub fn next_plus_zero_row(current: Option<&[Cell]>, mask: &[bool]) -> Option<Vec<Cell>> {
    let Some(current) = current else {
        return Some(vec![Cell::Zero; mask.len()]);
    };
    let pivot = current.iter().rposition(|cell| *cell == Cell::Zero)?;
    let mut next = current.to_vec();
    next[pivot] = Cell::Plus;
    for (column, cell) in next.iter_mut().enumerate().skip(pivot + 1) {
        *cell = if mask.get(column) == Some(&true) {
            Cell::Plus
        } else {
            Cell::Zero
        };
    }
    Some(next)
}

/// Lazy, restartable sequence of rows produced by [`next_plus_zero_row`].
#[derive(Debug, Clone)]
pub struct PlusZeroRows {
    mask: Vec<bool>,
    current: Option<Vec<Cell>>,
    done: bool,
}

impl PlusZeroRows {
    /// Rows compatible with `mask`.
    pub fn new(mask: Vec<bool>) -> Self {
        Self {
            mask,
            current: None,
            done: false,
        }
    }

    /// Restarts the sequence from the all-zero row.
    pub fn reset(&mut self) {
        self.current = None;
        self.done = false;
    }
}

impl Iterator for PlusZeroRows {
    type Item = Vec<Cell>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match next_plus_zero_row(self.current.as_deref(), &self.mask) {
            Some(row) => {
                self.current = Some(row.clone());
                Some(row)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// Column-wise OR of the rows above `row`, truncated to `length` columns.
pub fn plus_above_mask(rows: &[Vec<Cell>], row: usize, length: usize) -> Vec<bool> {
    let mut mask = vec![false; length];
    for above in &rows[..row] {
        for (slot, cell) in mask.iter_mut().zip(above) {
            *slot |= *cell == Cell::Plus;
        }
    }
    mask
}

/// Successor of `current` among the plus-property fillings of `shape`.
///
/// Rows act as odometer digits with the bottom row fastest. Advancing a row
/// resets every row below it to all zeros, which is always compatible with
/// the new masks.
pub fn next_filled_tableau(
    current: Option<&[Vec<Cell>]>,
    shape: &[usize],
) -> Option<Vec<Vec<Cell>>> {
    let Some(current) = current else {
        return Some(shape.iter().map(|&len| vec![Cell::Zero; len]).collect());
    };
    if current.len() != shape.len() {
        return None;
    }
    let mut rows = current.to_vec();
    for i in (0..rows.len()).rev() {
        let mask = plus_above_mask(&rows, i, shape[i]);
        if let Some(next_row) = next_plus_zero_row(Some(&rows[i]), &mask) {
            rows[i] = next_row;
            for (below, &len) in rows[i + 1..].iter_mut().zip(&shape[i + 1..]) {
                *below = vec![Cell::Zero; len];
            }
            return Some(rows);
        }
    }
    None
}

/// Lazy, restartable sequence of fillings of one shape.
#[derive(Debug, Clone)]
pub struct Fillings {
    shape: Vec<usize>,
    current: Option<Vec<Vec<Cell>>>,
    done: bool,
}

impl Fillings {
    /// Fillings of `shape`.
    pub fn new(shape: Vec<usize>) -> Self {
        Self {
            shape,
            current: None,
            done: false,
        }
    }

    /// Restarts the sequence from the all-zero filling.
    pub fn reset(&mut self) {
        self.current = None;
        self.done = false;
    }
}

impl Iterator for Fillings {
    type Item = Vec<Vec<Cell>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match next_filled_tableau(self.current.as_deref(), &self.shape) {
            Some(rows) => {
                self.current = Some(rows.clone());
                Some(rows)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}
