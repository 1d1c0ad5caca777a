use pos_core::{ErrorInfo, PosError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filling::next_filled_tableau;
use crate::shape::next_young_diagram;

/// Label of a single box of a Le-diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Zero label.
    #[serde(rename = "0")]
    Zero,
    /// Plus label.
    #[serde(rename = "+")]
    Plus,
}

/// Young diagram inside a `k × (n − k)` box filled with zeros and pluses
/// such that no zero has a plus both to its left and above it.
///
/// There is always one row per unit of rank; rows may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDiagram")]
pub struct LeDiagram {
    n: usize,
    k: usize,
    rows: Vec<Vec<Cell>>,
}

#[derive(Deserialize)]
struct RawDiagram {
    n: usize,
    k: usize,
    rows: Vec<Vec<Cell>>,
}

impl TryFrom<RawDiagram> for LeDiagram {
    type Error = PosError;

    fn try_from(raw: RawDiagram) -> Result<Self, Self::Error> {
        LeDiagram::new(raw.n, raw.k, raw.rows)
    }
}

fn diagram_error(code: &str, message: impl Into<String>) -> PosError {
    PosError::Diagram(ErrorInfo::new(code, message))
}

pub(crate) fn check_rank(n: usize, k: usize) -> Result<(), PosError> {
    if k > n {
        return Err(PosError::Diagram(
            ErrorInfo::new("rank-exceeds-ground-set", "rank cannot exceed the ground set size")
                .with_context("n", n.to_string())
                .with_context("k", k.to_string()),
        ));
    }
    Ok(())
}

/// Finds a zero cell with a plus to its left and a plus above it.
fn plus_property_violation(rows: &[Vec<Cell>]) -> Option<(usize, usize)> {
    for (i, row) in rows.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            if *cell != Cell::Zero {
                continue;
            }
            let plus_left = row[..j].contains(&Cell::Plus);
            let plus_above = rows[..i]
                .iter()
                .any(|above| above.get(j) == Some(&Cell::Plus));
            if plus_left && plus_above {
                return Some((i, j));
            }
        }
    }
    None
}

/// Returns whether `rows` satisfies the plus property.
pub fn has_plus_property(rows: &[Vec<Cell>]) -> bool {
    plus_property_violation(rows).is_none()
}

impl LeDiagram {
    /// Validates and wraps a filling.
    pub fn new(n: usize, k: usize, rows: Vec<Vec<Cell>>) -> Result<Self, PosError> {
        let diagram = Self { n, k, rows };
        diagram.validate()?;
        Ok(diagram)
    }

    pub(crate) fn from_parts(n: usize, k: usize, rows: Vec<Vec<Cell>>) -> Self {
        Self { n, k, rows }
    }

    /// Checks the row count, the partition shape and the plus property.
    pub fn validate(&self) -> Result<(), PosError> {
        check_rank(self.n, self.k)?;
        if self.rows.len() != self.k {
            return Err(diagram_error(
                "wrong-row-count",
                format!("expected {} rows, found {}", self.k, self.rows.len()),
            ));
        }
        let width = self.n - self.k;
        if let Some(row) = self.rows.iter().position(|row| row.len() > width) {
            return Err(diagram_error(
                "row-too-long",
                format!("row {row} is longer than {width}"),
            ));
        }
        if self.rows.windows(2).any(|pair| pair[0].len() < pair[1].len()) {
            return Err(diagram_error(
                "not-a-partition",
                "row lengths must be non-increasing",
            ));
        }
        if let Some((i, j)) = plus_property_violation(&self.rows) {
            return Err(PosError::Diagram(
                ErrorInfo::new("plus-property", "zero cell has a plus to its left and above")
                    .with_context("row", i.to_string())
                    .with_context("column", j.to_string()),
            ));
        }
        Ok(())
    }

    /// Size of the ground set.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Rank; also the number of rows.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Row lengths.
    pub fn shape(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    /// Cell in row `i` and column `j`, both 0-based.
    pub fn cell(&self, i: usize, j: usize) -> Option<Cell> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Number of plus cells.
    pub fn plus_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Plus)
            .count()
    }
}

fn first_filling(n: usize, k: usize, shape: &[usize]) -> LeDiagram {
    let rows = shape.iter().map(|&len| vec![Cell::Zero; len]).collect();
    LeDiagram::from_parts(n, k, rows)
}

fn advance(current: Option<&LeDiagram>, n: usize, k: usize) -> Option<LeDiagram> {
    let Some(current) = current else {
        return Some(LeDiagram::from_parts(n, k, vec![Vec::new(); k]));
    };
    let shape = current.shape();
    if let Some(rows) = next_filled_tableau(Some(current.rows()), &shape) {
        return Some(LeDiagram::from_parts(n, k, rows));
    }
    let next_shape = next_young_diagram(Some(&shape), k, n - k)?;
    Some(first_filling(n, k, &next_shape))
}

/// Successor of `current` among the Le-diagrams of type `(k, n)`: the next
/// filling of the current shape, else the first filling of the next shape.
///
/// `None` as input starts the enumeration; `Ok(None)` ends it.
pub fn next_le_diagram(
    current: Option<&LeDiagram>,
    n: usize,
    k: usize,
) -> Result<Option<LeDiagram>, PosError> {
    check_rank(n, k)?;
    if let Some(current) = current {
        if current.n() != n || current.k() != k {
            return Err(PosError::Diagram(
                ErrorInfo::new("diagram-mismatch", "diagram does not have the requested type")
                    .with_context("expected", format!("({k}, {n})"))
                    .with_context("found", format!("({}, {})", current.k(), current.n())),
            ));
        }
        current.validate()?;
    }
    Ok(advance(current, n, k))
}

/// Lazy, restartable sequence of every Le-diagram of type `(k, n)`.
#[derive(Debug, Clone)]
pub struct LeDiagrams {
    n: usize,
    k: usize,
    current: Option<LeDiagram>,
    done: bool,
    produced: usize,
}

impl LeDiagrams {
    /// Restarts the sequence from the empty shape.
    pub fn reset(&mut self) {
        self.current = None;
        self.done = false;
        self.produced = 0;
    }
}

/// Enumerates every Le-diagram of type `(k, n)`.
pub fn le_diagrams(n: usize, k: usize) -> Result<LeDiagrams, PosError> {
    check_rank(n, k)?;
    Ok(LeDiagrams {
        n,
        k,
        current: None,
        done: false,
        produced: 0,
    })
}

impl Iterator for LeDiagrams {
    type Item = LeDiagram;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match advance(self.current.as_ref(), self.n, self.k) {
            Some(diagram) => {
                self.produced += 1;
                self.current = Some(diagram.clone());
                Some(diagram)
            }
            None => {
                debug!(n = self.n, k = self.k, produced = self.produced, "Le-diagrams exhausted");
                self.done = true;
                None
            }
        }
    }
}
