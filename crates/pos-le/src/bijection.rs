//! Le-diagrams ⇄ decorated permutations ⇄ Grassmann necklaces.
//!
//! The boundary of the shape is walked from the north-east corner to the
//! south-west corner and its steps are labelled `1..=n`: vertical steps
//! label rows, horizontal steps label columns. Pipes enter at the boundary
//! and leave on the bottom-left edge of the box; a plus is an elbow and a
//! zero a crossing. Reading the crossings as adjacent transpositions over
//! the `n` wavefront positions gives the decorated permutation.

use pos_core::family::describe_set;
use pos_core::{Element, ErrorInfo, PosError};
use pos_necklace::{DecoratedPermutation, GrassmannNecklace};
use tracing::{debug, trace};

use crate::diagram::{Cell, LeDiagram};

/// Boundary labels of `shape`: one per row, top to bottom, and one per
/// column, left to right.
struct BoundaryLabels {
    rows: Vec<Element>,
    columns: Vec<Element>,
}

impl BoundaryLabels {
    fn walk(shape: &[usize], n: usize, k: usize) -> Self {
        let width = n - k;
        let mut rows = vec![0; k];
        let mut columns = vec![0; width];
        let mut x = width;
        let mut label = 1;
        for (i, &len) in shape.iter().enumerate() {
            while x > len {
                columns[x - 1] = label;
                label += 1;
                x -= 1;
            }
            rows[i] = label;
            label += 1;
        }
        while x > 0 {
            columns[x - 1] = label;
            label += 1;
            x -= 1;
        }
        Self { rows, columns }
    }

    /// Label leaving the box at wavefront position `q`.
    fn at_position(&self, q: usize) -> Element {
        let k = self.rows.len();
        if q < k {
            self.rows[k - 1 - q]
        } else {
            self.columns[q - k]
        }
    }

    /// Wavefront position where `label` leaves the box.
    fn position_of(&self, label: Element) -> Option<usize> {
        let k = self.rows.len();
        if let Some(row) = self.rows.iter().position(|&l| l == label) {
            return Some(k - 1 - row);
        }
        self.columns
            .iter()
            .position(|&l| l == label)
            .map(|column| k + column)
    }
}

/// Wavefront position of cell `(i, j)` in a diagram with `k` rows.
fn wavefront(i: usize, j: usize, k: usize) -> usize {
    j + k - 1 - i
}

/// Decorated permutation of a Le-diagram. Fixed row labels are coloops,
/// fixed column labels loops.
pub fn le_diagram_to_decorated_permutation(
    diagram: &LeDiagram,
) -> Result<DecoratedPermutation, PosError> {
    diagram.validate()?;
    let (n, k) = (diagram.n(), diagram.k());
    let shape = diagram.shape();
    let labels = BoundaryLabels::walk(&shape, n, k);

    let mut origin: Vec<usize> = (0..n).collect();
    for i in (0..k).rev() {
        for j in (0..shape[i]).rev() {
            if diagram.rows()[i][j] == Cell::Zero {
                let p = wavefront(i, j, k);
                origin.swap(p, p + 1);
            }
        }
    }

    let mut images = vec![0; n];
    for (q, &start) in origin.iter().enumerate() {
        images[n - 1 - start] = labels.at_position(q);
    }
    let coloops = labels
        .rows
        .iter()
        .copied()
        .filter(|&label| images[label - 1] == label)
        .collect();
    DecoratedPermutation::new(images, coloops)
}

/// Grassmann necklace of the positroid encoded by a Le-diagram.
pub fn le_diagram_to_grassmann_necklace(diagram: &LeDiagram) -> Result<GrassmannNecklace, PosError> {
    let necklace = le_diagram_to_decorated_permutation(diagram)?.to_necklace()?;
    trace!(n = diagram.n(), k = diagram.k(), ?necklace, "necklace of Le-diagram");
    Ok(necklace)
}

/// Recovers the Le-diagram of a Grassmann necklace.
///
/// The shape comes from the labels of `I_1`. Cells are then filled top to
/// bottom and left to right: a cell is a zero exactly when the residual
/// permutation still needs the crossing at its wavefront position.
pub fn grassmann_necklace_to_le_diagram(necklace: &GrassmannNecklace) -> Result<LeDiagram, PosError> {
    let (n, k) = (necklace.n(), necklace.k());
    let Some(first) = necklace.entries().first() else {
        return LeDiagram::new(n, k, vec![Vec::new(); k]);
    };

    let mut x = n - k;
    let mut shape = Vec::with_capacity(k);
    for label in 1..=n {
        if first.contains(label) {
            shape.push(x);
        } else {
            x -= 1;
        }
    }
    let labels = BoundaryLabels::walk(&shape, n, k);
    let permutation = DecoratedPermutation::from_necklace(necklace)?;

    // residual[q] is the exit position still owed to the pipe at q.
    let mut residual = vec![0; n];
    for label in 1..=n {
        let image = permutation.image(label).unwrap_or(label);
        residual[n - label] = labels.position_of(image).ok_or_else(|| {
            PosError::Diagram(ErrorInfo::new("unrealisable-necklace", "label outside the boundary"))
        })?;
    }
    let mut holder = vec![0; n];
    for (q, &target) in residual.iter().enumerate() {
        holder[target] = q;
    }

    let mut rows = Vec::with_capacity(k);
    for (i, &len) in shape.iter().enumerate() {
        let mut row = Vec::with_capacity(len);
        for j in 0..len {
            let p = wavefront(i, j, k);
            if holder[p + 1] < holder[p] {
                let (left, right) = (holder[p], holder[p + 1]);
                residual[left] = p + 1;
                residual[right] = p;
                holder.swap(p, p + 1);
                row.push(Cell::Zero);
            } else {
                row.push(Cell::Plus);
            }
        }
        rows.push(row);
    }

    if residual.iter().enumerate().any(|(q, &target)| q != target) {
        return Err(PosError::Diagram(
            ErrorInfo::new(
                "unrealisable-necklace",
                "necklace permutation does not fit its Le-diagram shape",
            )
            .with_context(
                "necklace",
                necklace.entries().iter().map(describe_set).collect::<Vec<_>>().join(" "),
            ),
        ));
    }
    let diagram = LeDiagram::new(n, k, rows)?;
    debug!(n, k, dimension = diagram.plus_count(), "Le-diagram of necklace");
    Ok(diagram)
}

/// Dimension of the positroid cell of a necklace: the number of plus
/// cells of its Le-diagram.
pub fn positroid_dimension(necklace: &GrassmannNecklace) -> Result<usize, PosError> {
    Ok(grassmann_necklace_to_le_diagram(necklace)?.plus_count())
}
