//! Young diagram shapes fitting in a `max_parts × max_part_length` box.

/// Successor of `current` among the non-increasing partitions with exactly
/// `max_parts` parts (zeros allowed) bounded by `max_part_length`.
///
/// `None` as input starts at the empty partition; `None` as output means
/// the full rectangle has already been produced.
pub fn next_young_diagram(
    current: Option<&[usize]>,
    max_parts: usize,
    max_part_length: usize,
) -> Option<Vec<usize>> {
    let Some(current) = current else {
        return Some(vec![0; max_parts]);
    };
    let mut next = current.to_vec();
    for i in (0..next.len()).rev() {
        let cap = if i == 0 { max_part_length } else { next[i - 1] };
        if next[i] < cap {
            next[i] += 1;
            next[i + 1..].iter_mut().for_each(|part| *part = 0);
            return Some(next);
        }
    }
    None
}

/// Lazy, restartable sequence of shapes produced by [`next_young_diagram`].
#[derive(Debug, Clone)]
pub struct YoungShapes {
    max_parts: usize,
    max_part_length: usize,
    current: Option<Vec<usize>>,
    done: bool,
}

impl YoungShapes {
    /// Shapes with `max_parts` rows of length at most `max_part_length`.
    pub fn new(max_parts: usize, max_part_length: usize) -> Self {
        Self {
            max_parts,
            max_part_length,
            current: None,
            done: false,
        }
    }

    /// Restarts the sequence from the empty partition.
    pub fn reset(&mut self) {
        self.current = None;
        self.done = false;
    }
}

impl Iterator for YoungShapes {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match next_young_diagram(self.current.as_deref(), self.max_parts, self.max_part_length) {
            Some(shape) => {
                self.current = Some(shape.clone());
                Some(shape)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}
