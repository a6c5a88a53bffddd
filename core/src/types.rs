use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Converts an ndarray index back into board coordinates.
///
/// Boards are never larger than `Coord::MAX` on either axis, so the
/// conversion only saturates for indices that did not come from a board.
pub(crate) fn from_nd_index((row, col): (usize, usize)) -> Coord2 {
    (
        Coord::try_from(row).unwrap_or(Coord::MAX),
        Coord::try_from(col).unwrap_or(Coord::MAX),
    )
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, from_nd_index(self.dim()))
    }
}

/// Lazy iterator over the up-to-eight in-bounds neighbours of a cell.
///
/// Walks the 3x3 window around `center`, clipped to `bounds`, row by row
/// and skipping the center itself.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    first_col: Coord,
    last: Coord2,
    next: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (row, col) = center;
        let (rows, cols) = bounds;
        let last = match (rows.checked_sub(1), cols.checked_sub(1)) {
            (Some(last_row), Some(last_col)) => (
                row.saturating_add(1).min(last_row),
                col.saturating_add(1).min(last_col),
            ),
            _ => (0, 0),
        };
        let first = (row.saturating_sub(1), col.saturating_sub(1));
        let empty = rows == 0 || cols == 0 || first.0 > last.0 || first.1 > last.1;

        Self {
            center,
            first_col: first.1,
            last,
            next: if empty { None } else { Some(first) },
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (row, col) = self.next?;
            self.next = if col < self.last.1 {
                Some((row, col + 1))
            } else if row < self.last.0 {
                Some((row + 1, self.first_col))
            } else {
                None
            };

            if (row, col) != self.center {
                return Some((row, col));
            }
        }
    }
}
