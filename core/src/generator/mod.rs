use alloc::collections::BTreeSet;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait MinePlacer {
    /// Picks exactly `config.mines()` distinct positions on the board.
    fn place<R: Rng + ?Sized>(&self, config: GameConfig, rng: &mut R) -> MineSet;
}

/// Distinct mine positions of one game, iterated in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineSet(BTreeSet<Coord2>);

impl MineSet {
    /// Builds an explicit layout, mostly useful for scripted games.
    ///
    /// Duplicate coordinates collapse into one mine; the resulting count must
    /// still describe a valid [`GameConfig`] for `size`.
    pub fn from_coords(size: Coord2, coords: &[Coord2]) -> Result<(GameConfig, Self)> {
        let mut mines = BTreeSet::new();
        for &pos in coords {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GameError::OutOfBounds { coords: pos, size });
            }
            mines.insert(pos);
        }

        let count = CellCount::try_from(mines.len()).unwrap_or(CellCount::MAX);
        let config = GameConfig::new(size.0, size.1, count)?;
        Ok((config, Self(mines)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.0.contains(&coords)
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Coord2> for MineSet {
    fn from_iter<I: IntoIterator<Item = Coord2>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
