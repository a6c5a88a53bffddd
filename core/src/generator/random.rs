use alloc::collections::BTreeSet;
use rand::Rng;

use super::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// Rejection sampling for sparse boards, shuffle-and-take for dense ones.
    #[default]
    Auto,
    /// Draw a uniform position and retry on collision.
    Rejection,
    /// Sample `mines` distinct indices out of all cells.
    Shuffle,
}

/// Uniform placement, every mine layout with the requested count is possible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RandomMinePlacer {
    strategy: PlacementStrategy,
}

impl RandomMinePlacer {
    pub const fn new(strategy: PlacementStrategy) -> Self {
        Self { strategy }
    }

    pub const fn strategy(&self) -> PlacementStrategy {
        self.strategy
    }

    fn resolve(&self, config: GameConfig) -> PlacementStrategy {
        use PlacementStrategy::*;
        match self.strategy {
            Auto if u32::from(config.mines()) * 2 >= u32::from(config.total_cells()) => Shuffle,
            Auto => Rejection,
            other => other,
        }
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place<R: Rng + ?Sized>(&self, config: GameConfig, rng: &mut R) -> MineSet {
        let (rows, cols) = config.size();
        let wanted = usize::from(config.mines());
        let strategy = self.resolve(config);

        let mines: BTreeSet<Coord2> = match strategy {
            PlacementStrategy::Shuffle => {
                let cols = usize::from(cols);
                rand::seq::index::sample(rng, usize::from(config.total_cells()), wanted)
                    .into_iter()
                    .map(|index| from_nd_index((index / cols, index % cols)))
                    .collect()
            }
            _ => {
                let mut mines = BTreeSet::new();
                let mut draws = 0usize;
                while mines.len() < wanted {
                    let pos = (rng.random_range(0..rows), rng.random_range(0..cols));
                    mines.insert(pos);
                    draws += 1;
                }
                log::trace!("Rejection sampling took {} draws for {} mines", draws, wanted);
                mines
            }
        };

        log::debug!(
            "Placed {} mines on {}x{} board using {:?}",
            mines.len(),
            rows,
            cols,
            strategy
        );
        MineSet(mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn place(strategy: PlacementStrategy, config: GameConfig, seed: u64) -> MineSet {
        let mut rng = SmallRng::seed_from_u64(seed);
        RandomMinePlacer::new(strategy).place(config, &mut rng)
    }

    #[test]
    fn every_strategy_places_exact_count_in_bounds() {
        let config = GameConfig::new(16, 32, 99).unwrap();
        for strategy in [
            PlacementStrategy::Auto,
            PlacementStrategy::Rejection,
            PlacementStrategy::Shuffle,
        ] {
            for seed in 0..20 {
                let mines = place(strategy, config, seed);
                assert_eq!(mines.len(), 99);
                assert!(mines.iter().all(|(r, c)| r < 16 && c < 32));
            }
        }
    }

    #[test]
    fn auto_switches_to_shuffle_on_dense_boards() {
        let placer = RandomMinePlacer::default();
        assert_eq!(
            placer.resolve(GameConfig::new(9, 9, 10).unwrap()),
            PlacementStrategy::Rejection
        );
        assert_eq!(
            placer.resolve(GameConfig::new(4, 4, 8).unwrap()),
            PlacementStrategy::Shuffle
        );
    }

    #[test]
    fn nearly_full_board_leaves_one_safe_cell() {
        let config = GameConfig::new(5, 5, 24).unwrap();
        let mines = place(PlacementStrategy::Auto, config, 7);
        assert_eq!(mines.len(), 24);
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::new(9, 9, 10).unwrap();
        assert_eq!(
            place(PlacementStrategy::Auto, config, 42),
            place(PlacementStrategy::Auto, config, 42)
        );
    }

    #[test]
    fn every_position_is_reachable() {
        let config = GameConfig::new(2, 2, 1).unwrap();
        let mut seen = BTreeSet::new();
        for seed in 0..200 {
            seen.extend(place(PlacementStrategy::Rejection, config, seed).iter());
        }
        assert_eq!(seen.len(), 4);
    }
}
