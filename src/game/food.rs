use super::grid::Grid;
use rand::Rng;
use ratatui::layout::Position;
use std::collections::HashSet;

/// The single food item on the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Food {
    pub(super) position: Position,
}

impl Food {
    /// Create a food item at a random cell not in `occupied`
    pub(super) fn new<R: Rng + ?Sized>(
        grid: Grid,
        occupied: &HashSet<Position>,
        rng: &mut R,
    ) -> Food {
        let mut food = Food {
            position: Position::ORIGIN,
        };
        food.relocate(grid, occupied, rng);
        food
    }

    pub(super) fn position(&self) -> Position {
        self.position
    }

    /// Move the food to a random cell not in `occupied`.
    ///
    /// # Panics
    ///
    /// Panics if every cell of `grid` is in `occupied`.
    pub(super) fn relocate<R: Rng + ?Sized>(
        &mut self,
        grid: Grid,
        occupied: &HashSet<Position>,
        rng: &mut R,
    ) {
        self.position = grid
            .random_free_cell(occupied, rng)
            .expect("grid should have a free cell on which to place food");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn relocate_avoids_occupied_cells() {
        let grid = Grid::of(6, 5);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut food = Food::new(grid, &HashSet::new(), &mut rng);
        for _ in 0..200 {
            let occupied = grid
                .positions()
                .filter(|_| rng.random_bool(0.7))
                .collect::<HashSet<_>>();
            if occupied.len() == grid.positions().count() {
                continue;
            }
            food.relocate(grid, &occupied, &mut rng);
            assert!(!occupied.contains(&food.position()));
        }
    }

    #[test]
    fn relocate_only_changes_position() {
        let grid = Grid::of(2, 1);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut food = Food {
            position: Position::new(0, 0),
        };
        food.relocate(grid, &HashSet::from([Position::new(0, 0)]), &mut rng);
        assert_eq!(
            food,
            Food {
                position: Position::new(1, 0)
            }
        );
    }

    #[test]
    #[should_panic(expected = "grid should have a free cell on which to place food")]
    fn relocate_on_full_grid() {
        let grid = Grid::of(2, 2);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let occupied = grid.positions().collect::<HashSet<_>>();
        let _ = Food::new(grid, &occupied, &mut rng);
    }
}
