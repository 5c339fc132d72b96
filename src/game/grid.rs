use super::direction::Direction;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::{Position, Positions, Rect, Size};
use std::collections::HashSet;
use std::num::NonZeroU16;

/// The toroidal playing field.  Moving off one edge re-enters from the
/// opposite edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: NonZeroU16,
    height: NonZeroU16,
}

impl Grid {
    pub(crate) fn new(width: NonZeroU16, height: NonZeroU16) -> Grid {
        Grid { width, height }
    }

    pub(crate) fn width(self) -> u16 {
        self.width.get()
    }

    pub(crate) fn height(self) -> u16 {
        self.height.get()
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// The cell at which a fresh snake is placed
    pub(crate) fn center(self) -> Position {
        Position::new(self.width() / 2, self.height() / 2)
    }

    /// Iterate over every cell of the grid in row-major order
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    /// Return the cell one step away from `pos` in `direction`, wrapping
    /// around the edges.
    pub(crate) fn step(self, pos: Position, direction: Direction) -> Position {
        let Position { mut x, mut y } = pos;
        match direction {
            Direction::Up => y = decrement_wrapping(y, self.height()),
            Direction::Down => y = increment_wrapping(y, self.height()),
            Direction::Left => x = decrement_wrapping(x, self.width()),
            Direction::Right => x = increment_wrapping(x, self.width()),
        }
        Position { x, y }
    }

    /// Choose a cell uniformly at random from those not in `excluded`.
    ///
    /// Returns `None` only when every cell is excluded, which cannot happen
    /// during normal play as the grid is far larger than any snake that can
    /// be grown on it.
    pub(crate) fn random_free_cell<R: Rng + ?Sized>(
        self,
        excluded: &HashSet<Position>,
        rng: &mut R,
    ) -> Option<Position> {
        self.positions()
            .filter(|p| !excluded.contains(p))
            .choose(rng)
    }
}

fn decrement_wrapping(c: u16, max: u16) -> u16 {
    c.checked_sub(1).unwrap_or(max - 1)
}

fn increment_wrapping(c: u16, max: u16) -> u16 {
    c.checked_add(1).filter(|&cc| cc < max).unwrap_or(0)
}

#[cfg(test)]
impl Grid {
    pub(crate) fn of(width: u16, height: u16) -> Grid {
        Grid::new(
            NonZeroU16::new(width).expect("test grid width should be nonzero"),
            NonZeroU16::new(height).expect("test grid height should be nonzero"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[rstest]
    #[case(Direction::Up, Position::new(2, 7), Position::new(2, 6))]
    #[case(Direction::Down, Position::new(2, 7), Position::new(2, 8))]
    #[case(Direction::Right, Position::new(2, 7), Position::new(3, 7))]
    #[case(Direction::Left, Position::new(2, 7), Position::new(1, 7))]
    #[case(Direction::Up, Position::new(2, 0), Position::new(2, 14))]
    #[case(Direction::Down, Position::new(2, 14), Position::new(2, 0))]
    #[case(Direction::Right, Position::new(9, 7), Position::new(0, 7))]
    #[case(Direction::Left, Position::new(0, 7), Position::new(9, 7))]
    #[case(Direction::Left, Position::new(0, 0), Position::new(9, 0))]
    #[case(Direction::Up, Position::new(9, 0), Position::new(9, 14))]
    fn test_step(#[case] d: Direction, #[case] pos: Position, #[case] r: Position) {
        assert_eq!(Grid::of(10, 15).step(pos, d), r);
    }

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Down)]
    #[case(Direction::Left)]
    #[case(Direction::Right)]
    fn step_on_single_cell_grid_stays_put(#[case] d: Direction) {
        let grid = Grid::of(1, 1);
        assert_eq!(grid.step(Position::ORIGIN, d), Position::ORIGIN);
    }

    #[test]
    fn step_then_opposite_returns_to_start() {
        let grid = Grid::of(5, 4);
        for pos in grid.positions() {
            for d in Direction::iter() {
                assert_eq!(grid.step(grid.step(pos, d), d.opposite()), pos);
            }
        }
    }

    #[rstest]
    #[case(32, 24, Position::new(16, 12))]
    #[case(5, 3, Position::new(2, 1))]
    #[case(1, 1, Position::new(0, 0))]
    fn test_center(#[case] width: u16, #[case] height: u16, #[case] center: Position) {
        assert_eq!(Grid::of(width, height).center(), center);
    }

    #[test]
    fn random_free_cell_avoids_excluded() {
        let grid = Grid::of(4, 4);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let cells = grid.positions().collect::<Vec<_>>();
        for _ in 0..200 {
            let excluded = cells
                .iter()
                .copied()
                .filter(|_| rng.random_bool(0.9))
                .collect::<HashSet<_>>();
            let Some(cell) = grid.random_free_cell(&excluded, &mut rng) else {
                assert_eq!(excluded.len(), cells.len());
                continue;
            };
            assert!(!excluded.contains(&cell));
            assert!(cell.x < 4 && cell.y < 4);
        }
    }

    #[test]
    fn random_free_cell_finds_last_free_cell() {
        let grid = Grid::of(4, 4);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let free = Position::new(3, 1);
        let excluded = grid
            .positions()
            .filter(|&p| p != free)
            .collect::<HashSet<_>>();
        for _ in 0..20 {
            assert_eq!(grid.random_free_cell(&excluded, &mut rng), Some(free));
        }
    }

    #[test]
    fn random_free_cell_on_full_grid() {
        let grid = Grid::of(3, 2);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let excluded = grid.positions().collect::<HashSet<_>>();
        assert_eq!(grid.random_free_cell(&excluded, &mut rng), None);
    }
}
