use super::direction::Direction;
use super::grid::Grid;
use rand::Rng;
use ratatui::layout::Position;
use std::collections::{HashSet, VecDeque};

/// Snake state.  Snate.
///
/// All positions are relative to the top-left corner of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, head first.  Never empty.
    pub(super) positions: VecDeque<Position>,

    /// The length the snake grows towards.  The tail is only dropped once
    /// `positions` would exceed this.
    pub(super) target_len: usize,

    /// The direction applied on each advance
    pub(super) direction: Direction,

    /// A requested change of direction, applied at the start of the next tick
    pub(super) pending: Option<Direction>,

    /// Where the snake starts out and where it returns to on a reset
    home: Position,
}

impl Snake {
    /// Create a new snake of length 1 at `home`, facing right
    pub(super) fn new(home: Position) -> Snake {
        Snake {
            positions: VecDeque::from([home]),
            target_len: 1,
            direction: Direction::Right,
            pending: None,
            home,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.positions[0]
    }

    pub(super) fn positions(&self) -> &VecDeque<Position> {
        &self.positions
    }

    pub(super) fn occupied(&self) -> HashSet<Position> {
        self.positions.iter().copied().collect()
    }

    pub(super) fn len(&self) -> usize {
        self.positions.len()
    }

    /// Ask for the snake to turn to `direction` on the next tick.  A request
    /// to reverse straight back into the current direction is ignored, and a
    /// later request replaces an earlier one that has not been applied yet.
    ///
    /// Returns `false` if the request was ignored.
    pub(super) fn request_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            false
        } else {
            self.pending = Some(direction);
            true
        }
    }

    pub(super) fn apply_pending_direction(&mut self) {
        if let Some(d) = self.pending.take() {
            self.direction = d;
        }
    }

    /// Move the snake forwards one cell in the current direction.
    ///
    /// If the new head would land on any cell of the body (everything but the
    /// current head, tail included), the snake is [reset][Snake::reset]
    /// instead and [`Advance::Collided`] is returned.
    pub(super) fn advance<R: Rng + ?Sized>(&mut self, grid: Grid, rng: &mut R) -> Advance {
        let new_head = grid.step(self.head(), self.direction);
        if self.positions.iter().skip(1).any(|&p| p == new_head) {
            self.reset(rng);
            return Advance::Collided;
        }
        self.positions.push_front(new_head);
        let vacated = if self.positions.len() > self.target_len {
            self.positions.pop_back()
        } else {
            None
        };
        Advance::Moved { vacated }
    }

    /// Extend the snake's target length in response to eating food
    pub(super) fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Return the snake to its starting cell at length 1, facing in a random
    /// direction
    pub(super) fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.target_len = 1;
        self.positions.clear();
        self.positions.push_back(self.home);
        self.direction = rng.random();
        self.pending = None;
    }
}

/// The result of [`Snake::advance()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Advance {
    /// The snake moved one cell.  `vacated` is the old tail cell if the snake
    /// did not grow this tick.
    Moved { vacated: Option<Position> },

    /// The snake ran into itself and was reset
    Collided,
}
