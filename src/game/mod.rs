mod direction;
mod food;
mod grid;
mod scene;
mod snake;
pub(crate) use self::direction::Direction;
use self::food::Food;
pub(crate) use self::grid::Grid;
pub(crate) use self::scene::Scene;
pub(crate) use self::snake::Advance;
use self::snake::Snake;
use log::{debug, info, trace};
use rand::Rng;
use ratatui::layout::Position;

/// The complete state of a game in progress: the grid, the snake, and the
/// food
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Food,

    /// The cell vacated by the snake's tail on the most recent tick
    vacated: Option<Position>,
}

impl<R: Rng> Game<R> {
    /// Start a new game with the snake at the center of `grid` and the food
    /// at a random free cell
    pub(crate) fn new(grid: Grid, mut rng: R) -> Game<R> {
        let snake = Snake::new(grid.center());
        let food = Food::new(grid, &snake.occupied(), &mut rng);
        Game {
            rng,
            grid,
            snake,
            food,
            vacated: None,
        }
    }

    /// Run one tick of the simulation: turn, move, and then eat if the head
    /// has landed on the food.
    ///
    /// The food check runs even when the snake collided and was reset this
    /// tick, against the freshly reset head.
    pub(crate) fn tick(&mut self) -> Tick {
        self.snake.apply_pending_direction();
        let advance = self.snake.advance(self.grid, &mut self.rng);
        match advance {
            Advance::Moved { vacated } => self.vacated = vacated,
            Advance::Collided => {
                info!(
                    "Snake ran into itself; resetting at {:?} heading {:?}",
                    self.snake.head(),
                    self.snake.direction
                );
                self.vacated = None;
            }
        }
        let ate = self.snake.head() == self.food.position();
        if ate {
            self.snake.grow();
            // Keep the food off the cell the tail just left as well, unless
            // that is the only free cell
            let mut excluded = self.snake.occupied();
            if let Some(vacated) = self.vacated {
                if excluded.len() + 1 < self.grid.positions().count() {
                    excluded.insert(vacated);
                }
            }
            self.food.relocate(self.grid, &excluded, &mut self.rng);
            debug!(
                "Snake ate food at {:?}; target length is now {}; food moved to {:?}",
                self.snake.head(),
                self.snake.target_len,
                self.food.position()
            );
        }
        Tick { advance, ate }
    }
}

impl<R> Game<R> {
    /// Ask the snake to turn on the next tick
    pub(crate) fn request_direction(&mut self, direction: Direction) {
        if !self.snake.request_direction(direction) {
            trace!(
                "Ignoring request to reverse from {:?} to {:?}",
                self.snake.direction,
                direction
            );
        }
    }

    pub(crate) fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub(crate) fn scene(&self) -> Scene<'_> {
        Scene {
            grid: self.grid,
            body: self.snake.positions(),
            head: self.snake.head(),
            food: self.food.position(),
            vacated: self.vacated,
        }
    }
}

/// What happened during a call to [`Game::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Tick {
    pub(crate) advance: Advance,

    /// Whether the snake ate the food this tick
    pub(crate) ate: bool,
}
