//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::num::{NonZeroU16, NonZeroU32};

/// Default width of the grid in cells
pub(crate) const DEFAULT_GRID_WIDTH: NonZeroU16 = match NonZeroU16::new(32) {
    Some(n) => n,
    None => panic!("default grid width must be nonzero"),
};

/// Default height of the grid in cells
pub(crate) const DEFAULT_GRID_HEIGHT: NonZeroU16 = match NonZeroU16::new(24) {
    Some(n) => n,
    None => panic!("default grid height must be nonzero"),
};

/// Default number of game ticks per second
pub(crate) const DEFAULT_TICKS_PER_SECOND: NonZeroU32 = match NonZeroU32::new(20) {
    Some(n) => n,
    None => panic!("default tick rate must be nonzero"),
};

/// Environment variable from which the log filter is read
pub(crate) const LOG_ENV_VAR: &str = "TORSNAKE_LOG";

/// Number of terminal columns used to draw a single grid cell, so that cells
/// come out roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = '█';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '█';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '█';

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Rgb(0, 255, 0));

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(Color::Rgb(0, 255, 0))
    .add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Rgb(255, 0, 0));

/// Style for the border around the grid
pub(crate) const BORDER_STYLE: Style = Style::new().fg(Color::Rgb(93, 216, 228));

/// Style for the status bar at the top of the screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
