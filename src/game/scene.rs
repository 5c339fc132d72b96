use super::grid::Grid;
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
};
use std::collections::VecDeque;

/// A snapshot of everything needed to draw one tick of the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Scene<'a> {
    pub(crate) grid: Grid,

    /// Every cell occupied by the snake, head first
    pub(crate) body: &'a VecDeque<Position>,

    pub(crate) head: Position,

    pub(crate) food: Position,

    /// The tail cell given up by the snake this tick, if any, which is to be
    /// cleared to the background
    pub(crate) vacated: Option<Position>,
}

impl Widget for Scene<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [status_area, board_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        Line::styled(
            format!(" Length: {}", self.body.len()),
            consts::STATUS_BAR_STYLE,
        )
        .render(status_area, buf);

        let block_size = Size {
            width: self
                .grid
                .width()
                .saturating_mul(consts::CELL_WIDTH)
                .saturating_add(2),
            height: self.grid.height().saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered()
            .border_style(consts::BORDER_STYLE)
            .render(block_area, buf);

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        // Clear the old tail first so that food placed on it stays visible
        if let Some(pos) = self.vacated {
            canvas.clear_cell(pos);
        }
        for &pos in self.body.iter().skip(1) {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        canvas.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        canvas.draw_cell(
            self.head,
            consts::SNAKE_HEAD_SYMBOL,
            consts::SNAKE_HEAD_STYLE,
        );
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        self.paint(pos, symbol, Style::reset().patch(style));
    }

    fn clear_cell(&mut self, pos: Position) {
        self.paint(pos, ' ', Style::reset());
    }

    fn paint(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(rect) = self.cell_rect(pos) else {
            return;
        };
        for p in rect.positions() {
            if let Some(cell) = self.buf.cell_mut(p) {
                cell.set_char(symbol);
                cell.set_style(style);
            }
        }
    }

    /// The terminal cells covered by grid cell `pos`, clipped to the canvas
    fn cell_rect(&self, pos: Position) -> Option<Rect> {
        let x = self
            .area
            .x
            .checked_add(pos.x.checked_mul(consts::CELL_WIDTH)?)?;
        let y = self.area.y.checked_add(pos.y)?;
        Some(Rect::new(x, y, consts::CELL_WIDTH, 1).intersection(self.area))
    }
}
