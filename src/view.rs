use crate::consts;
use crate::engine::{Direction, GameStatus, Occupancy, Snapshot};
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, status_area, controls_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);

        Line::styled(format!(" Score: {}", self.score()), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);
        Line::styled(
            format!("Highest Score: {} ", self.highest_score()),
            consts::SCORE_BAR_STYLE,
        )
        .right_aligned()
        .render(score_area, buf);

        let grid_size = self.bounds().size();
        let block_area = center_rect(
            board_area,
            Size {
                width: grid_size.width.saturating_add(2),
                height: grid_size.height.saturating_add(2),
            },
        );
        let border_style = match self.status() {
            GameStatus::Playing => Style::new(),
            GameStatus::Won => consts::WON_BORDER_STYLE,
            GameStatus::Lost => consts::LOST_BORDER_STYLE,
        };
        Block::bordered()
            .border_style(border_style)
            .render(block_area, buf);

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for (pos, occupant) in self.cells() {
            match occupant {
                Occupancy::Empty if self.show_grid() => {
                    canvas.draw_cell(pos, consts::GRID_SYMBOL, consts::GRID_STYLE);
                }
                Occupancy::Empty => (),
                Occupancy::Snake => {
                    canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
                }
                Occupancy::Food => canvas.draw_cell(pos, consts::FOOD_SYMBOL, consts::FOOD_STYLE),
            }
        }
        // Draw the head last so that, after a collision, it replaces the body
        // glyph
        if self.status() == GameStatus::Lost {
            canvas.draw_cell(
                self.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            canvas.draw_cell(self.head(), head_symbol(self.heading()), consts::SNAKE_STYLE);
        }

        let message = match (self.status(), self.paused()) {
            (GameStatus::Playing, false) => None,
            (GameStatus::Playing, true) => Some(" — PAUSED —"),
            (GameStatus::Won, _) => Some(" — YOU WIN! —"),
            (GameStatus::Lost, _) => Some(" — GAME OVER —"),
        };
        if let Some(msg) = message {
            Span::from(msg).render(status_area, buf);
        }

        Line::from_iter([
            Span::raw(" "),
            Span::raw(if self.show_grid() { "[✓]" } else { "[ ]" }),
            Span::raw(" Show grid ("),
            Span::styled("g", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .render(controls_area, buf);
        let mut controls = vec![
            Span::raw("Play again ("),
            Span::styled("r", consts::KEY_STYLE),
            Span::raw(")"),
        ];
        if self.status() == GameStatus::Playing {
            controls.push(Span::raw(if self.paused() {
                " — Resume ("
            } else {
                " — Pause ("
            }));
            controls.push(Span::styled("p", consts::KEY_STYLE));
            controls.push(Span::raw(")"));
        }
        controls.extend([
            Span::raw(" — Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(") "),
        ]);
        Line::from(controls)
            .right_aligned()
            .render(controls_area, buf);
    }
}

/// Return the glyph to use for drawing the snake's head
fn head_symbol(heading: Direction) -> char {
    match heading {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

/// A grid-relative view of the buffer
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if self.area.contains(Position { x, y }) {
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(symbol);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
