use crate::consts::{
    BOARD_BORDER, FOOD_SYMBOL, HEAD_SYMBOL, HELP_ROW, HELP_TEXT, RESTART_TEXT, SCORE_ROW,
    TAIL_SYMBOL,
};
use crate::grid::Pos;
use crate::haus::{RoundEnd, SnekHaus};
use ratatui::{prelude::*, widgets::*};

/// Screen rectangle holding the board and its border, anchored top-left.
fn board_area<R>(haus: &SnekHaus<R>) -> Rect {
    Rect::new(0, 0, haus.size.width + 2, haus.size.height + 2)
}

fn row(y: u16, width: u16) -> Rect {
    Rect::new(0, y, width, 1)
}

/// Draw the round: board, score line and help line, plus the banner once the
/// round has ended.
pub fn draw<R>(frame: &mut Frame, haus: &SnekHaus<R>) {
    let screen = frame.area();
    let board = board_area(haus).intersection(screen);

    frame.render_widget(Block::bordered().border_set(BOARD_BORDER), board);
    frame.render_widget(haus, board);

    let line_width = board_area(haus).width.max(HELP_TEXT.len() as u16);
    frame.render_widget(
        Paragraph::new(format!("Score: {}", haus.score)),
        row(SCORE_ROW, line_width).intersection(screen),
    );
    frame.render_widget(
        Paragraph::new(HELP_TEXT),
        row(HELP_ROW, line_width).intersection(screen),
    );

    if let Some(end) = haus.ended {
        let title = match end {
            RoundEnd::BoardFull => "BOARD FULL",
            RoundEnd::Collided | RoundEnd::Quit => "GAME OVER",
        };
        let mid = haus.size.height / 2;
        frame.render_widget(
            Paragraph::new(title.bold()).alignment(Alignment::Center),
            row(mid, board.width).intersection(screen),
        );
        frame.render_widget(
            Paragraph::new(RESTART_TEXT).alignment(Alignment::Center),
            row(mid + 2, board.width).intersection(screen),
        );
    }
}

fn put(buf: &mut Buffer, area: Rect, pos: Pos, symbol: &str, color: Color) {
    // Board cells are 1-indexed, which lines them up inside the border
    let at = Position::new(area.x + pos.x, area.y + pos.y);
    if !area.contains(at) {
        return;
    }
    if let Some(cell) = buf.cell_mut(at) {
        cell.set_symbol(symbol).set_fg(color);
    }
}

impl<R> Widget for &SnekHaus<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut draw_cell = |pos: Pos, symbol: &str, color: Color| {
            if self.size.contains(pos) {
                put(buf, area, pos, symbol, color);
            }
        };

        draw_cell(self.food, FOOD_SYMBOL, Color::LightRed);

        // Oldest segment first so newer ones land on top
        for pos in self.snek.tail.iter().rev() {
            draw_cell(*pos, TAIL_SYMBOL, Color::Green);
        }

        draw_cell(self.snek.head, HEAD_SYMBOL, Color::Yellow);
    }
}
