//! Board rendering for the Reversi GUI

use crate::{Board, Cell, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if it is one of `legal`
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        legal: &[Pos],
        last_move: Option<Pos>,
        accept_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        painter.rect_filled(self.play_area(), CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_discs(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if !accept_input {
            return None;
        }

        self.draw_legal_moves(&painter, legal);

        let board_pos = response
            .hover_pos()
            .and_then(|pointer| self.screen_to_board(pointer))
            .filter(|pos| legal.contains(pos))?;

        painter.circle_filled(
            self.cell_center(board_pos),
            self.cell_size * DISC_RADIUS_RATIO,
            hover_valid(),
        );

        if response.clicked() {
            Some(board_pos)
        } else {
            None
        }
    }

    fn play_area(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        )
    }

    /// Draw the 8x8 cell grid
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let area = self.play_area();

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            painter.line_segment(
                [
                    Pos2::new(area.min.x + offset, area.min.y),
                    Pos2::new(area.min.x + offset, area.max.y),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    Pos2::new(area.min.x, area.min.y + offset),
                    Pos2::new(area.max.x, area.min.y + offset),
                ],
                stroke,
            );
        }

        painter.rect_stroke(area, CornerRadius::ZERO, stroke, StrokeKind::Middle);
    }

    /// Draw coordinate labels (a-h, 1-8)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        let area = self.play_area();

        for i in 0..BOARD_SIZE {
            let center = (i as f32 + 0.5) * self.cell_size;

            let letter = (b'a' + i as u8) as char;
            painter.text(
                Pos2::new(area.min.x + center, self.board_rect.min.y + BOARD_MARGIN * 0.5),
                egui::Align2::CENTER_CENTER,
                letter,
                font.clone(),
                COORD_LABEL,
            );

            painter.text(
                Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, area.min.y + center),
                egui::Align2::CENTER_CENTER,
                format!("{}", i + 1),
                font.clone(),
                COORD_LABEL,
            );
        }
    }

    fn draw_discs(&self, painter: &Painter, board: &Board) {
        for index in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(index);
            match board.get(pos) {
                Cell::Empty => {}
                cell => self.draw_disc(painter, pos, cell),
            }
        }
    }

    /// Draw a single disc with shading
    fn draw_disc(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );

        match cell {
            Cell::Black => {
                painter.circle_filled(center, radius, BLACK_DISC);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_DISC_HIGHLIGHT,
                );
            }
            Cell::White => {
                painter.circle_filled(center, radius, WHITE_DISC);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_DISC_SHADOW),
                );
            }
            Cell::Empty => {}
        }
    }

    /// Dots on the cells the human may play
    fn draw_legal_moves(&self, painter: &Painter, legal: &[Pos]) {
        let radius = self.cell_size * LEGAL_DOT_RADIUS_RATIO;
        for &pos in legal {
            painter.circle_filled(self.cell_center(pos), radius, legal_move_dot());
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.play_area().min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;
        Pos::try_new(row, col).ok()
    }

    /// Screen coordinates of a cell's center
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let area = self.play_area();
        Pos2::new(
            area.min.x + (pos.col() as f32 + 0.5) * self.cell_size,
            area.min.y + (pos.row() as f32 + 0.5) * self.cell_size,
        )
    }
}
