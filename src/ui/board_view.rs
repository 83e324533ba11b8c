//! Board rendering for the SiDing GUI

use crate::{Player, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::game_state::{CaptureAnimation, GameState};
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
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board that fits the available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(12), BOARD_BG);

        let hovered = if state.winner.is_none() {
            response.hover_pos().and_then(|p| self.screen_to_board(p))
        } else {
            None
        };

        self.draw_cells(&painter, state, hovered);
        self.draw_coordinates(&painter);

        if let Some(mv) = state.last_move {
            self.draw_last_move(&painter, mv.from, mv.to);
        }

        self.draw_pieces(&painter, state);

        if let Some(animation) = &state.capture_animation {
            self.draw_capture_flash(&painter, animation);
        }

        for &pos in &state.valid_moves {
            painter.circle_filled(self.cell_center(pos), VALID_DOT_RADIUS, VALID_MOVE_DOT);
        }

        if let Some(mv) = state.suggested_move {
            self.draw_suggestion(&painter, mv.from, mv.to, state.current_turn);
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw the 4x4 cells with selection and hover tint
    fn draw_cells(&self, painter: &Painter, state: &GameState, hovered: Option<Pos>) {
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            let rect = self.cell_rect(pos);

            let fill = if state.selected == Some(pos) {
                CELL_SELECTED
            } else {
                CELL_BG
            };
            painter.rect_filled(rect, CornerRadius::same(8), fill);
            painter.rect_stroke(
                rect,
                CornerRadius::same(8),
                Stroke::new(1.0, GRID_LINE),
                egui::StrokeKind::Inside,
            );

            if hovered == Some(pos) {
                painter.rect_filled(rect, CornerRadius::same(8), hover_cell());
            }
        }
    }

    /// Draw row and column indices (0-3)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;

            // Column label above the board
            let pos = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y + 12.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, i, font.clone(), TEXT_MUTED);

            // Row label left of the board
            let pos = Pos2::new(self.board_rect.min.x + 12.0, self.board_rect.min.y + offset);
            painter.text(pos, egui::Align2::CENTER_CENTER, i, font.clone(), TEXT_MUTED);
        }
    }

    /// Draw all pieces
    fn draw_pieces(&self, painter: &Painter, state: &GameState) {
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            if let Some(player) = state.board.get(pos) {
                let winning = state.winner == Some(player);
                self.draw_piece(painter, pos, player, winning);
            }
        }
    }

    /// Draw a single piece with shadow and highlight
    fn draw_piece(&self, painter: &Painter, pos: Pos, player: Player, winning: bool) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let (fill, highlight) = piece_colors(player);

        painter.circle_filled(
            center + Vec2::new(2.0, 3.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 70),
        );
        painter.circle_filled(center, radius, fill);
        painter.circle_filled(
            center + Vec2::new(-radius * 0.3, -radius * 0.3),
            radius * 0.2,
            highlight,
        );
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            player.symbol(),
            egui::FontId::proportional(radius * 0.9),
            TEXT_PRIMARY,
        );

        if winning {
            painter.circle_stroke(center, radius + 4.0, Stroke::new(3.0, WIN_HIGHLIGHT));
        }
    }

    /// Outline the origin and destination of the last move
    fn draw_last_move(&self, painter: &Painter, from: Pos, to: Pos) {
        let stroke = Stroke::new(LAST_MOVE_STROKE, LAST_MOVE_MARKER);
        painter.rect_stroke(
            self.cell_rect(to),
            CornerRadius::same(8),
            stroke,
            egui::StrokeKind::Inside,
        );
        painter.circle_stroke(self.cell_center(from), self.cell_size * 0.12, stroke);
    }

    /// Fading red ring where pieces were just captured
    fn draw_capture_flash(&self, painter: &Painter, animation: &CaptureAnimation) {
        let fade = 1.0 - animation.progress();
        let alpha = (fade * 255.0) as u8;
        let color = Color32::from_rgba_unmultiplied(
            CAPTURE_FLASH.r(),
            CAPTURE_FLASH.g(),
            CAPTURE_FLASH.b(),
            alpha,
        );

        for &pos in &animation.positions {
            let center = self.cell_center(pos);
            let radius = self.cell_size * PIECE_RADIUS_RATIO * (1.0 + 0.3 * (1.0 - fade));
            painter.circle_filled(center, radius * 0.6, color.gamma_multiply(0.5));
            painter.circle_stroke(center, radius, Stroke::new(4.0, color));
        }
    }

    /// Draw hint arrow from the suggested piece to its destination
    fn draw_suggestion(&self, painter: &Painter, from: Pos, to: Pos, turn: Player) {
        let (fill, _) = piece_colors(turn);
        let start = self.cell_center(from);
        let end = self.cell_center(to);

        painter.arrow(start, end - start, Stroke::new(4.0, fill.gamma_multiply(0.7)));
        painter.circle_filled(
            end,
            self.cell_size * PIECE_RADIUS_RATIO,
            fill.gamma_multiply(0.35),
        );
        painter.text(
            end,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(18.0),
            TEXT_PRIMARY,
        );
    }

    /// Screen rectangle of a cell, inset by the cell gap
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size)).shrink(CELL_GAP / 2.0)
    }

    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;
        Pos::try_new(row, col)
    }
}

fn piece_colors(player: Player) -> (Color32, Color32) {
    match player {
        Player::A => (PIECE_A, PIECE_A_HIGHLIGHT),
        Player::B => (PIECE_B, PIECE_B_HIGHLIGHT),
    }
}
