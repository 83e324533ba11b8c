//! Theme constants for the SiDing GUI

use egui::Color32;

// Board colors - slate tones
pub const BOARD_BG: Color32 = Color32::from_rgb(30, 41, 59);
pub const CELL_BG: Color32 = Color32::from_rgb(51, 65, 85);
pub const CELL_SELECTED: Color32 = Color32::from_rgb(99, 102, 241);
pub const GRID_LINE: Color32 = Color32::from_rgb(71, 85, 105);

// Piece colors: A is red (human), B is blue (computer)
pub const PIECE_A: Color32 = Color32::from_rgb(244, 63, 94);
pub const PIECE_A_HIGHLIGHT: Color32 = Color32::from_rgb(253, 164, 175);
pub const PIECE_B: Color32 = Color32::from_rgb(14, 165, 233);
pub const PIECE_B_HIGHLIGHT: Color32 = Color32::from_rgb(125, 211, 252);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 204, 21);
pub const VALID_MOVE_DOT: Color32 = Color32::from_rgb(134, 239, 172);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const CAPTURE_FLASH: Color32 = Color32::from_rgb(255, 100, 100);

pub fn hover_cell() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 20)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(15, 23, 42);
pub const CARD_BG: Color32 = Color32::from_rgb(30, 41, 59);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const CELL_GAP: f32 = 8.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.34;
pub const VALID_DOT_RADIUS: f32 = 7.0;
pub const LAST_MOVE_STROKE: f32 = 3.0;
