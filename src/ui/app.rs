//! Main application for the SiDing GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::{Player, SearchType};

const RULES: [&str; 5] = [
    "Move one of your pieces one step up, down, left or right onto an empty cell.",
    "After the move, look at the row and the column of the moved piece.",
    "Two of your pieces side by side, followed directly by an enemy piece, capture it.",
    "A row or column with all four cells filled never captures.",
    "A side left with fewer than 2 pieces loses.",
];

/// Main SiDing application
pub struct SidingApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
    show_rules: bool,
}

impl Default for SidingApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: false,
            show_rules: true,
        }
    }
}

impl SidingApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self, mode: GameMode) {
        self.state = GameState::with_config(mode, *self.state.config());
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs AI)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::A });
                        ui.close_menu();
                    }
                    if ui.button("New Game (Hotseat)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Restart (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_rules, "Rules");
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("vs AI - You: {}", human.symbol()),
                        GameMode::PvP => "Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(12.0);
                    self.render_title_card(ui);
                    ui.add_space(12.0);

                    self.render_turn_card(ui);
                    ui.add_space(10.0);

                    self.render_pieces_card(ui);
                    ui.add_space(10.0);

                    self.render_actions_card(ui);

                    if self.state.winner.is_some() {
                        ui.add_space(10.0);
                        self.render_game_over_card(ui);
                    }

                    if let Some(msg) = self.state.message.clone() {
                        ui.add_space(10.0);
                        Self::render_message_card(ui, &msg);
                    }

                    if self.show_debug {
                        ui.add_space(10.0);
                        self.render_debug_card(ui);
                    }

                    if self.show_rules {
                        ui.add_space(10.0);
                        Self::render_rules_card(ui);
                    }
                });
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●").size(20.0).color(PIECE_A));
            ui.label(RichText::new("●").size(20.0).color(PIECE_B));
            ui.add_space(4.0);
            ui.label(RichText::new("SIDING").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("4x4 capture game").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            let accent = match turn {
                Player::A => PIECE_A,
                Player::B => PIECE_B,
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    turn.symbol(),
                    egui::FontId::proportional(24.0),
                    TEXT_PRIMARY,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("PLAYER {}", turn.symbol()))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.winner.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_turn() {
                        ("AI thinking...", STATUS_THINKING)
                    } else if self.state.is_ai_enabled() {
                        ("Your turn", STATUS_READY)
                    } else {
                        ("To move", STATUS_READY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Remaining pieces for each side
    fn render_pieces_card(&self, ui: &mut egui::Ui) {
        let (a, b) = self.state.piece_counts();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PIECES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            Self::render_piece_row(ui, Player::A, a);
            ui.add_space(6.0);
            Self::render_piece_row(ui, Player::B, b);
        });
    }

    fn render_piece_row(ui: &mut egui::Ui, player: Player, count: u32) {
        let color = match player {
            Player::A => PIECE_A,
            Player::B => PIECE_B,
        };

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{}", player.symbol()))
                    .size(14.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
            for i in 0..crate::board::INITIAL_PIECES {
                let dot = if i < count { color } else { GRID_LINE };
                ui.label(RichText::new("●").size(18.0).color(dot));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let text = if count < crate::rules::MIN_PIECES {
                    RichText::new("LOST").size(14.0).strong().color(CAPTURE_FLASH)
                } else {
                    RichText::new(format!("{}/{}", count, crate::board::INITIAL_PIECES))
                        .size(14.0)
                        .color(TEXT_SECONDARY)
                };
                ui.label(text);
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Restart").clicked() {
                    self.state.reset();
                }
                let can_undo = self.state.history_len() > 0 && !self.state.is_ai_thinking();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    self.state.undo();
                }
                if self.state.mode == GameMode::PvP
                    && ui
                        .add_enabled(self.state.winner.is_none(), egui::Button::new("Hint"))
                        .clicked()
                {
                    self.state.request_suggestion();
                }
            });

            ui.add_space(6.0);
            let mut ai_enabled = self.state.is_ai_enabled();
            if ui.checkbox(&mut ai_enabled, "Play against AI (B)").changed() {
                self.state.set_ai_enabled(ai_enabled);
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.history_len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("Thinking {:.2}s", elapsed.as_secs_f32()))
                        .size(11.0)
                        .color(STATUS_THINKING),
                );
            }

            match &self.state.last_ai_result {
                Some(result) => {
                    let kind = match result.search_type {
                        SearchType::ImmediateWin => "Immediate win",
                        SearchType::AlphaBeta => "Alpha-beta",
                        SearchType::NoMove => "No move",
                    };
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(kind).size(11.0).strong().color(STATUS_READY));
                            ui.label(
                                RichText::new(format!("Score: {}", result.score))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("{}ms", result.time_ms))
                                        .size(10.0)
                                        .color(TEXT_SECONDARY),
                                );
                                ui.label(
                                    RichText::new(format!("{} nodes", result.nodes))
                                        .size(10.0)
                                        .color(TEXT_MUTED),
                                );
                            });
                        });
                    });

                    if let Some(mv) = result.best_move {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!(
                                "({},{}) → ({},{})",
                                mv.from.row, mv.from.col, mv.to.row, mv.to.col
                            ))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                        );
                    }
                }
                None => {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let Some(winner) = self.state.winner else {
            return;
        };
        let accent = match winner {
            Player::A => PIECE_A,
            Player::B => PIECE_B,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("PLAYER {} WINS!", winner.symbol()))
                            .size(18.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(12.0);
                    if ui
                        .button(RichText::new("New Game").size(14.0).strong())
                        .clicked()
                    {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    fn render_rules_card(ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("RULES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for (i, rule) in RULES.iter().enumerate() {
                ui.label(
                    RichText::new(format!("{}. {}", i + 1, rule))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    if let Some(pos) = self.board_view.show(ui, &self.state) {
                        if let Err(err) = self.state.handle_click(pos) {
                            self.state.message = Some(err.to_string());
                        }
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // H - Get hint (hotseat only)
            if i.key_pressed(egui::Key::H) && self.state.mode == GameMode::PvP {
                self.state.request_suggestion();
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for SidingApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Apply the AI move once its think delay has passed
        self.state.check_ai_result();

        if let Some(animation) = &self.state.capture_animation {
            if animation.is_complete() {
                self.state.capture_animation = None;
            }
        }

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.winner.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() || self.state.capture_animation.is_some() {
            ctx.request_repaint();
        }
    }
}
