//! Main application for the Reversi GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, Vec2};

use super::board_view::BoardView;
use super::theme::*;
use crate::engine::{EngineConfig, MAX_LEVEL, MIN_LEVEL};
use crate::session::{GameSession, Phase, SessionConfig, AUTOMATED_SIDE, HUMAN_SIDE};
use crate::{GameOutcome, Side};

/// Pause before the computer replies, so its move is visible as a separate step
const THINK_DELAY: Duration = Duration::from_millis(250);

/// Main Reversi application
pub struct ReversiApp {
    session: GameSession,
    board_view: BoardView,
    show_debug: bool,
    message: Option<String>,
}

impl Default for ReversiApp {
    fn default() -> Self {
        Self {
            session: GameSession::new(SessionConfig {
                engine: EngineConfig::default(),
                think_delay: THINK_DELAY,
            }),
            board_view: BoardView::default(),
            show_debug: false,
            message: None,
        }
    }
}

impl ReversiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn restart(&mut self) {
        self.session.reset();
        self.message = None;
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("REVERSI").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.session.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (text, color) = match self.session.phase() {
                Phase::HumanToMove => ("Your move (Black)".to_string(), STATUS_READY),
                Phase::AutomatedToMove | Phase::AutomatedThinking => {
                    let secs = self
                        .session
                        .ai_thinking_elapsed()
                        .map_or(0.0, |elapsed| elapsed.as_secs_f32());
                    (format!("Computer thinking... {:.1}s", secs), STATUS_THINKING)
                }
                Phase::GameOver(_) => ("Game over".to_string(), WIN_HIGHLIGHT),
            };
            ui.label(RichText::new(text).size(14.0).strong().color(color));

            if let Some(last) = self.session.history().last() {
                ui.add_space(4.0);
                let text = match last {
                    crate::Turn::Move { side, pos } => format!("{} played {}", side.name(), pos),
                    crate::Turn::Pass { side } => format!("{} passed", side.name()),
                };
                ui.label(RichText::new(text).size(11.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        let score = self.session.score();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            for (side, label) in [(HUMAN_SIDE, "You"), (AUTOMATED_SIDE, "Computer")] {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(Vec2::splat(18.0), egui::Sense::hover());
                    let fill = if side == Side::Black { BLACK_DISC } else { WHITE_DISC };
                    ui.painter().circle_filled(rect.center(), 8.0, fill);
                    ui.label(RichText::new(label).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{}", score.of(side)))
                                .size(16.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                    });
                });
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("GAME").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let mut level = self.session.level();
            egui::ComboBox::from_label(RichText::new("Level").color(TEXT_SECONDARY))
                .selected_text(format!("{}", level))
                .show_ui(ui, |ui| {
                    for value in MIN_LEVEL..=MAX_LEVEL {
                        ui.selectable_value(&mut level, value, format!("{}", value));
                    }
                });
            if level != self.session.level() {
                self.session.set_level(level);
            }

            ui.add_space(8.0);
            let restart = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.add(
                        egui::Label::new(RichText::new("New Game").size(12.0).color(TEXT_PRIMARY))
                            .sense(egui::Sense::click()),
                    )
                    .clicked()
                })
                .inner;
            if restart {
                self.restart();
            }

            ui.add_space(6.0);
            ui.checkbox(&mut self.show_debug, "Engine details (D)");
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.session.last_ai_result() {
                Some(result) => {
                    ui.label(
                        RichText::new(format!("{:?}", result.search_type))
                            .size(11.0)
                            .strong()
                            .color(STATUS_READY),
                    );
                    ui.label(
                        RichText::new(format!(
                            "Score {}  |  {} nodes  |  {}ms",
                            result.score, result.nodes, result.time_ms
                        ))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                    );
                }
                None => {
                    ui.label(RichText::new("No engine move yet").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let score = self.session.score();
        let headline = match outcome {
            GameOutcome::Winner(side) if side == HUMAN_SIDE => "You win!",
            GameOutcome::Winner(_) => "Computer wins",
            GameOutcome::Draw => "Draw",
        };

        let clicked = Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(WIN_HIGHLIGHT));
                    ui.label(
                        RichText::new(format!("{} - {}", score.black, score.white))
                            .size(14.0)
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(10.0);
                    ui.button("Play again").clicked()
                })
                .inner
            })
            .inner;

        if clicked {
            self.restart();
        }
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(10.0))
            .show(ctx, |ui| {
                let legal = if self.session.is_human_turn() {
                    self.session.legal_moves()
                } else {
                    Vec::new()
                };

                let clicked = self.board_view.show(
                    ui,
                    self.session.board(),
                    &legal,
                    self.session.last_move(),
                    self.session.is_human_turn(),
                );

                if let Some(pos) = clicked {
                    self.message = self.session.play_human(pos).err().map(|err| err.to_string());
                }
            });
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, new_game) =
            ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::N)));
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if new_game {
            self.restart();
        }
    }
}

impl eframe::App for ReversiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.poll_automated_turn();

        if self.session.is_ai_turn() {
            if let Err(err) = self.session.start_automated_turn() {
                self.message = Some(err.to_string());
            }
        }

        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_ai_thinking() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
