use eframe::egui;

use crate::data::model::MatchDataset;
use crate::state::{AppState, Screen};
use crate::ui::{match_list, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MatchdayApp {
    pub state: AppState,
}

impl MatchdayApp {
    pub fn new(dataset: MatchDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for MatchdayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: tab bar ----
        egui::TopBottomPanel::bottom("tab_bar").show(ctx, |ui| {
            panels::tab_bar(ui, &mut self.state);
        });

        // ---- Central panel: active screen ----
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.screen {
                Screen::Scores => {
                    panels::search_bar(ui, &mut self.state);
                    ui.add_space(4.0);
                    panels::sport_row(ui, &mut self.state);
                    panels::date_row(ui, &mut self.state);
                    ui.separator();
                    match_list::match_list(ui, &self.state);
                }
                screen => panels::placeholder_screen(ui, screen),
            }
        });
    }
}
