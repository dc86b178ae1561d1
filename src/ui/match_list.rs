use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{Match, Team};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Match list (central panel)
// ---------------------------------------------------------------------------

/// Render the visible match cards.
pub fn match_list(ui: &mut Ui, state: &AppState) {
    if state.visible.is_empty() {
        // With no filters active an empty list means an empty dataset.
        let message = if state.selection.is_empty() {
            "No matches in the dataset  (File → Open…)"
        } else {
            "No matches for the current filters"
        };
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(message);
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for &key in &state.visible {
                let Some((sport, game)) = state.dataset.get(key) else {
                    continue;
                };
                let accent = state.sport_colors.color_for(&sport.id);
                match_card(ui, game, accent);
                ui.add_space(8.0);
            }
        });
}

/// One card: competition header, the two teams side by side, time label.
fn match_card(ui: &mut Ui, game: &Match, accent: Color32) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());

        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new(&game.competition).strong().size(16.0));
        });
        ui.add_space(4.0);

        ui.columns(2, |columns| {
            for (column, team) in columns.iter_mut().zip(&game.teams) {
                team_cell(column, team, accent);
            }
        });

        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new(&game.time).weak());
            if game.notification {
                ui.label(RichText::new("🔔").color(Color32::LIGHT_BLUE));
            }
        });
    });
}

/// Logo, name, score — stacked and centred.
fn team_cell(ui: &mut Ui, team: &Team, accent: Color32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::from_uri(team.logo.clone())
                .fit_to_exact_size(egui::vec2(40.0, 40.0))
                .rounding(4.0)
                .bg_fill(accent),
        );
        ui.label(RichText::new(&team.name).strong());
        ui.label(team.score.to_string());
    });
}
