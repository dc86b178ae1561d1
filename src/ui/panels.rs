use eframe::egui::{self, Color32, RichText, ScrollArea, TextEdit, Ui};

use crate::data::loader;
use crate::state::{AppState, Screen};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} matches across {} sports, {} shown",
            state.dataset.len(),
            state.dataset.sports.len(),
            state.visible.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// A failed load keeps the current dataset and reports in the top bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open match dataset")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} matches across {} sports",
                    dataset.len(),
                    dataset.sports.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Scores screen widgets
// ---------------------------------------------------------------------------

/// Free-text search over team and competition names.
pub fn search_bar(ui: &mut Ui, state: &mut AppState) {
    let response = ui.add(
        TextEdit::singleline(&mut state.selection.query)
            .hint_text("Search competition or team")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        state.refilter();
    }
}

/// Horizontally scrolling sport chips; a click toggles the sport.
pub fn sport_row(ui: &mut Ui, state: &mut AppState) {
    // Clone what we need so we can mutate state inside the loop.
    let sports: Vec<(String, String)> = state
        .dataset
        .sports
        .iter()
        .map(|s| (s.id.clone(), s.name.clone()))
        .collect();

    ScrollArea::horizontal()
        .id_salt("sport_row")
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                for (id, name) in &sports {
                    let selected = state.selection.sport_id.as_deref() == Some(id.as_str());
                    let mut text = RichText::new(name).strong();
                    if selected {
                        text = text.color(state.sport_colors.color_for(id));
                    }
                    if ui.selectable_label(selected, text).clicked() {
                        state.toggle_sport(id);
                    }
                }
            });
        });
}

/// Horizontally scrolling date chips over the dataset's distinct dates.
pub fn date_row(ui: &mut Ui, state: &mut AppState) {
    let dates = state.dates.clone();

    ScrollArea::horizontal()
        .id_salt("date_row")
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                for date in &dates {
                    let selected = state.selection.date.as_deref() == Some(date.as_str());
                    if ui.selectable_label(selected, date).clicked() {
                        state.toggle_date(date);
                    }
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Tab bar and placeholder screens
// ---------------------------------------------------------------------------

/// Bottom tab bar switching between the four screens. Switching tabs never
/// touches the filter selection.
pub fn tab_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for &screen in Screen::all() {
            let label = format!("{} {}", screen.icon(), screen.title());
            if ui.selectable_label(state.screen == screen, label).clicked() {
                state.screen = screen;
            }
        }
    });
}

/// Body for the tabs that have no content yet.
pub fn placeholder_screen(ui: &mut Ui, screen: Screen) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading(screen.title());
    });
}
