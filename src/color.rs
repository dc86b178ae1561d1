use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Sport;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: sport id → Color32
// ---------------------------------------------------------------------------

/// Accent colour per sport, assigned in dataset order. Used for selected
/// sport chips and as the backdrop behind team logos.
#[derive(Debug, Clone)]
pub struct SportColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl SportColors {
    /// Build the mapping for the sports of a freshly loaded dataset.
    pub fn new(sports: &[Sport]) -> Self {
        let palette = generate_palette(sports.len());
        let mapping: BTreeMap<String, Color32> = sports
            .iter()
            .zip(palette)
            .map(|(sport, color): (&Sport, Color32)| (sport.id.clone(), color))
            .collect();

        SportColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the accent colour for a sport id.
    pub fn color_for(&self, sport_id: &str) -> Color32 {
        self.mapping
            .get(sport_id)
            .copied()
            .unwrap_or(self.default_color)
    }
}
