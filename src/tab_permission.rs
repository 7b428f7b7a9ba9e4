use crate::AccentColor;
use eframe::egui;
use eframe::egui::{Color32, RichText};

const MUTED: Color32 = Color32::from_rgb(0x71, 0x71, 0x7A);

/// Simulated system-permission prompt shown once at startup. Returns true
/// when the user grants access.
pub fn show(ui: &mut egui::Ui, accent: AccentColor) -> bool {
    let mut granted = false;

    ui.add_space(ui.available_height() * 0.25);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("\u{1F512}").size(40.0));
        ui.add_space(12.0);
        ui.heading(RichText::new("Permission Required").strong());
        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "Darkify Pro needs accessibility access to detect the foreground \
                 app and apply force-dark overrides. This is a simulation; nothing \
                 leaves your device.",
            )
            .color(MUTED),
        );
        ui.add_space(20.0);
        let button = egui::Button::new(
            RichText::new("Grant Permission").strong().color(Color32::BLACK),
        )
        .fill(accent.primary())
        .min_size(egui::vec2(200.0, 36.0));
        if ui.add(button).clicked() {
            granted = true;
        }
    });

    granted
}
