pub use crate::tab_home_stt::*;
use crate::calc_forcedark::SessionState;
use crate::toast::ToastState;
use crate::{AccentColor, Settings};
use chrono::Timelike;
use eframe::egui;
use eframe::egui::{Color32, RichText};
use std::time::Instant;

const CARD_FILL: Color32 = Color32::from_rgb(0x18, 0x18, 0x1B);
const MUTED: Color32 = Color32::from_rgb(0x71, 0x71, 0x7A);

const PREVIEW_HEIGHT: f32 = 170.0;

impl TabHome {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        session: &mut SessionState,
        settings: &Settings,
        toast: &mut ToastState,
        now: Instant,
    ) {
        let accent = settings.accent_color;
        let enabled = session.is_global_enabled;

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("DARKIFY PRO").small().strong().color(MUTED));
                    ui.label(RichText::new("V1.0.0").small().color(MUTED));
                });
                let hour = chrono::Local::now().hour();
                ui.label(RichText::new(greeting(enabled, hour)).strong());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let glyph = if enabled { "\u{1F319}" } else { "\u{2600}" };
                let color = if enabled { accent.primary() } else { MUTED };
                ui.label(RichText::new(glyph).size(22.0).color(color));
            });
        });

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            if hero_toggle(ui, enabled, settings).clicked() {
                session.set_global_enabled(!enabled, toast, now);
            }
            ui.add_space(8.0);
            let status = if enabled { "PROTECTION ACTIVE" } else { "TAP TO ENABLE" };
            ui.label(RichText::new(status).small().color(MUTED));
        });

        ui.add_space(24.0);
        egui::Frame::group(ui.style()).fill(CARD_FILL).show(ui, |ui| {
            ui.columns(3, |cols| {
                stat(&mut cols[0], if enabled { "42%" } else { "0%" }, "STRAIN RED.");
                stat(&mut cols[1], if enabled { "+1.2h" } else { "0h" }, "BATTERY EXT.");
                let managed = session.forced_count().to_string();
                stat(&mut cols[2], &managed, "APPS MANAGED");
            });
        });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("CONTRAST SIMULATOR").small().color(MUTED));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new("ENHANCED ENGINE").small().color(accent.primary()));
            });
        });
        self.comparison_preview(ui, accent);

        if settings.battery_trigger || settings.sunset_trigger {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("\u{26A1} Auto-triggers standing by")
                        .small()
                        .color(accent.primary()),
                );
            });
        }
    }

    /// Draggable before/after split: a light mock layout over a dark one,
    /// with the accent-filled block on the dark side.
    fn comparison_preview(&mut self, ui: &mut egui::Ui, accent: AccentColor) {
        let width = ui.available_width();
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, PREVIEW_HEIGHT), egui::Sense::click_and_drag());
        if response.clicked() || response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.preview_split = split_from_pointer(rect, pos.x);
            }
        }
        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter();

        // Dark side, always underneath.
        painter.rect_filled(rect, 12.0, Color32::BLACK);
        mock_layout(
            painter,
            rect,
            Color32::from_rgb(0x27, 0x27, 0x2A),
            accent.primary(),
        );
        painter.text(
            rect.right_bottom() + egui::vec2(-12.0, -8.0),
            egui::Align2::RIGHT_BOTTOM,
            "DARK PREVIEW",
            egui::FontId::proportional(9.0),
            Color32::from_rgb(0x52, 0x52, 0x5B),
        );

        // Light side, clipped left of the divider.
        let split_x = egui::lerp(rect.left()..=rect.right(), self.preview_split);
        let clip = egui::Rect::from_min_max(rect.min, egui::pos2(split_x, rect.max.y));
        let light = painter.with_clip_rect(clip);
        light.rect_filled(rect, 12.0, Color32::from_rgb(0xF4, 0xF4, 0xF5));
        mock_layout(
            &light,
            rect,
            Color32::from_rgb(0xD4, 0xD4, 0xD8),
            Color32::from_rgb(0xA1, 0xA1, 0xAA),
        );
        light.text(
            rect.left_bottom() + egui::vec2(12.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            "ORIGINAL",
            egui::FontId::proportional(9.0),
            Color32::from_rgb(0xA1, 0xA1, 0xAA),
        );

        // Divider with a grab knob.
        painter.vline(split_x, rect.y_range(), egui::Stroke::new(2.0, Color32::WHITE));
        let knob = egui::pos2(split_x, rect.center().y);
        painter.circle_filled(knob, 10.0, Color32::WHITE);
        painter.vline(
            knob.x - 2.0,
            egui::Rangef::new(knob.y - 4.0, knob.y + 4.0),
            egui::Stroke::new(1.5, Color32::from_rgb(0xA1, 0xA1, 0xAA)),
        );
        painter.vline(
            knob.x + 2.0,
            egui::Rangef::new(knob.y - 4.0, knob.y + 4.0),
            egui::Stroke::new(1.5, Color32::from_rgb(0xA1, 0xA1, 0xAA)),
        );
    }
}

/// Headline above the hero toggle. Evenings get their own line while the
/// override is off.
fn greeting(enabled: bool, hour: u32) -> &'static str {
    if enabled {
        "Your eyes will thank you \u{1F60C}"
    } else if hour >= 18 || hour < 6 {
        "Good Evening \u{1F319}"
    } else {
        "Dark mode is resting \u{1F4A4}"
    }
}

fn split_from_pointer(rect: egui::Rect, x: f32) -> f32 {
    ((x - rect.left()) / rect.width()).clamp(0.0, 1.0)
}

/// Placeholder "app" layout: two text bars and one button-like block.
fn mock_layout(painter: &egui::Painter, rect: egui::Rect, bar: Color32, block: Color32) {
    let left = rect.left() + 16.0;
    let width = rect.width() - 32.0;
    let mut y = rect.top() + 36.0;
    for frac in [0.75, 0.5] {
        painter.rect_filled(
            egui::Rect::from_min_size(egui::pos2(left, y), egui::vec2(width * frac, 10.0)),
            5.0,
            bar,
        );
        y += 18.0;
    }
    painter.rect_filled(
        egui::Rect::from_min_size(egui::pos2(left, y + 10.0), egui::vec2(width / 3.0, 26.0)),
        8.0,
        block,
    );
}

fn stat(ui: &mut egui::Ui, value: &str, caption: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(value).strong());
        ui.label(RichText::new(caption).small().color(MUTED));
    });
}

/// Large circular power toggle, sized by the user's preference.
fn hero_toggle(ui: &mut egui::Ui, enabled: bool, settings: &Settings) -> egui::Response {
    let diameter = settings.toggle_size.diameter();
    let accent = settings.accent_color;
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(diameter, diameter),
        egui::Sense::click(),
    );

    if ui.is_rect_visible(rect) {
        let center = rect.center();
        let radius = diameter / 2.0;
        let painter = ui.painter();

        if enabled {
            painter.circle_filled(center, radius + 10.0, accent.glow());
        }
        let fill = if enabled {
            accent.primary()
        } else {
            Color32::from_rgb(0x27, 0x27, 0x2A)
        };
        let stroke = egui::Stroke::new(2.0, Color32::from_rgb(0x3F, 0x3F, 0x46));
        painter.circle(center, radius, fill, stroke);

        let glyph = if enabled { "\u{1F319}" } else { "\u{23FB}" };
        let glyph_color = if enabled { Color32::BLACK } else { MUTED };
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            glyph,
            egui::FontId::proportional(diameter * 0.35),
            glyph_color,
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_enabled_ignores_the_hour() {
        for hour in [0, 6, 12, 18, 23] {
            assert_eq!(greeting(true, hour), "Your eyes will thank you \u{1F60C}");
        }
    }

    #[test]
    fn test_greeting_disabled_branches_on_evening_hours() {
        assert_eq!(greeting(false, 18), "Good Evening \u{1F319}");
        assert_eq!(greeting(false, 23), "Good Evening \u{1F319}");
        assert_eq!(greeting(false, 0), "Good Evening \u{1F319}");
        assert_eq!(greeting(false, 5), "Good Evening \u{1F319}");

        assert_eq!(greeting(false, 6), "Dark mode is resting \u{1F4A4}");
        assert_eq!(greeting(false, 12), "Dark mode is resting \u{1F4A4}");
        assert_eq!(greeting(false, 17), "Dark mode is resting \u{1F4A4}");
    }

    #[test]
    fn test_preview_split_defaults_to_center() {
        assert_eq!(TabHome::default().preview_split, 0.5);
    }

    #[test]
    fn test_split_from_pointer_clamps_to_the_preview() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 0.0), egui::vec2(100.0, 170.0));
        assert_eq!(split_from_pointer(rect, 60.0), 0.5);
        assert_eq!(split_from_pointer(rect, -40.0), 0.0);
        assert_eq!(split_from_pointer(rect, 500.0), 1.0);
    }
}
