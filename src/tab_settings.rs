pub use crate::tab_settings_stt::*;
use crate::tab_apps::toggle_ui;
use crate::toast::{ToastKind, ToastState};
use crate::{AccentColor, ColorDepth, Settings, SettingsPatch, ToggleSize};
use eframe::egui;
use eframe::egui::{Color32, RichText, Stroke};
use std::time::{Duration, Instant};

const SECTION_FILL: Color32 = Color32::from_rgb(0x18, 0x18, 0x1B);
const MUTED: Color32 = Color32::from_rgb(0x71, 0x71, 0x7A);

/// Simulated duration of the "check for updates" roundtrip.
const UPDATE_CHECK_DELAY: Duration = Duration::from_millis(1500);

impl TabSettings {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        settings: &mut Settings,
        toast: &mut ToastState,
        now: Instant,
    ) {
        // Resolve a pending fake update check.
        if self.checking_updates {
            if let Some(started) = self.check_started {
                if now.duration_since(started) >= UPDATE_CHECK_DELAY {
                    self.checking_updates = false;
                    self.check_started = None;
                    toast.show(
                        "You are on the latest version: v1.0.0 Stable",
                        ToastKind::Info,
                        now,
                    );
                }
            }
        }

        let mut patch = SettingsPatch::default();
        let accent = settings.accent_color;

        ui.add_space(16.0);
        ui.heading(RichText::new("Preferences").strong());
        ui.add_space(8.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.label(RichText::new("VISUAL INTERFACE").small().color(MUTED));
            egui::Frame::group(ui.style()).fill(SECTION_FILL).show(ui, |ui| {
                ui.label(RichText::new("Brand Accent").small().color(MUTED));
                ui.horizontal(|ui| {
                    for color in AccentColor::ALL {
                        let selected = settings.accent_color == color;
                        let stroke = if selected {
                            Stroke::new(2.0, Color32::WHITE)
                        } else {
                            Stroke::NONE
                        };
                        let swatch = egui::Button::new("    ")
                            .fill(color.primary())
                            .stroke(stroke);
                        if ui.add(swatch).clicked() && !selected {
                            patch.accent_color = Some(color);
                        }
                    }
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Color Depth").small().color(MUTED));
                    ui.label(
                        RichText::new(settings.color_depth.label())
                            .small()
                            .color(accent.primary()),
                    );
                });
                let mut depth_idx = ColorDepth::SLIDER_ORDER
                    .iter()
                    .position(|d| *d == settings.color_depth)
                    .unwrap_or(0);
                if ui
                    .add(egui::Slider::new(&mut depth_idx, 0..=2).show_value(false))
                    .changed()
                {
                    patch.color_depth = Some(ColorDepth::SLIDER_ORDER[depth_idx]);
                }
                ui.horizontal(|ui| {
                    ui.label(RichText::new("PITCH").small().color(MUTED));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new("SOFT").small().color(MUTED));
                    });
                });

                ui.add_space(8.0);
                ui.label(RichText::new("Toggle Dimensions").small().color(MUTED));
                ui.horizontal(|ui| {
                    for size in ToggleSize::ALL {
                        let selected = settings.toggle_size == size;
                        if ui.selectable_label(selected, size.label()).clicked() && !selected {
                            patch.toggle_size = Some(size);
                        }
                    }
                });
            });

            ui.add_space(12.0);
            ui.label(RichText::new("SMART TRIGGERS").small().color(MUTED));
            egui::Frame::group(ui.style()).fill(SECTION_FILL).show(ui, |ui| {
                trigger_row(
                    ui,
                    "Battery Saver Mode",
                    "Enable when battery < 30%",
                    settings.battery_trigger,
                    accent,
                    |v| patch.battery_trigger = Some(v),
                );
                trigger_row(
                    ui,
                    "Sunset to Sunrise",
                    "Follow the sun automatically",
                    settings.sunset_trigger,
                    accent,
                    |v| patch.sunset_trigger = Some(v),
                );
                trigger_row(
                    ui,
                    "Custom Schedule",
                    "Enable on a fixed timetable",
                    settings.schedule_enabled,
                    accent,
                    |v| patch.schedule_enabled = Some(v),
                );
                trigger_row(
                    ui,
                    "Auto-enable on Boot",
                    "Restore the override after restart",
                    settings.auto_enable_on_boot,
                    accent,
                    |v| patch.auto_enable_on_boot = Some(v),
                );
            });

            ui.add_space(12.0);
            ui.label(RichText::new("STABILITY").small().color(MUTED));
            egui::Frame::group(ui.style()).fill(SECTION_FILL).show(ui, |ui| {
                trigger_row(
                    ui,
                    "Safe Mode",
                    "Auto-revert apps that crash under Force Dark",
                    settings.safe_mode,
                    accent,
                    |v| patch.safe_mode = Some(v),
                );
            });

            ui.add_space(12.0);
            ui.label(RichText::new("ABOUT").small().color(MUTED));
            egui::Frame::group(ui.style()).fill(SECTION_FILL).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Darkify Pro v1.0.0");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.checking_updates {
                            ui.spinner();
                        } else if ui.button("Check for updates").clicked() {
                            self.checking_updates = true;
                            self.check_started = Some(now);
                        }
                    });
                });
            });
            ui.add_space(12.0);
        });

        if patch != SettingsPatch::default() {
            settings.update(&patch, toast, now);
        }
    }
}

/// One labelled row with a trailing accent switch.
fn trigger_row(
    ui: &mut egui::Ui,
    title: &str,
    subtitle: &str,
    value: bool,
    accent: AccentColor,
    mut on_change: impl FnMut(bool),
) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(title).strong());
            ui.label(RichText::new(subtitle).small().color(MUTED));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut on = value;
            if toggle_ui(ui, &mut on, accent.primary()).changed() {
                on_change(on);
            }
        });
    });
    ui.add_space(4.0);
}
