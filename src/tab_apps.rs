pub use crate::tab_apps_stt::*;
use crate::api_analysis::{spawn_analysis, AnalysisQueue, AnalysisStatus, AnalysisUpdate};
use crate::calc_forcedark::SessionState;
use crate::models::FixesPatch;
use crate::toast::ToastState;
use crate::AccentColor;
use eframe::egui;
use eframe::egui::{Color32, RichText};
use std::time::Instant;

const CARD_FILL: Color32 = Color32::from_rgb(0x18, 0x18, 0x1B);
const MUTED: Color32 = Color32::from_rgb(0x71, 0x71, 0x7A);

/// Action picked up while walking the (immutably borrowed) app list, then
/// applied afterwards.
enum CardAction {
    Toggle(String),
    SetExclusion(String, bool),
    Fixes(String, FixesPatch),
    Analyze { id: String, name: String },
}

impl TabApps {
    /// Drain one analysis update into the per-app status map.
    pub fn apply_update(&mut self, update: AnalysisUpdate) {
        match update {
            AnalysisUpdate::Completed { app_id, report } => {
                self.compat_reports
                    .insert(app_id, AnalysisStatus::Ready(report));
            }
            AnalysisUpdate::Failed { app_id } => {
                self.compat_reports.insert(app_id, AnalysisStatus::NoData);
            }
        }
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        session: &mut SessionState,
        toast: &mut ToastState,
        queue: &AnalysisQueue,
        accent: AccentColor,
        now: Instant,
    ) {
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.heading(RichText::new("App Cards").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let visible = session
                    .apps
                    .iter()
                    .filter(|a| self.passes_filter(&a.name, a.is_excluded))
                    .count();
                ui.label(RichText::new(format!("{} APPS", visible)).small().color(MUTED));
                let eye = if self.show_excluded { "\u{1F441} Hide excluded" } else { "\u{1F441} Show excluded" };
                if ui.small_button(eye).clicked() {
                    self.show_excluded = !self.show_excluded;
                }
            });
        });

        ui.add_space(8.0);
        ui.add(
            egui::TextEdit::singleline(&mut self.text_filter)
                .hint_text("Filter installed applications...")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        let mut actions: Vec<CardAction> = Vec::new();
        let mut any_visible = false;

        egui::ScrollArea::vertical().show(ui, |ui| {
            for app in &session.apps {
                if !self.passes_filter(&app.name, app.is_excluded) {
                    continue;
                }
                any_visible = true;
                let expanded = self.expanded_id.as_deref() == Some(app.id.as_str());

                egui::Frame::group(ui.style()).fill(CARD_FILL).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&app.icon).size(26.0));
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&app.name).strong());
                                if app.is_forced && !app.is_excluded {
                                    ui.label(RichText::new("\u{2714}").color(accent.primary()));
                                }
                                if app.is_crashed {
                                    ui.label(
                                        RichText::new("CRASHED").small().color(Color32::LIGHT_RED),
                                    );
                                }
                                if app.is_excluded {
                                    ui.label(
                                        RichText::new("EXCLUDED").small().color(Color32::LIGHT_RED),
                                    );
                                }
                            });
                            ui.label(
                                RichText::new(app.category.to_uppercase()).small().color(MUTED),
                            );
                        });

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button(if expanded { "\u{25B4}" } else { "\u{25BE}" }).clicked()
                            {
                                self.expanded_id =
                                    if expanded { None } else { Some(app.id.clone()) };
                            }
                            if !app.is_excluded {
                                let label = if app.is_forced { "ON" } else { "OFF" };
                                let fill = if app.is_forced {
                                    accent.primary()
                                } else {
                                    Color32::from_rgb(0x27, 0x27, 0x2A)
                                };
                                let text_color =
                                    if app.is_forced { Color32::BLACK } else { MUTED };
                                let button = egui::Button::new(
                                    RichText::new(label).strong().color(text_color),
                                )
                                .fill(fill);
                                if ui.add(button).clicked() {
                                    actions.push(CardAction::Toggle(app.id.clone()));
                                }
                            }
                        });
                    });

                    if expanded {
                        ui.separator();

                        if !app.is_excluded {
                            ui.label(RichText::new("RENDERING FIXES").small().color(MUTED));
                            let fixes = &app.advanced_fixes;
                            let rows: [(&str, bool, fn(bool) -> FixesPatch); 4] = [
                                ("Invert light colors only", fixes.invert_light_only, |v| {
                                    FixesPatch { invert_light_only: Some(v), ..Default::default() }
                                }),
                                ("Preserve original images", fixes.preserve_images, |v| {
                                    FixesPatch { preserve_images: Some(v), ..Default::default() }
                                }),
                                (
                                    "Reduce contrast artifacts",
                                    fixes.reduce_contrast_artifacts,
                                    |v| FixesPatch {
                                        reduce_contrast_artifacts: Some(v),
                                        ..Default::default()
                                    },
                                ),
                                ("Fix white text/white bg", fixes.fix_white_on_white, |v| {
                                    FixesPatch { fix_white_on_white: Some(v), ..Default::default() }
                                }),
                            ];
                            for (label, value, patch_for) in rows {
                                ui.horizontal(|ui| {
                                    ui.label(label);
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            let mut on = value;
                                            if toggle_ui(ui, &mut on, accent.primary()).changed() {
                                                actions.push(CardAction::Fixes(
                                                    app.id.clone(),
                                                    patch_for(on),
                                                ));
                                            }
                                        },
                                    );
                                });
                            }
                            ui.add_space(4.0);
                        }

                        let (label, excluded) = if app.is_excluded {
                            ("Restore App", false)
                        } else {
                            ("Exclude App", true)
                        };
                        if ui.button(label).clicked() {
                            actions.push(CardAction::SetExclusion(app.id.clone(), excluded));
                        }

                        if let Some(warning) = &app.compatibility_warning {
                            if !app.is_excluded {
                                ui.add_space(4.0);
                                ui.label(
                                    RichText::new(format!("\u{26A0} {}", warning))
                                        .italics()
                                        .color(Color32::from_rgb(0xF5, 0x9E, 0x0B)),
                                );
                            }
                        }

                        ui.add_space(4.0);
                        self.show_analysis_row(ui, &app.id, &app.name, &mut actions);
                    }
                });
                ui.add_space(6.0);
            }

            if !any_visible {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("No results found").strong().color(MUTED));
                    ui.label(
                        RichText::new("Adjust your search or exclusion filters")
                            .small()
                            .color(MUTED),
                    );
                });
            }
        });

        for action in actions {
            match action {
                CardAction::Toggle(id) => session.toggle_app(&id),
                CardAction::SetExclusion(id, excluded) => {
                    session.set_exclusion(&id, excluded, toast, now)
                }
                CardAction::Fixes(id, patch) => session.update_fixes(&id, &patch),
                CardAction::Analyze { id, name } => {
                    self.compat_reports.insert(id.clone(), AnalysisStatus::Pending);
                    spawn_analysis(id, name, queue.clone());
                }
            }
        }
    }

    fn show_analysis_row(
        &self,
        ui: &mut egui::Ui,
        app_id: &str,
        app_name: &str,
        actions: &mut Vec<CardAction>,
    ) {
        match self.compat_reports.get(app_id) {
            None => {
                if ui.button("Analyze compatibility").clicked() {
                    actions.push(CardAction::Analyze {
                        id: app_id.to_string(),
                        name: app_name.to_string(),
                    });
                }
            }
            Some(AnalysisStatus::Pending) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Analyzing...").color(MUTED));
                });
            }
            Some(AnalysisStatus::NoData) => {
                ui.label(RichText::new("No analysis data available").color(MUTED));
            }
            Some(AnalysisStatus::Ready(report)) => {
                ui.label(
                    RichText::new(format!(
                        "Native dark mode: {}  \u{2022}  Risk: {}",
                        if report.has_native_support { "yes" } else { "no" },
                        report.risk_level.label()
                    ))
                    .small(),
                );
                ui.label(RichText::new(&report.potential_issues).small().color(MUTED));
            }
        }
    }

    fn passes_filter(&self, name: &str, is_excluded: bool) -> bool {
        let matches_search = self.text_filter.is_empty()
            || name.to_lowercase().contains(&self.text_filter.to_lowercase());
        let matches_excluded = self.show_excluded || !is_excluded;
        matches_search && matches_excluded
    }
}

/// Pill-shaped switch; fills with the accent color while on.
pub(crate) fn toggle_ui(ui: &mut egui::Ui, on: &mut bool, accent: Color32) -> egui::Response {
    let desired_size = ui.spacing().interact_size.y * egui::vec2(2.0, 1.0);
    let (rect, mut response) = ui.allocate_exact_size(desired_size, egui::Sense::click());
    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }
    response.widget_info(|| {
        egui::WidgetInfo::selected(egui::WidgetType::Checkbox, ui.is_enabled(), *on, "")
    });

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool_responsive(response.id, *on);
        let visuals = ui.style().interact_selectable(&response, *on);
        let rect = rect.expand(visuals.expansion);
        let radius = 0.5 * rect.height();
        let fill = if *on {
            accent
        } else {
            Color32::from_rgb(0x27, 0x27, 0x2A)
        };
        ui.painter()
            .rect(rect, radius, fill, visuals.bg_stroke, egui::StrokeKind::Inside);
        let circle_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        let center = egui::pos2(circle_x, rect.center().y);
        ui.painter()
            .circle(center, 0.75 * radius, Color32::WHITE, visuals.fg_stroke);
    }

    response
}
