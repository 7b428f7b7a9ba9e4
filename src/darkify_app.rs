pub use crate::darkify_app_stt::*;
use crate::calc_forcedark::SessionState;
use crate::calc_stability::StabilityMonitor;
use crate::tab_apps::TabApps;
use crate::tab_home::TabHome;
use crate::tab_settings::TabSettings;
use crate::toast::{ToastKind, ToastState};
use crate::{tab_guide, tab_permission, Settings};
use crossbeam_queue::SegQueue;
use eframe::egui;
use eframe::egui::{Color32, RichText};
use std::sync::Arc;
use std::time::{Duration, Instant};

const MUTED: Color32 = Color32::from_rgb(0x71, 0x71, 0x7A);

/// One-time egui context setup.
pub fn init_egui(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::dark());
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

impl Default for DarkifyApp {
    fn default() -> Self {
        Self::new()
    }
}

impl DarkifyApp {
    pub fn new() -> Self {
        Self {
            screen: AppScreen::Permissions,
            session: SessionState::new(),
            settings: Settings::default(),
            toast: ToastState::new(),
            monitor: StabilityMonitor::new(),
            tab_apps: TabApps::default(),
            tab_home: TabHome::default(),
            tab_settings: TabSettings::default(),
            analysis_queue: Arc::new(SegQueue::new()),
        }
    }

    /// Process all pending updates from analysis worker threads.
    fn process_updates(&mut self) {
        while let Some(update) = self.analysis_queue.pop() {
            self.tab_apps.apply_update(update);
        }
    }

    fn show_navigation(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("navigation")
            .frame(
                egui::Frame::default()
                    .fill(Color32::from_rgb(0x09, 0x09, 0x0B))
                    .inner_margin(egui::Margin::symmetric(8, 8)),
            )
            .show(ctx, |ui| {
                ui.columns(4, |cols| {
                    let entries = [
                        (AppScreen::Home, "\u{1F3E0}", "Home"),
                        (AppScreen::AppList, "\u{1F4F1}", "Apps"),
                        (AppScreen::Settings, "\u{2699}", "Settings"),
                        (AppScreen::Guide, "\u{1F4D6}", "Guide"),
                    ];
                    for (col, (screen, icon, label)) in cols.iter_mut().zip(entries) {
                        let selected = self.screen == screen;
                        let color = if selected {
                            self.settings.accent_color.primary()
                        } else {
                            MUTED
                        };
                        col.vertical_centered(|ui| {
                            let text = RichText::new(format!("{}\n{}", icon, label)).color(color);
                            if ui.selectable_label(selected, text).clicked() {
                                self.screen = screen;
                            }
                        });
                    }
                });
            });
    }

    fn show_toast(&self, ctx: &egui::Context, now: Instant) {
        let Some(toast) = self.toast.active(now) else {
            return;
        };
        let (glyph, color) = match toast.kind {
            ToastKind::Error => ("\u{26A0}", Color32::LIGHT_RED),
            ToastKind::Success => ("\u{2714}", Color32::LIGHT_GREEN),
            ToastKind::Info => ("\u{2139}", self.settings.accent_color.primary()),
        };
        egui::Area::new(egui::Id::new("toast_overlay"))
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -72.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(Color32::from_rgb(0x18, 0x18, 0x1B))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(glyph).color(color));
                            ui.label(RichText::new(&toast.message).strong());
                        });
                    });
            });
    }
}

impl eframe::App for DarkifyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.process_updates();

        let armed = self.session.is_global_enabled && self.settings.safe_mode;
        self.monitor.sync(armed, now);
        self.monitor.poll(now, &mut self.session, &mut self.toast);
        self.toast.clear_expired(now);

        if self.screen != AppScreen::Permissions {
            self.show_navigation(ctx);
        }

        let background = self.settings.color_depth.background();
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(background)
                    .inner_margin(egui::Margin::symmetric(16, 0)),
            )
            .show(ctx, |ui| {
                let Self {
                    screen,
                    session,
                    settings,
                    toast,
                    tab_apps,
                    tab_home,
                    tab_settings,
                    analysis_queue,
                    ..
                } = self;
                match screen {
                    AppScreen::Permissions => {
                        if tab_permission::show(ui, settings.accent_color) {
                            log::info!("simulated permission granted");
                            *screen = AppScreen::Home;
                        }
                    }
                    AppScreen::Home => tab_home.show(ui, session, settings, toast, now),
                    AppScreen::AppList => tab_apps.show(
                        ui,
                        session,
                        toast,
                        analysis_queue,
                        settings.accent_color,
                        now,
                    ),
                    AppScreen::Settings => tab_settings.show(ui, settings, toast, now),
                    AppScreen::Guide => tab_guide::show(ui, settings.accent_color),
                }
            });

        self.show_toast(ctx, now);

        // Keep the stability monitor and toast expiry ticking even while
        // the user is idle.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
