use crate::AccentColor;
use eframe::egui;
use eframe::egui::{Color32, RichText};

const CARD_FILL: Color32 = Color32::from_rgb(0x18, 0x18, 0x1B);
const MUTED: Color32 = Color32::from_rgb(0x71, 0x71, 0x7A);

const STEPS: [(&str, &str); 4] = [
    (
        "Enable Developer Options",
        "Go to Settings > About Phone > Tap \"Build Number\" 7 times.",
    ),
    (
        "Find Force Dark Mode",
        "Inside Developer Options, search for \"Override force-dark\" or \"Force Dark\".",
    ),
    (
        "Apply Toggle",
        "Enable the toggle and return to Darkify Pro to manage app-specific overrides.",
    ),
    (
        "ADB Override (Expert)",
        "Use command: adb shell settings put global debug.hwui.force_dark true",
    ),
];

const FAQS: [(&str, &str); 3] = [
    (
        "Why doesn't it work on all apps?",
        "Some apps use non-standard rendering engines (like custom WebView \
         implementations) that ignore system-level GPU instructions. Darkify Pro \
         attempts to override these, but some apps remain locked by their developers.",
    ),
    (
        "Why does Android restrict dark mode?",
        "Android security policy prevents apps from modifying the graphics buffer of \
         other apps. This is why you need to enable 'Force Dark' in Developer Options \
         manually. It gives the OS permission to override layouts.",
    ),
    (
        "Why do some apps look weird?",
        "Force Dark works by inverting luminance. If an app was already dark but used \
         light assets, or if it has complex transparency, colors can 'clash'. Use our \
         'Advanced Rendering Fixes' in the app list to correct these artifacts.",
    ),
];

pub fn show(ui: &mut egui::Ui, accent: AccentColor) {
    ui.add_space(16.0);
    ui.heading(RichText::new("Knowledge Base").strong());
    ui.label(
        RichText::new("MASTERING FORCE DARK MODE")
            .small()
            .color(MUTED),
    );
    ui.add_space(8.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Frame::group(ui.style()).fill(CARD_FILL).show(ui, |ui| {
            ui.label(RichText::new("Manual Setup Required").strong());
            ui.label(
                RichText::new(
                    "Android security prevents apps from changing system-level graphics \
                     settings directly. Follow these steps to unlock the full power of \
                     Darkify Pro.",
                )
                .color(MUTED),
            );
        });

        ui.add_space(8.0);
        for (idx, (title, desc)) in STEPS.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{}", idx + 1))
                        .strong()
                        .color(accent.primary()),
                );
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("Step {}: {}", idx + 1, title)).strong());
                    ui.label(RichText::new(*desc).small().color(MUTED));
                });
            });
            ui.add_space(6.0);
        }

        ui.add_space(8.0);
        ui.label(RichText::new("COMMON QUESTIONS").small().color(MUTED));
        for (question, answer) in FAQS {
            ui.collapsing(question, |ui| {
                ui.label(RichText::new(answer).small().color(MUTED));
            });
        }

        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "\"Darkify Pro uses Accessibility Services to identify the current \
                 foreground application and apply saved force-dark preferences \
                 dynamically. No personal data is ever collected.\"",
            )
            .small()
            .italics()
            .color(Color32::from_rgb(0x93, 0xC5, 0xFD)),
        );
        ui.add_space(12.0);
    });
}
