use eframe::egui::Color32;

pub mod api_analysis;
pub mod api_analysis_stt;
pub mod calc_forcedark;
pub mod calc_forcedark_stt;
pub mod calc_stability;
pub mod calc_stability_stt;
pub mod darkify_app;
pub mod darkify_app_stt;
pub mod models;
mod tab_apps;
pub mod tab_apps_stt;
mod tab_guide;
mod tab_home;
pub mod tab_home_stt;
mod tab_permission;
mod tab_settings;
pub mod tab_settings_stt;
pub mod toast;
pub mod toast_stt;

pub use darkify_app::{init_egui, DarkifyApp};

/// Brand accent applied across screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentColor {
    NeonBlue,
    ElectricPurple,
}

impl AccentColor {
    pub const ALL: [AccentColor; 2] = [AccentColor::NeonBlue, AccentColor::ElectricPurple];

    pub fn slug(&self) -> &'static str {
        match self {
            AccentColor::NeonBlue => "neon-blue",
            AccentColor::ElectricPurple => "electric-purple",
        }
    }

    pub fn primary(&self) -> Color32 {
        match self {
            AccentColor::NeonBlue => Color32::from_rgb(0x00, 0xD1, 0xFF),
            AccentColor::ElectricPurple => Color32::from_rgb(0xBF, 0x00, 0xFF),
        }
    }

    /// Soft halo used behind the active hero toggle.
    pub fn glow(&self) -> Color32 {
        let c = self.primary();
        Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), 0x30)
    }
}

/// Size of the hero toggle on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleSize {
    Normal,
    Large,
    ExtraLarge,
}

impl ToggleSize {
    pub const ALL: [ToggleSize; 3] = [ToggleSize::Normal, ToggleSize::Large, ToggleSize::ExtraLarge];

    pub fn label(&self) -> &'static str {
        match self {
            ToggleSize::Normal => "Normal",
            ToggleSize::Large => "Large",
            ToggleSize::ExtraLarge => "Extra Large",
        }
    }

    pub fn diameter(&self) -> f32 {
        match self {
            ToggleSize::Normal => 110.0,
            ToggleSize::Large => 140.0,
            ToggleSize::ExtraLarge => 170.0,
        }
    }
}

/// Background depth of the simulated dark theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    DeepBlack,
    SoftDarkGray,
    BalancedDark,
}

impl ColorDepth {
    /// Slider order on the settings screen, pitch black to soft gray.
    pub const SLIDER_ORDER: [ColorDepth; 3] = [
        ColorDepth::DeepBlack,
        ColorDepth::BalancedDark,
        ColorDepth::SoftDarkGray,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorDepth::DeepBlack => "Deep Black",
            ColorDepth::SoftDarkGray => "Soft Dark Gray",
            ColorDepth::BalancedDark => "Balanced Dark",
        }
    }

    pub fn background(&self) -> Color32 {
        match self {
            ColorDepth::DeepBlack => Color32::from_rgb(0x00, 0x00, 0x00),
            ColorDepth::SoftDarkGray => Color32::from_rgb(0x12, 0x12, 0x12),
            ColorDepth::BalancedDark => Color32::from_rgb(0x1A, 0x1A, 0x1A),
        }
    }
}

/// User preferences, in-memory only for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub accent_color: AccentColor,
    pub toggle_size: ToggleSize,
    pub color_depth: ColorDepth,
    pub auto_enable_on_boot: bool,
    pub schedule_enabled: bool,
    pub safe_mode: bool,
    pub battery_trigger: bool,
    pub sunset_trigger: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            accent_color: AccentColor::NeonBlue,
            toggle_size: ToggleSize::Large,
            color_depth: ColorDepth::DeepBlack,
            auto_enable_on_boot: true,
            schedule_enabled: false,
            safe_mode: true,
            battery_trigger: false,
            sunset_trigger: false,
        }
    }
}

/// Sparse update applied over [`Settings`]; unset fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettingsPatch {
    pub accent_color: Option<AccentColor>,
    pub toggle_size: Option<ToggleSize>,
    pub color_depth: Option<ColorDepth>,
    pub auto_enable_on_boot: Option<bool>,
    pub schedule_enabled: Option<bool>,
    pub safe_mode: Option<bool>,
    pub battery_trigger: Option<bool>,
    pub sunset_trigger: Option<bool>,
}

impl Settings {
    /// Merge a sparse patch into the current preferences.
    pub fn apply(&mut self, patch: &SettingsPatch) {
        if let Some(v) = patch.accent_color {
            self.accent_color = v;
        }
        if let Some(v) = patch.toggle_size {
            self.toggle_size = v;
        }
        if let Some(v) = patch.color_depth {
            self.color_depth = v;
        }
        if let Some(v) = patch.auto_enable_on_boot {
            self.auto_enable_on_boot = v;
        }
        if let Some(v) = patch.schedule_enabled {
            self.schedule_enabled = v;
        }
        if let Some(v) = patch.safe_mode {
            self.safe_mode = v;
        }
        if let Some(v) = patch.battery_trigger {
            self.battery_trigger = v;
        }
        if let Some(v) = patch.sunset_trigger {
            self.sunset_trigger = v;
        }
    }

    /// Merge a patch and emit the matching status toast.
    pub fn update(
        &mut self,
        patch: &SettingsPatch,
        toast: &mut crate::toast::ToastState,
        now: std::time::Instant,
    ) {
        self.apply(patch);
        if let Some(accent) = patch.accent_color {
            toast.show(
                format!("Theme updated to {}", accent.slug().replace('-', " ")),
                crate::toast::ToastKind::Success,
                now,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{ToastKind, ToastState};

    #[test]
    fn test_patch_merges_only_set_fields() {
        let mut settings = Settings::default();
        settings.apply(&SettingsPatch {
            battery_trigger: Some(true),
            ..Default::default()
        });

        assert!(settings.battery_trigger);
        // Everything else stays at its default.
        assert_eq!(settings.accent_color, AccentColor::NeonBlue);
        assert_eq!(settings.toggle_size, ToggleSize::Large);
        assert!(settings.safe_mode);
        assert!(!settings.sunset_trigger);
    }

    #[test]
    fn test_accent_change_emits_success_toast() {
        let mut settings = Settings::default();
        let mut toast = ToastState::default();
        settings.update(
            &SettingsPatch {
                accent_color: Some(AccentColor::ElectricPurple),
                ..Default::default()
            },
            &mut toast,
            std::time::Instant::now(),
        );

        let current = toast.current.expect("toast expected");
        assert_eq!(current.message, "Theme updated to electric purple");
        assert_eq!(current.kind, ToastKind::Success);
        assert_eq!(settings.accent_color, AccentColor::ElectricPurple);
    }

    #[test]
    fn test_non_accent_update_is_silent() {
        let mut settings = Settings::default();
        let mut toast = ToastState::default();
        settings.update(
            &SettingsPatch {
                safe_mode: Some(false),
                ..Default::default()
            },
            &mut toast,
            std::time::Instant::now(),
        );

        assert!(toast.current.is_none());
        assert!(!settings.safe_mode);
    }
}
