/// Per-app force-dark rendering fix flags, each independently togglable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderingFixes {
    pub invert_light_only: bool,
    pub preserve_images: bool,
    pub reduce_contrast_artifacts: bool,
    pub fix_white_on_white: bool,
}

impl Default for RenderingFixes {
    fn default() -> Self {
        Self {
            invert_light_only: true,
            preserve_images: true,
            reduce_contrast_artifacts: false,
            fix_white_on_white: true,
        }
    }
}

/// Sparse update over [`RenderingFixes`]; unset flags are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixesPatch {
    pub invert_light_only: Option<bool>,
    pub preserve_images: Option<bool>,
    pub reduce_contrast_artifacts: Option<bool>,
    pub fix_white_on_white: Option<bool>,
}

impl RenderingFixes {
    pub fn apply(&mut self, patch: &FixesPatch) {
        if let Some(v) = patch.invert_light_only {
            self.invert_light_only = v;
        }
        if let Some(v) = patch.preserve_images {
            self.preserve_images = v;
        }
        if let Some(v) = patch.reduce_contrast_artifacts {
            self.reduce_contrast_artifacts = v;
        }
        if let Some(v) = patch.fix_white_on_white {
            self.fix_white_on_white = v;
        }
    }
}

/// One manageable application and its override record.
#[derive(Debug, Clone, PartialEq)]
pub struct AppRecord {
    /// Stable identifier, unique within the registry.
    pub id: String,
    pub name: String,
    pub category: String,
    /// Emoji glyph shown on the app card.
    pub icon: String,
    /// Informational only; has no effect on override behavior.
    pub supports_native_dark: bool,
    /// Whether the force-dark override is currently active for this app.
    pub is_forced: bool,
    /// Whether the app is blacklisted from the global override.
    pub is_excluded: bool,
    /// Transient flag set by the stability monitor; cleared on toggle or
    /// exclusion changes.
    pub is_crashed: bool,
    pub compatibility_warning: Option<String>,
    pub advanced_fixes: RenderingFixes,
}

impl AppRecord {
    fn seeded(
        id: &str,
        name: &str,
        category: &str,
        icon: &str,
        supports_native_dark: bool,
        compatibility_warning: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            icon: icon.to_string(),
            supports_native_dark,
            is_forced: false,
            is_excluded: false,
            is_crashed: false,
            compatibility_warning: compatibility_warning.map(str::to_string),
            advanced_fixes: RenderingFixes::default(),
        }
    }
}

/// Fixed seed list loaded once at startup; the registry resets to this on
/// every restart.
pub fn initial_apps() -> Vec<AppRecord> {
    vec![
        AppRecord::seeded("1", "Instagram", "Social", "\u{1F4F8}", true, None),
        AppRecord::seeded(
            "2",
            "Snapchat",
            "Social",
            "\u{1F47B}",
            false,
            Some("May not render correctly"),
        ),
        AppRecord::seeded(
            "3",
            "Legacy Banking",
            "Finance",
            "\u{1F3E6}",
            false,
            Some("Text contrast issues likely"),
        ),
        AppRecord::seeded("4", "Amazon Shopping", "Shopping", "\u{1F4E6}", true, None),
        AppRecord::seeded("5", "WhatsApp", "Communication", "\u{1F4AC}", true, None),
        AppRecord::seeded(
            "6",
            "Old Browser X",
            "Utility",
            "\u{1F310}",
            false,
            Some("Images might invert"),
        ),
        AppRecord::seeded("7", "Messenger", "Communication", "\u{24C2}\u{FE0F}", true, None),
        AppRecord::seeded("8", "Reddit", "Social", "\u{1F916}", true, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_fixes() {
        let fixes = RenderingFixes::default();
        assert!(fixes.invert_light_only);
        assert!(fixes.preserve_images);
        assert!(!fixes.reduce_contrast_artifacts);
        assert!(fixes.fix_white_on_white);
    }

    #[test]
    fn test_fixes_patch_leaves_unset_flags_untouched() {
        let mut fixes = RenderingFixes::default();
        fixes.apply(&FixesPatch {
            reduce_contrast_artifacts: Some(true),
            ..Default::default()
        });

        assert!(fixes.reduce_contrast_artifacts);
        assert!(fixes.invert_light_only);
        assert!(fixes.preserve_images);
        assert!(fixes.fix_white_on_white);
    }

    #[test]
    fn test_seed_list_shape() {
        let apps = initial_apps();
        assert_eq!(apps.len(), 8);

        let ids: HashSet<&str> = apps.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), apps.len(), "ids must be unique");

        for app in &apps {
            assert!(!app.is_forced);
            assert!(!app.is_excluded);
            assert!(!app.is_crashed);
        }

        // Spot-check a couple of seeded records.
        let snapchat = apps.iter().find(|a| a.name == "Snapchat").unwrap();
        assert!(!snapchat.supports_native_dark);
        assert!(snapchat.compatibility_warning.is_some());

        let reddit = apps.iter().find(|a| a.name == "Reddit").unwrap();
        assert!(reddit.supports_native_dark);
        assert!(reddit.compatibility_warning.is_none());
    }
}
