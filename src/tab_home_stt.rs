/// Home screen state.
#[derive(Debug, Clone, PartialEq)]
pub struct TabHome {
    /// Divider position of the before/after preview, 0.0 (all dark) to
    /// 1.0 (all light).
    pub preview_split: f32,
}

impl Default for TabHome {
    fn default() -> Self {
        Self { preview_split: 0.5 }
    }
}
