//! SegmentedControl 视图 - 分段选择器

use crate::Color;

/// SegmentedControl - 分段控件
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedControl {
    pub segments: Vec<String>,
    pub selected_index: usize,
    pub tint_color: Option<Color>,
}

impl SegmentedControl {
    pub fn new(segments: &[&str]) -> Self {
        Self {
            segments: segments.iter().map(|s| s.to_string()).collect(),
            selected_index: 0,
            tint_color: None,
        }
    }

    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }
}

impl Default for SegmentedControl {
    fn default() -> Self {
        Self::new(&[])
    }
}
