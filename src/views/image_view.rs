//! ImageView 视图 - 图片展示

use crate::Color;

/// ImageView - 图片视图
#[derive(Debug, Clone, PartialEq)]
pub struct ImageView {
    /// 图片来源（路径或 URL），由宿主负责加载
    pub source: Option<String>,
    pub tint_color: Option<Color>,
    pub background_color: Option<Color>,
    pub opacity: f32,
}

impl ImageView {
    pub fn new(source: &str) -> Self {
        Self {
            source: Some(source.to_string()),
            tint_color: None,
            background_color: None,
            opacity: 1.0,
        }
    }

    pub fn empty() -> Self {
        Self {
            source: None,
            tint_color: None,
            background_color: None,
            opacity: 1.0,
        }
    }
}

impl Default for ImageView {
    fn default() -> Self {
        Self::empty()
    }
}
