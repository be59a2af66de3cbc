//! Label 视图 - 静态文本

use crate::{Color, Font, TextAlign};

/// Label - 文本标签
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub font: Font,
    pub text_color: Color,
    pub text_align: TextAlign,
    pub shadow_color: Option<Color>,
    /// 阴影偏移 (x, y)，像素
    pub shadow_offset: (f32, f32),
}

impl Label {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font: Font::default(),
            text_color: Color::BLACK,
            text_align: TextAlign::Left,
            shadow_color: None,
            shadow_offset: (0.0, 0.0),
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new("")
    }
}
