//! TextField 视图 - 单行文本输入

use crate::{Color, Font, TextAlign};

/// TextField - 文本输入框
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    pub value: String,
    pub placeholder: String,
    pub font: Font,
    pub text_color: Color,
    pub text_align: TextAlign,
}

impl TextField {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            font: Font::default(),
            text_color: Color::BLACK,
            text_align: TextAlign::Left,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}
