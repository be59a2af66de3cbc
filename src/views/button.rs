//! Button 视图 - 按钮
//! 按钮的文本外观全部落在内部的标题 Label 上

use super::Label;
use crate::Color;

/// Button - 按钮
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub title_label: Label,
}

impl Button {
    pub fn new(title: &str) -> Self {
        Self {
            title_label: Label::new(title).with_text_color(Color::from_hex(0x007AFF)),
        }
    }

    pub fn title(&self) -> &str {
        &self.title_label.text
    }

    pub fn set_title(&mut self, title: &str) {
        self.title_label.set_text(title);
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new("")
    }
}
