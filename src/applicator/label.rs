//! Label 样式应用
//!
//! 识别的键：
//! font             - "font-family, font-size, font-style, font-weight"
//! text_color       - "color"
//! text_align       - "text-align"
//! shadow           - "text-shadow"

use super::base::{apply_text_attributes, parse_text_shadow};
use crate::declaration::StyleDeclaration;
use crate::views::Label;

pub struct LabelStyler;

impl LabelStyler {
    pub fn apply(label: &mut Label, declaration: &StyleDeclaration) {
        apply_text_attributes(
            &mut label.font,
            &mut label.text_color,
            &mut label.text_align,
            declaration,
        );

        if let Some(value) = declaration.keyword("text-shadow") {
            if value == "none" {
                label.shadow_color = None;
                label.shadow_offset = (0.0, 0.0);
            } else if let Some(shadow) = parse_text_shadow(&value) {
                label.shadow_color = Some(shadow.color);
                label.shadow_offset = shadow.offset;
            }
        }
    }
}
