//! TextField 样式应用
//!
//! 识别的键：
//! font             - "font-family, font-size, font-style, font-weight"
//! text_color       - "color"
//! text_align       - "text-align"

use super::base::apply_text_attributes;
use crate::declaration::StyleDeclaration;
use crate::views::TextField;

pub struct TextFieldStyler;

impl TextFieldStyler {
    pub fn apply(field: &mut TextField, declaration: &StyleDeclaration) {
        apply_text_attributes(
            &mut field.font,
            &mut field.text_color,
            &mut field.text_align,
            declaration,
        );
    }
}
