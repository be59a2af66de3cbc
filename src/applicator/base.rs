//! 应用器公共辅助

use crate::declaration::{resolve_length, StyleDeclaration};
use crate::font::composed_font;
use crate::{Color, Font, TextAlign};

/// 文本阴影
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextShadow {
    pub color: Color,
    /// 偏移 (x, y)，像素
    pub offset: (f32, f32),
}

/// 应用文本三件套：字体合成、文字颜色、对齐
/// Label 与 TextField 共用同一条合成规则
pub fn apply_text_attributes(
    font: &mut Font,
    text_color: &mut Color,
    text_align: &mut TextAlign,
    declaration: &StyleDeclaration,
) {
    if let Some(composed) = composed_font(font, declaration) {
        *font = composed;
    }
    if let Some(color) = declaration.color("color") {
        *text_color = color;
    }
    if let Some(align) = declaration
        .keyword("text-align")
        .and_then(|value| TextAlign::from_css(&value))
    {
        *text_align = align;
    }
}

/// 背景颜色，background-color 优先于 background 简写
pub fn resolve_background(declaration: &StyleDeclaration) -> Option<Color> {
    declaration
        .color("background-color")
        .or_else(|| declaration.color("background"))
}

/// 解析 text-shadow 简写：两个偏移长度加可选颜色，顺序不限
/// 至少需要 x、y 两个长度，否则视为格式错误返回 None
/// 第三个长度是模糊半径，本层不保留
pub fn parse_text_shadow(value: &str) -> Option<TextShadow> {
    let mut color = Color::new(0, 0, 0, 128);
    let mut offset = (0.0, 0.0);
    let mut num_idx = 0;

    for part in value.split_whitespace() {
        if part.starts_with('#') || part.starts_with("rgb") {
            if let Some(c) = Color::parse(part) {
                color = c;
            }
        } else if let Some(px) = resolve_length(part, 16.0) {
            match num_idx {
                0 => offset.0 = px,
                1 => offset.1 = px,
                _ => {}
            }
            num_idx += 1;
        }
    }

    if num_idx < 2 {
        return None;
    }

    Some(TextShadow { color, offset })
}
