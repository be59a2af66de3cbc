//! 字体与文本属性
//! 字体在本层只是描述符（字族、字号、字重、字形），光栅化由宿主框架负责

use crate::declaration::{resolve_length, StyleDeclaration};

/// 字重
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    W100,
    W200,
    W300,
    W400,
    W500,
    W600,
    W700,
    W800,
    W900,
}

impl FontWeight {
    /// 解析 font-weight 值，未识别的返回 None
    pub fn from_css(value: &str) -> Option<FontWeight> {
        match value {
            "100" => Some(FontWeight::W100),
            "200" => Some(FontWeight::W200),
            "300" | "light" => Some(FontWeight::W300),
            "400" | "normal" => Some(FontWeight::Normal),
            "500" | "medium" => Some(FontWeight::W500),
            "600" | "semibold" => Some(FontWeight::W600),
            "700" | "bold" => Some(FontWeight::Bold),
            "800" => Some(FontWeight::W800),
            "900" | "black" => Some(FontWeight::W900),
            _ => None,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(
            self,
            FontWeight::Bold | FontWeight::W600 | FontWeight::W700 | FontWeight::W800 | FontWeight::W900
        )
    }
}

/// 字形
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    pub fn from_css(value: &str) -> Option<FontStyle> {
        match value {
            "normal" => Some(FontStyle::Normal),
            "italic" => Some(FontStyle::Italic),
            "oblique" => Some(FontStyle::Oblique),
            _ => None,
        }
    }
}

/// 文本对齐
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn from_css(value: &str) -> Option<TextAlign> {
        match value {
            "left" | "start" => Some(TextAlign::Left),
            "center" => Some(TextAlign::Center),
            "right" | "end" => Some(TextAlign::Right),
            "justify" => Some(TextAlign::Justify),
            _ => None,
        }
    }
}

/// 字体描述符
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl Font {
    pub fn new(family: &str, size: f32) -> Self {
        Self {
            family: family.to_string(),
            size,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }

    /// 系统默认字体
    pub fn system(size: f32) -> Self {
        Self::new("PingFang SC", size)
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(16.0)
    }
}

/// 字体合成：将声明中的 font-* 键合并进当前字体
/// 任意子集可以出现，缺失或无法解析的子键保留当前字体的对应属性
/// 声明中完全没有字体相关键时返回 None，调用方不改动字体
pub fn composed_font(current: &Font, declaration: &StyleDeclaration) -> Option<Font> {
    if declaration.get("font-family").is_none()
        && declaration.get("font-size").is_none()
        && declaration.get("font-style").is_none()
        && declaration.get("font-weight").is_none()
    {
        return None;
    }

    // 相对字号以 16px 根字号为基准，保证同一声明重复应用结果不变
    let family = declaration.get("font-family").and_then(first_family);
    let size = declaration
        .get("font-size")
        .and_then(|value| resolve_length(value, 16.0))
        .filter(|size| *size > 0.0);
    let weight = declaration
        .keyword("font-weight")
        .and_then(|value| FontWeight::from_css(&value));
    let style = declaration
        .keyword("font-style")
        .and_then(|value| FontStyle::from_css(&value));

    Some(Font {
        family: family.unwrap_or_else(|| current.family.clone()),
        size: size.unwrap_or(current.size),
        weight: weight.unwrap_or(current.weight),
        style: style.unwrap_or(current.style),
    })
}

/// 取 font-family 列表中第一个可用的字族名，去掉引号
fn first_family(value: &str) -> Option<String> {
    value
        .split(',')
        .map(|part| part.trim().trim_matches('"').trim_matches('\'').trim())
        .find(|part| !part.is_empty())
        .map(|part| part.to_string())
}
