//! 栏类视图 - 导航栏、搜索栏、工具栏
//! 三者共享同一组可样式化属性：栏着色、栏背景、半透明

use crate::Color;

/// NavigationBar - 导航栏
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationBar {
    pub title: String,
    pub tint_color: Option<Color>,
    pub background_color: Option<Color>,
    pub translucent: bool,
}

impl NavigationBar {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            tint_color: None,
            background_color: None,
            translucent: false,
        }
    }
}

impl Default for NavigationBar {
    fn default() -> Self {
        Self::new("")
    }
}

/// SearchBar - 搜索栏
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBar {
    pub placeholder: String,
    pub tint_color: Option<Color>,
    pub background_color: Option<Color>,
    pub translucent: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            placeholder: String::new(),
            tint_color: None,
            background_color: None,
            translucent: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Toolbar - 工具栏
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toolbar {
    pub tint_color: Option<Color>,
    pub background_color: Option<Color>,
    pub translucent: bool,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }
}
