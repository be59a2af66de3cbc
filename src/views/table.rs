//! 表格视图 - 列表与单元格

use crate::Color;

/// TableView - 列表视图
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
    pub background_color: Option<Color>,
    pub separator_color: Option<Color>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }
}

/// TableViewCell - 列表单元格
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableViewCell {
    pub background_color: Option<Color>,
}

impl TableViewCell {
    pub fn new() -> Self {
        Self::default()
    }
}
