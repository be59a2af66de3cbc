//! 表格视图样式应用
//!
//! 识别的键：
//! background_color - "background-color" / "background"
//! separator_color  - "border-color"（仅 TableView）

use super::base::resolve_background;
use crate::declaration::StyleDeclaration;
use crate::views::{TableView, TableViewCell};

pub struct TableStyler;

impl TableStyler {
    pub fn apply_table_view(table: &mut TableView, declaration: &StyleDeclaration) {
        if let Some(color) = resolve_background(declaration) {
            table.background_color = Some(color);
        }
        if let Some(color) = declaration.color("border-color") {
            table.separator_color = Some(color);
        }
    }

    pub fn apply_cell(cell: &mut TableViewCell, declaration: &StyleDeclaration) {
        if let Some(color) = resolve_background(declaration) {
            cell.background_color = Some(color);
        }
    }
}
