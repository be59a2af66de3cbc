//! 样式应用器 - 按视图类型把样式声明映射到原生属性
//! 每个视图类型一个应用器文件，便于维护

mod bars;
mod base;
mod button;
mod image_view;
mod label;
mod segmented_control;
mod table;
mod text_field;

pub use bars::BarStyler;
pub use base::{parse_text_shadow, TextShadow};
pub use button::ButtonStyler;
pub use image_view::ImageViewStyler;
pub use label::LabelStyler;
pub use segmented_control::SegmentedControlStyler;
pub use table::TableStyler;
pub use text_field::TextFieldStyler;

use crate::declaration::StyleDeclaration;
use crate::views::{View, ViewKind};

/// 把已解析的样式声明应用到目标视图
/// 未识别的键被忽略；缺失的键保留原值；单个值解析失败只跳过该属性，
/// 不会向上抛错 - 坏样式规则的代价是降级渲染而不是崩溃
pub fn apply_styles(declaration: &StyleDeclaration, view: &mut View) {
    match view.kind_mut() {
        // 基础视图只承载选择器标识，没有可应用的属性
        ViewKind::View => {}
        ViewKind::Button(button) => ButtonStyler::apply(button, declaration),
        ViewKind::SegmentedControl(segmented) => {
            SegmentedControlStyler::apply(segmented, declaration)
        }
        ViewKind::TextField(field) => TextFieldStyler::apply(field, declaration),
        ViewKind::NavigationBar(bar) => BarStyler::apply_navigation_bar(bar, declaration),
        ViewKind::SearchBar(bar) => BarStyler::apply_search_bar(bar, declaration),
        ViewKind::Toolbar(bar) => BarStyler::apply_toolbar(bar, declaration),
        ViewKind::ImageView(image) => ImageViewStyler::apply(image, declaration),
        ViewKind::Label(label) => LabelStyler::apply(label, declaration),
        ViewKind::TableView(table) => TableStyler::apply_table_view(table, declaration),
        ViewKind::TableViewCell(cell) => TableStyler::apply_cell(cell, declaration),
    }
}
