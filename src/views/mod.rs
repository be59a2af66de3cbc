//! 视图模块 - 本层可样式化的原生视图集合

mod bars;
mod button;
mod image_view;
mod label;
mod segmented_control;
mod table;
mod text_field;
mod view;

pub use bars::{NavigationBar, SearchBar, Toolbar};
pub use button::Button;
pub use image_view::ImageView;
pub use label::Label;
pub use segmented_control::SegmentedControl;
pub use table::{TableView, TableViewCell};
pub use text_field::TextField;
pub use view::{View, ViewKind};
