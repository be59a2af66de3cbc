//! Button 样式应用
//! 按钮把整条声明转交给标题 Label 的应用规则

use super::label::LabelStyler;
use crate::declaration::StyleDeclaration;
use crate::views::Button;

pub struct ButtonStyler;

impl ButtonStyler {
    pub fn apply(button: &mut Button, declaration: &StyleDeclaration) {
        LabelStyler::apply(&mut button.title_label, declaration);
    }
}
