//! 栏类视图样式应用 - 导航栏、搜索栏、工具栏
//!
//! 识别的键：
//! tint_color       - "color"
//! background_color - "background-color" / "background"
//! translucent      - "opacity"（小于 1.0 视为半透明）

use super::base::resolve_background;
use crate::declaration::StyleDeclaration;
use crate::views::{NavigationBar, SearchBar, Toolbar};
use crate::Color;

pub struct BarStyler;

impl BarStyler {
    pub fn apply_navigation_bar(bar: &mut NavigationBar, declaration: &StyleDeclaration) {
        apply_bar_attributes(
            &mut bar.tint_color,
            &mut bar.background_color,
            &mut bar.translucent,
            declaration,
        );
    }

    pub fn apply_search_bar(bar: &mut SearchBar, declaration: &StyleDeclaration) {
        apply_bar_attributes(
            &mut bar.tint_color,
            &mut bar.background_color,
            &mut bar.translucent,
            declaration,
        );
    }

    pub fn apply_toolbar(bar: &mut Toolbar, declaration: &StyleDeclaration) {
        apply_bar_attributes(
            &mut bar.tint_color,
            &mut bar.background_color,
            &mut bar.translucent,
            declaration,
        );
    }
}

fn apply_bar_attributes(
    tint_color: &mut Option<Color>,
    background_color: &mut Option<Color>,
    translucent: &mut bool,
    declaration: &StyleDeclaration,
) {
    if let Some(color) = declaration.color("color") {
        *tint_color = Some(color);
    }
    if let Some(color) = resolve_background(declaration) {
        *background_color = Some(color);
    }
    if let Some(opacity) = declaration.number("opacity") {
        *translucent = opacity < 1.0;
    }
}
