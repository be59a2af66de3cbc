//! ImageView 样式应用
//!
//! 识别的键：
//! tint_color       - "color"
//! background_color - "background-color" / "background"
//! opacity          - "opacity"

use super::base::resolve_background;
use crate::declaration::StyleDeclaration;
use crate::views::ImageView;

pub struct ImageViewStyler;

impl ImageViewStyler {
    pub fn apply(image: &mut ImageView, declaration: &StyleDeclaration) {
        if let Some(color) = declaration.color("color") {
            image.tint_color = Some(color);
        }
        if let Some(color) = resolve_background(declaration) {
            image.background_color = Some(color);
        }
        if let Some(opacity) = declaration.number("opacity") {
            image.opacity = opacity.clamp(0.0, 1.0);
        }
    }
}
