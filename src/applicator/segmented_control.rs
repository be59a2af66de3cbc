//! SegmentedControl 样式应用
//!
//! 识别的键：
//! tint_color       - "color"

use crate::declaration::StyleDeclaration;
use crate::views::SegmentedControl;

pub struct SegmentedControlStyler;

impl SegmentedControlStyler {
    pub fn apply(segmented: &mut SegmentedControl, declaration: &StyleDeclaration) {
        if let Some(color) = declaration.color("color") {
            segmented.tint_color = Some(color);
        }
    }
}
