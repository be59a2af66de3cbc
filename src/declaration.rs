//! 样式声明 - 外部样式引擎解析出的属性映射
//! 本层只读取声明，不负责选择器匹配与层叠计算

use crate::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 长度单位
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthUnit {
    Px,
    Pt,
    Percent,
    Em,
    Rem,
}

/// 样式声明 - 属性名到属性值的只读映射
/// 属性名匹配不区分大小写；未识别的属性被调用方忽略
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleDeclaration {
    properties: HashMap<String, String>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
        }
    }

    /// 从样式引擎返回的 JSON 对象构建声明
    /// 数字和布尔值转为字符串，其余非字符串值跳过
    pub fn from_json(json: &str) -> Result<Self, String> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| e.to_string())?;

        let object = match value {
            serde_json::Value::Object(map) => map,
            _ => return Err(format!("expected JSON object, got: {}", json)),
        };

        let mut declaration = Self::new();
        for (name, value) in object {
            match value {
                serde_json::Value::String(s) => declaration.set(&name, &s),
                serde_json::Value::Number(n) => declaration.set(&name, &n.to_string()),
                serde_json::Value::Bool(b) => declaration.set(&name, if b { "true" } else { "false" }),
                _ => {}
            }
        }
        Ok(declaration)
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.properties
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    /// 按属性名取原始值（不区分大小写）
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// 取颜色值，缺失或格式错误返回 None
    pub fn color(&self, name: &str) -> Option<Color> {
        self.get(name).and_then(Color::parse)
    }

    /// 取绝对长度（像素），相对单位按 16px 基准
    pub fn length(&self, name: &str) -> Option<f32> {
        self.get(name).and_then(|value| resolve_length(value, 16.0))
    }

    /// 取纯数字值
    pub fn number(&self, name: &str) -> Option<f32> {
        self.get(name).and_then(|value| value.trim().parse().ok())
    }

    /// 取关键字值（小写化）
    pub fn keyword(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.trim().to_ascii_lowercase())
    }
}

/// 解析长度值，返回数值与单位
pub fn parse_length(value: &str) -> Option<(f32, LengthUnit)> {
    let value = value.trim();

    if value.ends_with("px") {
        let num = value.trim_end_matches("px").trim().parse().ok()?;
        return Some((num, LengthUnit::Px));
    }

    if value.ends_with("pt") {
        let num = value.trim_end_matches("pt").trim().parse().ok()?;
        return Some((num, LengthUnit::Pt));
    }

    if value.ends_with('%') {
        let num = value.trim_end_matches('%').trim().parse().ok()?;
        return Some((num, LengthUnit::Percent));
    }

    if value.ends_with("rem") {
        let num = value.trim_end_matches("rem").trim().parse().ok()?;
        return Some((num, LengthUnit::Rem));
    }

    if value.ends_with("em") {
        let num = value.trim_end_matches("em").trim().parse().ok()?;
        return Some((num, LengthUnit::Em));
    }

    // 纯数字默认为 px
    if let Ok(num) = value.parse::<f32>() {
        return Some((num, LengthUnit::Px));
    }

    None
}

/// 将长度值解析为像素，相对单位以 base 为基准
/// rem 始终以 16px 根字号为基准
pub fn resolve_length(value: &str, base: f32) -> Option<f32> {
    let (num, unit) = parse_length(value)?;
    Some(match unit {
        LengthUnit::Px | LengthUnit::Pt => num,
        LengthUnit::Percent => num / 100.0 * base,
        LengthUnit::Em => num * base,
        LengthUnit::Rem => num * 16.0,
    })
}
