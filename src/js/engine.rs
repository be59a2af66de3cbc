//! 样式引擎接入 - 选择器解析与失效通知
//! 选择器如何匹配规则（类、层叠、优先级）是引擎内部的事，本层只拿声明

use super::runtime::JsRuntime;
use crate::declaration::StyleDeclaration;
use std::sync::{Arc, Mutex};

/// 样式引擎 - 外部协作方的最小接口
/// 给定视图的样式选择器，返回已解析的声明；无匹配规则返回 None
pub trait StyleEngine {
    fn resolve(&self, selector: &str) -> Option<StyleDeclaration>;
}

/// 基于 QuickJS 的样式引擎接入
/// 宿主先用 load_script 装入引擎脚本，脚本需提供全局函数
/// __resolve_style(selector)，返回属性名到值的对象，无匹配时返回 null；
/// 样式表变化时脚本调用 __native_styles_invalidated(selector) 通知宿主
pub struct ScriptStyleEngine {
    runtime: JsRuntime,
    invalidations: Arc<Mutex<Vec<String>>>,
}

impl ScriptStyleEngine {
    pub fn new() -> Result<Self, String> {
        let runtime = JsRuntime::new()?;
        let invalidations: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let queue = invalidations.clone();
        runtime.register_function("__native_styles_invalidated", move |args| {
            let selector = args.first().cloned().unwrap_or_default();
            queue.lock().unwrap().push(selector);
            "undefined".to_string()
        })?;

        Ok(Self {
            runtime,
            invalidations,
        })
    }

    /// 装入样式引擎脚本
    pub fn load_script(&self, code: &str) -> Result<(), String> {
        self.runtime.eval(code).map(|_| ())
    }

    /// 解析选择器对应的计算样式
    /// Ok(None) 表示没有匹配规则；脚本错误原样上抛
    pub fn resolve_declaration(&self, selector: &str) -> Result<Option<StyleDeclaration>, String> {
        let call = format!(
            "JSON.stringify(typeof __resolve_style === 'function' ? (__resolve_style({}) || null) : null)",
            js_string_literal(selector)
        );
        let json = self.runtime.eval(&call)?;

        if json == "null" || json == "undefined" || json.is_empty() {
            return Ok(None);
        }

        let declaration = StyleDeclaration::from_json(&json)?;
        if declaration.is_empty() {
            return Ok(None);
        }
        Ok(Some(declaration))
    }

    /// 取走并清空积累的失效通知
    /// 空字符串表示整张样式表失效
    pub fn drain_invalidations(&self) -> Vec<String> {
        let mut queue = self.invalidations.lock().unwrap();
        std::mem::take(&mut *queue)
    }

    pub fn has_pending_invalidations(&self) -> bool {
        !self.invalidations.lock().unwrap().is_empty()
    }
}

impl StyleEngine for ScriptStyleEngine {
    fn resolve(&self, selector: &str) -> Option<StyleDeclaration> {
        // 应用路径对解析失败宽容处理，按无声明对待
        self.resolve_declaration(selector).unwrap_or(None)
    }
}

/// 把选择器转成 JS 字符串字面量
fn js_string_literal(selector: &str) -> String {
    serde_json::to_string(selector).unwrap_or_else(|_| "\"\"".to_string())
}
