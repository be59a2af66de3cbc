//! QuickJS 引擎绑定 - 外部样式引擎的接入层

mod engine;
mod runtime;

pub use engine::{ScriptStyleEngine, StyleEngine};
pub use runtime::JsRuntime;
