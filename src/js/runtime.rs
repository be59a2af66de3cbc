//! QuickJS 运行时 - 承载样式引擎脚本

use rquickjs::prelude::Rest;
use rquickjs::{Context, Function, Result as JsResult, Runtime, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// JS 运行时
pub struct JsRuntime {
    _runtime: Runtime,
    context: Context,
}

impl JsRuntime {
    pub fn new() -> Result<Self, String> {
        let runtime = Runtime::new().map_err(|e| e.to_string())?;
        let context = Context::full(&runtime).map_err(|e| e.to_string())?;

        Ok(Self {
            _runtime: runtime,
            context,
        })
    }

    /// 执行 JS 代码，返回结果的字符串形式
    pub fn eval(&self, code: &str) -> Result<String, String> {
        self.context.with(|ctx| {
            let result: JsResult<Value> = ctx.eval(code);
            match result {
                Ok(val) => Ok(value_to_string(&val)),
                Err(e) => Err(format!("{:?}", e)),
            }
        })
    }

    /// 注册全局函数（闭包包装），参数按字符串传入
    pub fn register_function<F>(&self, name: &str, func: F) -> Result<(), String>
    where
        F: Fn(Vec<String>) -> String + 'static,
    {
        let func = Rc::new(RefCell::new(func));
        let name_owned = name.to_string();

        self.context.with(|ctx| {
            let global = ctx.globals();
            let func_clone = func.clone();

            let js_func = Function::new(ctx.clone(), move |args: Rest<String>| -> String {
                let f = func_clone.borrow();
                f(args.0)
            });

            match js_func {
                Ok(f) => global.set(&name_owned, f).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            }
        })
    }
}

/// 将 JS Value 转换为字符串
fn value_to_string(val: &Value) -> String {
    if val.is_undefined() {
        "undefined".to_string()
    } else if val.is_null() {
        "null".to_string()
    } else if let Some(s) = val.as_string() {
        s.to_string().unwrap_or_default()
    } else if let Some(n) = val.as_int() {
        n.to_string()
    } else if let Some(n) = val.as_float() {
        n.to_string()
    } else if let Some(b) = val.as_bool() {
        b.to_string()
    } else {
        "[object]".to_string()
    }
}
