//! 样式引擎接入单元测试
//! 用映射桩引擎覆盖子树应用，用 QuickJS 覆盖脚本引擎路径

use crate::js::{ScriptStyleEngine, StyleEngine};
use crate::views::{Button, Label, TextField, View, ViewKind};
use crate::{Color, StyleDeclaration};
use std::collections::HashMap;

/// 桩引擎：选择器到声明的固定映射
struct MapStyleEngine {
    rules: HashMap<String, StyleDeclaration>,
}

impl MapStyleEngine {
    fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    fn rule(mut self, selector: &str, declaration: StyleDeclaration) -> Self {
        self.rules.insert(selector.to_string(), declaration);
        self
    }
}

impl StyleEngine for MapStyleEngine {
    fn resolve(&self, selector: &str) -> Option<StyleDeclaration> {
        self.rules.get(selector).cloned()
    }
}

/// 测试引擎无匹配规则时视图保持原样
#[test]
fn test_engine_miss_is_noop() {
    let engine = MapStyleEngine::new();
    let mut view = View::new(ViewKind::Label(Label::new("hello")));
    let before = view.clone();

    view.apply_styles_with_engine(&engine);

    assert_eq!(view, before);
}

/// 测试引擎解析结果应用到整棵子树
#[test]
fn test_apply_with_engine_subtree() {
    let engine = MapStyleEngine::new()
        .rule("label", StyleDeclaration::new().with("color", "#FF0000"))
        .rule(
            "button#ok",
            StyleDeclaration::new().with("font-weight", "bold"),
        );

    let mut root = View::container()
        .with_child(View::new(ViewKind::Label(Label::new("hi"))))
        .with_child(View::new(ViewKind::Button(Button::new("OK"))).with_tag("ok"))
        .with_child(View::new(ViewKind::TextField(TextField::new())));
    let field_before = root.children()[2].clone();

    root.apply_styles_with_engine(&engine);

    if let ViewKind::Label(label) = root.children()[0].kind() {
        assert_eq!(label.text_color, Color::RED);
    } else {
        panic!("expected a label child");
    }

    if let ViewKind::Button(button) = root.children()[1].kind() {
        assert!(button.title_label.font.weight.is_bold());
    } else {
        panic!("expected a button child");
    }

    // 没有规则命中的子视图保持原样
    assert_eq!(root.children()[2], field_before);
}

/// 测试刷新入口的重复应用是幂等的
#[test]
fn test_refresh_styles_idempotent() {
    let engine = MapStyleEngine::new().rule(
        "label",
        StyleDeclaration::new()
            .with("color", "#07C160")
            .with("font-size", "18px"),
    );

    let mut view = View::new(ViewKind::Label(Label::new("hello")));
    view.apply_styles_with_engine(&engine);
    let after_first = view.clone();

    view.refresh_styles(&engine);

    assert_eq!(view, after_first);
}

/// 测试脚本引擎解析样式表并返回声明
#[test]
fn test_script_engine_resolve() {
    let engine = ScriptStyleEngine::new().expect("engine should start");
    engine
        .load_script(
            r#"
            var __styles = {
                'button': { 'color': '#FF0000', 'font-weight': 'bold' },
                'label#title': { 'font-size': 18 }
            };
            function __resolve_style(selector) {
                return __styles[selector] || null;
            }
            "#,
        )
        .expect("script should load");

    let declaration = engine
        .resolve_declaration("button")
        .expect("resolve should not fail")
        .expect("button should match a rule");
    assert_eq!(declaration.get("color"), Some("#FF0000"));
    assert_eq!(declaration.get("font-weight"), Some("bold"));

    // JSON 数字值转成字符串
    let declaration = engine
        .resolve_declaration("label#title")
        .expect("resolve should not fail")
        .expect("label#title should match a rule");
    assert_eq!(declaration.get("font-size"), Some("18"));

    // 无匹配规则
    assert!(engine
        .resolve_declaration("toolbar")
        .expect("resolve should not fail")
        .is_none());
}

/// 测试脚本未装入解析函数时按无声明处理
#[test]
fn test_script_engine_without_resolver() {
    let engine = ScriptStyleEngine::new().expect("engine should start");

    assert!(engine
        .resolve_declaration("button")
        .expect("resolve should not fail")
        .is_none());
    assert_eq!(engine.resolve("button"), None);
}

/// 测试脚本引擎驱动的视图样式应用
#[test]
fn test_script_engine_applies_to_view() {
    let engine = ScriptStyleEngine::new().expect("engine should start");
    engine
        .load_script(
            r#"
            function __resolve_style(selector) {
                if (selector === 'text-field#username') {
                    return { 'color': '#00FF00', 'text-align': 'right' };
                }
                return null;
            }
            "#,
        )
        .expect("script should load");

    let mut view = View::new(ViewKind::TextField(TextField::new())).with_tag("username");
    view.apply_styles_with_engine(&engine);

    if let ViewKind::TextField(field) = view.kind() {
        assert_eq!(field.text_color, Color::GREEN);
        assert_eq!(field.text_align, crate::TextAlign::Right);
    } else {
        panic!("expected a text field view");
    }
}

/// 测试样式失效通知的积累与取走
#[test]
fn test_invalidation_queue() {
    let engine = ScriptStyleEngine::new().expect("engine should start");
    assert!(!engine.has_pending_invalidations());

    engine
        .load_script(
            r#"
            __native_styles_invalidated('label');
            __native_styles_invalidated('');
            "#,
        )
        .expect("script should load");

    assert!(engine.has_pending_invalidations());
    let pending = engine.drain_invalidations();
    assert_eq!(pending, vec!["label".to_string(), String::new()]);

    // 取走后队列清空
    assert!(!engine.has_pending_invalidations());
    assert!(engine.drain_invalidations().is_empty());
}

/// 测试脚本里的选择器引号被正确转义
#[test]
fn test_selector_escaping() {
    let engine = ScriptStyleEngine::new().expect("engine should start");
    engine
        .load_script("function __resolve_style(selector) { return null; }")
        .expect("script should load");

    // 含引号的选择器不应让求值串坏掉
    assert!(engine
        .resolve_declaration("label#it's")
        .expect("resolve should not fail")
        .is_none());
}
