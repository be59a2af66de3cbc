//! View 视图 - 基础容器与视图树
//! 基础视图本身没有可应用的样式属性，它承载样式选择器标识，
//! 并提供通过样式引擎应用整棵子树样式的入口

use super::{
    Button, ImageView, Label, NavigationBar, SearchBar, SegmentedControl, TableView,
    TableViewCell, TextField, Toolbar,
};
use crate::applicator;
use crate::declaration::StyleDeclaration;
use crate::js::StyleEngine;

/// 视图变体 - 本层认识的封闭集合
#[derive(Debug, Clone, PartialEq)]
pub enum ViewKind {
    View,
    Button(Button),
    SegmentedControl(SegmentedControl),
    TextField(TextField),
    NavigationBar(NavigationBar),
    SearchBar(SearchBar),
    Toolbar(Toolbar),
    ImageView(ImageView),
    Label(Label),
    TableView(TableView),
    TableViewCell(TableViewCell),
}

impl ViewKind {
    /// 选择器中使用的类型名
    pub fn kind_name(&self) -> &'static str {
        match self {
            ViewKind::View => "view",
            ViewKind::Button(_) => "button",
            ViewKind::SegmentedControl(_) => "segmented-control",
            ViewKind::TextField(_) => "text-field",
            ViewKind::NavigationBar(_) => "navigation-bar",
            ViewKind::SearchBar(_) => "search-bar",
            ViewKind::Toolbar(_) => "toolbar",
            ViewKind::ImageView(_) => "image-view",
            ViewKind::Label(_) => "label",
            ViewKind::TableView(_) => "table-view",
            ViewKind::TableViewCell(_) => "table-cell",
        }
    }
}

/// View - 视图树节点
/// 生命周期由宿主管理，样式应用只改动可见属性
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    tag: Option<String>,
    kind: ViewKind,
    children: Vec<View>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        Self {
            tag: None,
            kind,
            children: Vec::new(),
        }
    }

    /// 基础容器视图
    pub fn container() -> Self {
        Self::new(ViewKind::View)
    }

    /// 设置样式标识，进入选择器的 #tag 部分
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn with_child(mut self, child: View) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn kind(&self) -> &ViewKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut ViewKind {
        &mut self.kind
    }

    pub fn add_child(&mut self, child: View) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[View] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<View> {
        &mut self.children
    }

    /// 样式选择器标识：类型名加可选的 #tag
    /// 标识之外的匹配规则（类、层叠、优先级）由外部样式引擎决定
    pub fn style_selector(&self) -> String {
        match &self.tag {
            Some(tag) => format!("{}#{}", self.kind.kind_name(), tag),
            None => self.kind.kind_name().to_string(),
        }
    }

    /// 应用已解析的样式声明（只作用于当前视图）
    pub fn apply_styles(&mut self, declaration: &StyleDeclaration) {
        applicator::apply_styles(declaration, self);
    }

    /// 通过样式引擎解析并应用样式，递归整棵子树
    /// 没有匹配规则的视图保持原样
    pub fn apply_styles_with_engine(&mut self, engine: &dyn StyleEngine) {
        if let Some(declaration) = engine.resolve(&self.style_selector()) {
            self.apply_styles(&declaration);
        }
        for child in &mut self.children {
            child.apply_styles_with_engine(engine);
        }
    }

    /// 样式引擎通知样式变化后的重新应用入口
    pub fn refresh_styles(&mut self, engine: &dyn StyleEngine) {
        self.apply_styles_with_engine(engine);
    }
}
