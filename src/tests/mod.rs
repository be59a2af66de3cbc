//! 单元测试模块
//! 覆盖声明解析、字体合成、样式应用、引擎接入

pub mod engine_tests;
