//! # 数据模型模块
//!
//! - `window` - 主窗口的构建参数和文档来源
//! - `config` - `kiosk.json` 配置文件的数据结构，默认值即内置行为

pub mod config;
pub mod window;
