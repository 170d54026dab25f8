//! # 通用工具模块
//!
//! - `path` - 配置目录定位和文档路径解析

pub mod path;
