//! # Tauri Command 处理模块
//!
//! - `lifecycle` - 应用退出相关的 command 和通道消息分发

pub mod lifecycle;
