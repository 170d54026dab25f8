//! # 业务逻辑服务模块
//!
//! 核心逻辑与 Tauri 运行时解耦：
//! - `kiosk` - 应用上下文：生命周期、窗口/快捷键资源、退出信号处理
//! - `tauri_host` - `KioskHost` 的 Tauri 实现
//! - `config` - `kiosk.json` 配置文件加载

pub mod config;
pub mod kiosk;
pub mod tauri_host;
