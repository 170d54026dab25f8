//! # Kiosk 配置数据模型
//!
//! 定义 `kiosk.json` 配置文件对应的 Rust 结构体。
//! 配置文件可选：不存在时使用默认值，默认值与内置的固定行为完全一致
//! （无边框、全屏、禁用开发者工具、拦截 F11、监听 `quit-app`、加载 `main.html`）。
//!
//! 对应的 JSON 结构：
//! ```json
//! {
//!   "frameless": true,
//!   "fullscreen": true,
//!   "devtools": false,
//!   "document": "main.html",
//!   "blockedShortcuts": ["F11"],
//!   "quitChannel": "quit-app"
//! }
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::models::window::{MAIN_WINDOW_LABEL, WindowSpec};

/// 默认加载的文档文件名
pub const DEFAULT_DOCUMENT: &str = "main.html";

/// 默认拦截的快捷键
pub const DEFAULT_BLOCKED_SHORTCUT: &str = "F11";

/// 默认的退出通道名称
pub const DEFAULT_QUIT_CHANNEL: &str = "quit-app";

/// Kiosk 配置
///
/// 所有字段均有默认值（`#[serde(default)]`），配置文件中缺失的字段自动补齐，
/// 未知字段被忽略。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KioskConfig {
    /// 是否去掉窗口边框
    pub frameless: bool,

    /// 是否全屏
    pub fullscreen: bool,

    /// 是否允许开发者工具
    pub devtools: bool,

    /// 文档文件名，相对于应用资源根目录
    pub document: PathBuf,

    /// 需要拦截（注册为空操作）的全局快捷键列表
    pub blocked_shortcuts: Vec<String>,

    /// 页面发送退出信号使用的事件通道名称
    pub quit_channel: String,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            frameless: true,
            fullscreen: true,
            devtools: false,
            document: PathBuf::from(DEFAULT_DOCUMENT),
            blocked_shortcuts: vec![DEFAULT_BLOCKED_SHORTCUT.to_string()],
            quit_channel: DEFAULT_QUIT_CHANNEL.to_string(),
        }
    }
}

impl KioskConfig {
    /// 根据配置生成主窗口的构建参数
    ///
    /// 全局脚本桥接固定开启，不受配置文件影响。
    pub fn window_spec(&self) -> WindowSpec {
        WindowSpec {
            label: MAIN_WINDOW_LABEL.to_string(),
            title: "Kiosk Shell".to_string(),
            frameless: self.frameless,
            fullscreen: self.fullscreen,
            devtools: self.devtools,
            global_script_bridge: true,
            document: self.document.clone(),
        }
    }
}
