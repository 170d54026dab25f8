//! # 窗口数据模型
//!
//! 定义 kiosk 唯一窗口的构建参数（WindowSpec）。
//!
//! WindowSpec 只描述"要什么样的窗口"，真正的窗口由宿主框架创建并持有，
//! 本 crate 创建之后不再读取或修改它。

use std::path::{Path, PathBuf};

use crate::utils::path;

/// 主窗口的固定标签
///
/// 前端 capability 文件（`capabilities/default.json`）按此标签授予事件权限，
/// 修改时需同步修改 capability。
pub const MAIN_WINDOW_LABEL: &str = "main";

/// 窗口构建参数
///
/// 默认值（见 `KioskConfig::default`）：无边框、全屏、禁用开发者工具、
/// 全局脚本桥接、加载 `main.html`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    /// 窗口标签（宿主框架内的唯一标识）
    pub label: String,

    /// 窗口标题（无边框时不可见，但任务栏/窗口管理器仍会使用）
    pub title: String,

    /// 是否去掉窗口边框和标题栏
    pub frameless: bool,

    /// 是否以全屏模式创建
    pub fullscreen: bool,

    /// 是否允许打开开发者工具
    pub devtools: bool,

    /// 页面脚本是否直接拿到全局 `window.__TAURI__`（不启用隔离层）
    ///
    /// 这是一项有意保留的能力授予：页面是本地静态文件，
    /// 但任何在其中执行的脚本都拥有同等权限。
    pub global_script_bridge: bool,

    /// 要加载的文档文件名，相对于应用资源根目录（`frontendDist`）
    pub document: PathBuf,
}

impl WindowSpec {
    /// 文档在应用资源根目录 `entry_dir` 下的完整路径
    pub fn document_path(&self, entry_dir: &Path) -> PathBuf {
        path::resolve_document(entry_dir, &self.document)
    }
}
