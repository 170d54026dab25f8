//! # Tauri 宿主适配器
//!
//! 将 `KioskHost` 的各项操作映射到 Tauri 运行时：
//! - 窗口：`WebviewWindowBuilder`（无边框 = `decorations(false)`），文档从应用资源加载
//! - 全局快捷键：`tauri-plugin-global-shortcut`
//! - 终止进程：`AppHandle::exit`
//!
//! 脚本桥接模式由 `tauri.conf.json` 的 `app.withGlobalTauri` 在应用级别决定，
//! 无法按窗口设置；创建窗口时只校验两者是否一致。

use std::sync::Mutex;

use tauri::utils::config::FrontendDist;
use tauri::{AppHandle, Manager, Runtime, WebviewUrl, WebviewWindowBuilder};
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut};

use crate::models::window::WindowSpec;
use crate::services::kiosk::{Kiosk, KioskHost};

/// 注册为 Tauri managed state 的应用上下文
///
/// 事件监听器、快捷键处理函数和 command 都通过 `try_state::<KioskState>()` 访问。
pub type KioskState<R = tauri::Wry> = Mutex<Kiosk<TauriHost<R>>>;

/// 基于 Tauri `AppHandle` 的宿主实现
pub struct TauriHost<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriHost<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }

    /// 记录文档位置；资源中找不到文档时只记录警告
    ///
    /// 文档缺失不阻止窗口创建，页面显示为空白或错误页。
    fn check_document(&self, spec: &WindowSpec) {
        if let Some(FrontendDist::Directory(entry_dir)) = &self.app.config().build.frontend_dist {
            log::info!("加载文档: {}", spec.document_path(entry_dir).display());
        }

        let asset_key = spec.document.to_string_lossy().replace('\\', "/");
        if self.app.asset_resolver().get(asset_key).is_none() {
            log::warn!("应用资源中找不到文档: {}", spec.document.display());
        }
    }
}

impl<R: Runtime> KioskHost for TauriHost<R> {
    fn create_window(&mut self, spec: &WindowSpec) -> Result<(), String> {
        let global_bridge = self.app.config().app.with_global_tauri;
        if global_bridge != spec.global_script_bridge {
            log::warn!(
                "脚本桥接模式与 tauri.conf.json 不一致: 期望 {}, withGlobalTauri={}",
                spec.global_script_bridge,
                global_bridge
            );
        }

        self.check_document(spec);

        let url = WebviewUrl::App(spec.document.clone());
        WebviewWindowBuilder::new(&self.app, spec.label.as_str(), url)
            .title(&spec.title)
            .decorations(!spec.frameless)
            .fullscreen(spec.fullscreen)
            .devtools(spec.devtools)
            .build()
            .map_err(|e| format!("创建窗口失败: {}", e))?;

        Ok(())
    }

    fn close_window(&mut self, label: &str) -> Result<(), String> {
        match self.app.get_webview_window(label) {
            Some(window) => window
                .close()
                .map_err(|e| format!("关闭窗口失败: {}", e)),
            None => Ok(()),
        }
    }

    fn register_shortcut(&mut self, accelerator: &str) -> Result<(), String> {
        let shortcut = parse_shortcut(accelerator)?;
        self.app
            .global_shortcut()
            .register(shortcut)
            .map_err(|e| format!("注册快捷键失败: {}", e))
    }

    fn unregister_shortcut(&mut self, accelerator: &str) -> Result<(), String> {
        let shortcut = parse_shortcut(accelerator)?;
        self.app
            .global_shortcut()
            .unregister(shortcut)
            .map_err(|e| format!("注销快捷键失败: {}", e))
    }

    fn terminate(&mut self, exit_code: i32) {
        self.app.exit(exit_code);
    }
}

/// 解析快捷键字符串（如 `"F11"`、`"Ctrl+Shift+Q"`）
fn parse_shortcut(accelerator: &str) -> Result<Shortcut, String> {
    accelerator
        .parse::<Shortcut>()
        .map_err(|e| format!("无法解析快捷键 {}: {}", accelerator, e))
}
