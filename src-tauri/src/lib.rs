//! # Kiosk Shell - Tauri 应用核心初始化模块
//!
//! 本模块负责 Tauri 应用的完整初始化流程：
//! - 注册全局快捷键插件（拦截的按键处理函数为空操作）
//! - 注册 `quit_app` command
//! - 在 `setup` 钩子（宿主就绪回调）中加载配置、创建唯一的全屏窗口、
//!   注册 Kiosk 应用上下文并订阅 `quit-app` 通道
//! - 在宿主退出事件中释放快捷键和窗口
//!
//! ## 模块结构
//! - `commands/` - Tauri command 处理函数（IPC 接口层）
//! - `models/` - 窗口参数和配置数据模型
//! - `services/` - Kiosk 上下文、Tauri 宿主适配器、配置加载
//! - `utils/` - 通用工具函数

mod commands;
mod models;
mod services;
mod utils;

use std::sync::Mutex;

use tauri::{AppHandle, Manager, RunEvent, Wry};
use tauri_plugin_global_shortcut::{Shortcut, ShortcutEvent, ShortcutState};

use services::kiosk::Kiosk;
use services::tauri_host::{KioskState, TauriHost};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
/// Tauri 应用启动函数
///
/// 1. 创建 `tauri::Builder` 并注册全局快捷键插件
/// 2. 注册自定义 Tauri commands
/// 3. 在 `setup` 钩子中创建窗口、注册快捷键、订阅退出通道
/// 4. 启动主事件循环，退出时释放 Kiosk 持有的资源
///
/// # Panics
/// 窗口创建失败（例如没有可用的显示器）时，错误从 `setup` 返回，
/// 由 `.expect()` 触发 panic，不做任何本地恢复。
pub fn run() {
    let app = tauri::Builder::default()
        // 全局快捷键插件：所有已注册快捷键共用一个处理函数，按下时交给 Kiosk（空操作）
        .plugin(
            tauri_plugin_global_shortcut::Builder::new()
                .with_handler(
                    |app: &AppHandle, shortcut: &Shortcut, event: ShortcutEvent| {
                        if !matches!(event.state(), ShortcutState::Pressed) {
                            return;
                        }
                        if let Some(kiosk) = app.try_state::<KioskState>() {
                            if let Ok(kiosk) = kiosk.lock() {
                                kiosk.on_shortcut(&shortcut.clone().into_string());
                            }
                        }
                    },
                )
                .build(),
        )
        .invoke_handler(tauri::generate_handler![commands::lifecycle::quit_app])
        // `setup` 闭包：宿主就绪后只执行一次
        .setup(|app| {
            // 仅在开发调试模式下启用日志插件
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            // 配置加载时已保证退出通道名称合法
            let config = services::config::load_config();
            let quit_channel = config.quit_channel.clone();

            let mut kiosk = Kiosk::new(TauriHost::new(app.handle().clone()), config);
            kiosk.on_ready()?;
            app.manage::<KioskState>(Mutex::new(kiosk));

            commands::lifecycle::subscribe_channel::<Wry, TauriHost<Wry>>(
                app.handle(),
                quit_channel,
            );

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while running tauri application");

    // 退出请求阶段窗口仍然存在，在此释放；`Exit` 兜底（释放只执行一次）
    app.run(|app_handle, event| {
        if matches!(event, RunEvent::ExitRequested { .. } | RunEvent::Exit) {
            commands::lifecycle::release_resources::<Wry, TauriHost<Wry>>(app_handle);
        }
    });
}
