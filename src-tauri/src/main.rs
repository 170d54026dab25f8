//! # Kiosk Shell - Tauri 桌面应用原生入口点
//!
//! 核心逻辑位于 `lib.rs`，此处只调用 `app_lib::run()` 启动事件循环。

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
  app_lib::run();
}
