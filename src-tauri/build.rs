//! # Kiosk Shell - Tauri Cargo 构建脚本
//!
//! 根据 `tauri.conf.json` 和 `capabilities/` 生成运行时所需的资源绑定和权限清单。

fn main() {
  tauri_build::build()
}
