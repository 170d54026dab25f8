//! # 路径工具函数
//!
//! 提供与文件路径相关的工具函数，包括：
//! - 获取 kiosk 配置目录路径（`<config_dir>/kiosk-shell/`）
//! - 将文档文件名解析为完整路径

use std::path::{Path, PathBuf};

/// 配置目录名称
const CONFIG_DIR_NAME: &str = "kiosk-shell";

/// 配置文件名称
pub const CONFIG_FILE_NAME: &str = "kiosk.json";

/// 获取 kiosk 配置目录的绝对路径
///
/// 使用 `dirs` crate 获取平台配置目录：
/// - Linux: `~/.config/kiosk-shell`
/// - macOS: `~/Library/Application Support/kiosk-shell`
/// - Windows: `C:\Users\username\AppData\Roaming\kiosk-shell`
///
/// # 错误
/// 无法确定平台配置目录时返回错误信息
pub fn get_config_dir() -> Result<PathBuf, String> {
    let config = dirs::config_dir().ok_or_else(|| "无法获取系统配置目录".to_string())?;
    Ok(config.join(CONFIG_DIR_NAME))
}

/// 获取 `kiosk.json` 配置文件的绝对路径
pub fn get_config_file_path() -> Result<PathBuf, String> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// 将文档文件名解析为 `dir` 下的完整路径
///
/// 仅做路径拼接，不检查文件是否存在；目录名中的空格等字符原样保留。
///
/// # 示例
/// - `("/opt/my kiosk", "main.html")` → `/opt/my kiosk/main.html`
pub fn resolve_document(dir: &Path, file: &Path) -> PathBuf {
    dir.join(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_document_simple() {
        let dir = Path::new("app");
        let resolved = resolve_document(dir, Path::new("main.html"));
        assert_eq!(resolved, dir.join("main.html"));
        assert_eq!(resolved.file_name().unwrap(), "main.html");
        assert_eq!(resolved.parent().unwrap(), dir);
    }

    #[test]
    fn test_resolve_document_with_spaces() {
        let dir = std::env::temp_dir().join("my kiosk app").join("res files");
        let resolved = resolve_document(&dir, Path::new("main.html"));
        assert_eq!(resolved.parent().unwrap(), dir.as_path());
        assert!(resolved.to_string_lossy().contains("my kiosk app"));
        assert!(resolved.to_string_lossy().ends_with("main.html"));
    }

    #[test]
    fn test_config_file_path() {
        // 无配置目录的极端环境下跳过
        if let Ok(path) = get_config_file_path() {
            assert!(path.ends_with(Path::new("kiosk-shell").join("kiosk.json")));
        }
    }
}
