//! # 配置加载服务
//!
//! 从 `<config_dir>/kiosk-shell/kiosk.json` 读取 Kiosk 配置。
//! 配置文件是可选的：
//! - 文件不存在：使用默认配置
//! - 文件存在但读取或解析失败：记录错误并使用默认配置，不阻止启动
//! - 单个字段不合法（如退出通道名称）：该字段回退到默认值

use std::path::Path;

use crate::models::config::{DEFAULT_QUIT_CHANNEL, KioskConfig};
use crate::utils::path;

/// 检查事件通道名称是否合法
///
/// 与 Tauri 事件名称规则一致：非空，只包含字母、数字、`-`、`/`、`:`、`_`。
/// 不合法的名称传给 `listen_any` 会直接 panic。
pub fn is_valid_channel_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '/' | ':' | '_'))
}

/// 解析配置文件内容
///
/// 退出通道名称不合法时记录警告，并回退到默认的 `quit-app`。
///
/// # 错误
/// JSON 格式错误或字段类型不匹配时返回错误信息
pub fn parse_config(content: &str) -> Result<KioskConfig, String> {
    let mut config: KioskConfig =
        serde_json::from_str(content).map_err(|e| format!("解析配置文件失败: {}", e))?;

    if !is_valid_channel_name(&config.quit_channel) {
        log::warn!(
            "退出通道名称不合法: {:?}，使用默认值 {}",
            config.quit_channel,
            DEFAULT_QUIT_CHANNEL
        );
        config.quit_channel = DEFAULT_QUIT_CHANNEL.to_string();
    }

    Ok(config)
}

/// 读取指定路径的配置文件
///
/// # 返回值
/// - `Ok(Some(config))` - 文件存在且解析成功
/// - `Ok(None)` - 文件不存在
///
/// # 错误
/// 文件存在但无法读取或解析失败时返回错误信息
pub fn read_config_file(config_path: &Path) -> Result<Option<KioskConfig>, String> {
    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(config_path)
        .map_err(|e| format!("读取配置文件失败: {}", e))?;

    parse_config(&content).map(Some)
}

/// 加载生效的 Kiosk 配置
///
/// 在宿主就绪回调中同步调用，任何失败都回退到默认配置。
pub fn load_config() -> KioskConfig {
    let config_path = match path::get_config_file_path() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("{}，使用默认配置", e);
            return KioskConfig::default();
        }
    };

    match read_config_file(&config_path) {
        Ok(Some(config)) => {
            log::info!("已加载配置文件: {}", config_path.display());
            config
        }
        Ok(None) => KioskConfig::default(),
        Err(e) => {
            log::error!("{} ({})，使用默认配置", e, config_path.display());
            KioskConfig::default()
        }
    }
}
