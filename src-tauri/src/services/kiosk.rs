//! # Kiosk 应用上下文
//!
//! `Kiosk` 是整个应用唯一的顶层上下文对象，持有：
//! - 宿主框架适配器（`KioskHost` 实现）
//! - 生效的配置（`KioskConfig`）
//! - 生命周期状态（`Lifecycle`）
//! - 已创建的窗口标签和已注册的快捷键（退出时统一释放）
//!
//! ## 生命周期
//! ```text
//! NotReady --on_ready--> WindowOpen --quit-app--> Terminated
//! ```
//! 只有两个外部事件驱动状态转换：宿主就绪、收到退出信号。没有错误状态，也没有恢复路径。
//!
//! ## 宿主抽象
//! 生产环境使用 `TauriHost`；测试使用记录调用的内存实现，
//! 以便在没有显示器的环境下验证窗口参数、快捷键和退出行为。

use crate::models::config::KioskConfig;
use crate::models::window::WindowSpec;

/// 正常退出时使用的进程退出码
pub const EXIT_CODE_OK: i32 = 0;

/// 宿主框架能力抽象
///
/// 覆盖本应用用到的全部宿主操作：创建/关闭窗口、注册/注销全局快捷键、终止进程。
/// 错误统一以可读的字符串返回。
pub trait KioskHost {
    /// 按参数创建窗口并加载文档
    fn create_window(&mut self, spec: &WindowSpec) -> Result<(), String>;

    /// 关闭指定标签的窗口；窗口已不存在时视为成功
    fn close_window(&mut self, label: &str) -> Result<(), String>;

    /// 注册一个处理函数为空操作的全局快捷键
    fn register_shortcut(&mut self, accelerator: &str) -> Result<(), String>;

    /// 注销之前注册的全局快捷键
    fn unregister_shortcut(&mut self, accelerator: &str) -> Result<(), String>;

    /// 请求宿主终止进程
    fn terminate(&mut self, exit_code: i32);
}

/// 应用生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// 宿主尚未就绪，窗口未创建
    NotReady,
    /// 主窗口已创建
    WindowOpen,
    /// 已请求终止进程
    Terminated,
}

/// 通道消息的分发结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    /// 首次收到退出信号，已请求宿主终止进程
    Terminated,
    /// 重复的退出信号，已忽略
    AlreadyTerminated,
    /// 非退出通道的消息，已忽略
    Ignored,
}

/// Kiosk 应用上下文
pub struct Kiosk<H: KioskHost> {
    host: H,
    config: KioskConfig,
    lifecycle: Lifecycle,
    /// 已创建窗口的标签，释放时关闭
    window: Option<String>,
    /// 注册成功的快捷键，释放时注销
    shortcuts: Vec<String>,
    released: bool,
}

impl<H: KioskHost> Kiosk<H> {
    /// 创建尚未就绪的应用上下文
    pub fn new(host: H, config: KioskConfig) -> Self {
        Self {
            host,
            config,
            lifecycle: Lifecycle::NotReady,
            window: None,
            shortcuts: Vec::new(),
            released: false,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// 宿主就绪回调：创建主窗口并注册需要拦截的快捷键
    ///
    /// 只在 `NotReady` 状态下生效，重复调用直接返回。
    ///
    /// # 错误
    /// 窗口创建失败时原样返回宿主的错误，不做重试。
    /// 快捷键注册失败（已被其他程序占用、无法解析）只记录警告，不影响启动。
    pub fn on_ready(&mut self) -> Result<(), String> {
        if self.lifecycle != Lifecycle::NotReady {
            log::debug!("忽略重复的就绪回调，当前状态: {:?}", self.lifecycle);
            return Ok(());
        }

        let spec = self.config.window_spec();
        self.host.create_window(&spec)?;
        self.window = Some(spec.label.clone());
        self.lifecycle = Lifecycle::WindowOpen;
        log::info!(
            "主窗口已创建: label={}, fullscreen={}, frameless={}, devtools={}",
            spec.label,
            spec.fullscreen,
            spec.frameless,
            spec.devtools
        );

        for accelerator in &self.config.blocked_shortcuts {
            match self.host.register_shortcut(accelerator) {
                Ok(()) => {
                    log::info!("已拦截全局快捷键: {}", accelerator);
                    self.shortcuts.push(accelerator.clone());
                }
                Err(e) => log::warn!("注册全局快捷键 {} 失败: {}", accelerator, e),
            }
        }

        Ok(())
    }

    /// 拦截的快捷键被按下：空操作
    ///
    /// 快捷键本身已被注册占用，系统默认行为（通常是切换全屏）不会触发。
    pub fn on_shortcut(&self, accelerator: &str) {
        log::debug!("已拦截快捷键按下: {}", accelerator);
    }

    /// 分发页面发来的通道消息
    ///
    /// 只有配置的退出通道（默认 `quit-app`）会产生效果，其余通道一律忽略。
    pub fn handle_message(&mut self, channel: &str) -> MessageOutcome {
        if channel != self.config.quit_channel {
            log::debug!("忽略未知通道消息: {}", channel);
            return MessageOutcome::Ignored;
        }
        self.request_quit()
    }

    /// 请求退出进程
    ///
    /// 首次调用时请求宿主以退出码 0 终止进程；此后的调用不再触发终止。
    pub fn request_quit(&mut self) -> MessageOutcome {
        if self.lifecycle == Lifecycle::Terminated {
            log::debug!("进程已在退出中，忽略重复的退出请求");
            return MessageOutcome::AlreadyTerminated;
        }

        log::info!("收到退出请求，正在终止进程");
        self.lifecycle = Lifecycle::Terminated;
        self.host.terminate(EXIT_CODE_OK);
        MessageOutcome::Terminated
    }

    /// 释放上下文持有的资源：注销快捷键、关闭窗口
    ///
    /// 只执行一次；在宿主退出事件和 `Drop` 中都会被调用。
    pub fn shutdown(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        for accelerator in self.shortcuts.drain(..) {
            if let Err(e) = self.host.unregister_shortcut(&accelerator) {
                log::warn!("注销全局快捷键 {} 失败: {}", accelerator, e);
            }
        }

        if let Some(label) = self.window.take() {
            if let Err(e) = self.host.close_window(&label) {
                log::warn!("关闭窗口 {} 失败: {}", label, e);
            }
        }

        self.lifecycle = Lifecycle::Terminated;
    }
}

impl<H: KioskHost> Drop for Kiosk<H> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
