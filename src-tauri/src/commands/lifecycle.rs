//! # 生命周期 Tauri Commands
//!
//! 页面请求退出应用有两条等价路径：
//! - 事件：`window.__TAURI__.event.emit('quit-app')`，由 `subscribe_channel` 注册的监听器转发到 `dispatch_message`
//! - 命令：`window.__TAURI__.core.invoke('quit_app')`
//!
//! 两者最终都进入 `Kiosk` 的同一退出逻辑，重复请求被安全忽略。
//!
//! 事件分发和资源释放对运行时（`R`）和宿主（`H`）泛型，
//! 生产环境使用 `Wry` + `TauriHost`，测试使用 `MockRuntime` + 记录调用的宿主。

use std::sync::Mutex;

use tauri::{AppHandle, EventId, Listener, Manager, Runtime, State};

use crate::services::kiosk::{Kiosk, KioskHost, MessageOutcome};
use crate::services::tauri_host::KioskState;

/// 请求退出应用
///
/// 无参数、无返回数据。首次调用以退出码 0 终止进程，之后的调用被忽略。
///
/// # 错误
/// Kiosk 状态锁损坏时返回错误信息
#[tauri::command]
pub fn quit_app(kiosk: State<'_, KioskState>) -> Result<(), String> {
    request_quit(kiosk.inner()).map(|_| ())
}

/// 对 Kiosk 上下文发起一次退出请求
pub fn request_quit<H: KioskHost>(kiosk: &Mutex<Kiosk<H>>) -> Result<MessageOutcome, String> {
    let mut kiosk = kiosk
        .lock()
        .map_err(|e| format!("获取应用状态失败: {}", e))?;
    Ok(kiosk.request_quit())
}

/// 订阅页面发来的通道消息
///
/// 事件无负载，来源不做校验；每次收到都交给 `dispatch_message`。
/// `channel` 必须是合法的 Tauri 事件名称（见 `services::config::is_valid_channel_name`）。
pub fn subscribe_channel<R, H>(app: &AppHandle<R>, channel: String) -> EventId
where
    R: Runtime,
    H: KioskHost + Send + 'static,
{
    let handle = app.clone();
    let name = channel.clone();
    app.listen_any(channel, move |_event| {
        dispatch_message::<R, H>(&handle, &name);
    })
}

/// 将通道消息分发给 Kiosk 上下文
///
/// 应用状态尚未注册（就绪回调之前）时消息被丢弃。
pub fn dispatch_message<R, H>(app: &AppHandle<R>, channel: &str) -> Option<MessageOutcome>
where
    R: Runtime,
    H: KioskHost + Send + 'static,
{
    let Some(kiosk) = app.try_state::<Mutex<Kiosk<H>>>() else {
        log::warn!("应用尚未就绪，丢弃通道消息: {}", channel);
        return None;
    };

    match kiosk.lock() {
        Ok(mut kiosk) => Some(kiosk.handle_message(channel)),
        Err(e) => {
            log::error!("获取应用状态失败: {}", e);
            None
        }
    }
}

/// 释放 Kiosk 持有的快捷键和窗口
///
/// 在宿主发出退出请求时调用，此时窗口仍然存在；重复调用无副作用。
pub fn release_resources<R, H>(app: &AppHandle<R>)
where
    R: Runtime,
    H: KioskHost + Send + 'static,
{
    if let Some(kiosk) = app.try_state::<Mutex<Kiosk<H>>>() {
        if let Ok(mut kiosk) = kiosk.lock() {
            log::info!("应用退出，释放窗口和快捷键 (状态: {:?})", kiosk.lifecycle());
            kiosk.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tauri::Emitter;
    use tauri::test::{MockRuntime, mock_builder, mock_context, noop_assets};

    use super::*;
    use crate::models::config::KioskConfig;
    use crate::models::window::WindowSpec;

    /// 宿主调用计数，可跨线程共享
    #[derive(Default)]
    struct HostCounters {
        windows: AtomicUsize,
        closed: AtomicUsize,
        unregistered: AtomicUsize,
        terminated: AtomicUsize,
    }

    #[derive(Default)]
    struct CountingHost {
        counters: Arc<HostCounters>,
    }

    impl KioskHost for CountingHost {
        fn create_window(&mut self, _spec: &WindowSpec) -> Result<(), String> {
            self.counters.windows.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn close_window(&mut self, _label: &str) -> Result<(), String> {
            self.counters.closed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn register_shortcut(&mut self, _accelerator: &str) -> Result<(), String> {
            Ok(())
        }

        fn unregister_shortcut(&mut self, _accelerator: &str) -> Result<(), String> {
            self.counters.unregistered.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn terminate(&mut self, _exit_code: i32) {
            self.counters.terminated.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// 创建已就绪并注册了 Kiosk 状态的 mock 应用
    fn ready_app() -> (tauri::App<MockRuntime>, Arc<HostCounters>) {
        let app = mock_builder().build(mock_context(noop_assets())).unwrap();
        let host = CountingHost::default();
        let counters = Arc::clone(&host.counters);

        let mut kiosk = Kiosk::new(host, KioskConfig::default());
        kiosk.on_ready().unwrap();
        app.manage(Mutex::new(kiosk));
        (app, counters)
    }

    #[test]
    fn test_quit_event_terminates_once() {
        let (app, counters) = ready_app();
        subscribe_channel::<MockRuntime, CountingHost>(app.handle(), "quit-app".to_string());

        app.emit("quit-app", ()).unwrap();
        assert_eq!(counters.terminated.load(Ordering::SeqCst), 1);

        // 重复的退出信号不会再次终止
        app.emit("quit-app", ()).unwrap();
        assert_eq!(counters.terminated.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unrelated_event_has_no_effect() {
        let (app, counters) = ready_app();
        subscribe_channel::<MockRuntime, CountingHost>(app.handle(), "quit-app".to_string());

        app.emit("open-settings", ()).unwrap();
        app.emit("quit-app-later", ()).unwrap();

        assert_eq!(counters.terminated.load(Ordering::SeqCst), 0);
        assert_eq!(counters.windows.load(Ordering::SeqCst), 1);
        assert_eq!(counters.closed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_dispatch_message_outcomes() {
        let (app, counters) = ready_app();
        let handle = app.handle();

        assert_eq!(
            dispatch_message::<MockRuntime, CountingHost>(handle, "open-settings"),
            Some(MessageOutcome::Ignored)
        );
        assert_eq!(
            dispatch_message::<MockRuntime, CountingHost>(handle, "quit-app"),
            Some(MessageOutcome::Terminated)
        );
        assert_eq!(
            dispatch_message::<MockRuntime, CountingHost>(handle, "quit-app"),
            Some(MessageOutcome::AlreadyTerminated)
        );
        assert_eq!(counters.terminated.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dispatch_before_ready_is_dropped() {
        let app = mock_builder().build(mock_context(noop_assets())).unwrap();
        assert_eq!(
            dispatch_message::<MockRuntime, CountingHost>(app.handle(), "quit-app"),
            None
        );
    }

    #[test]
    fn test_quit_command_path_terminates_once() {
        let host = CountingHost::default();
        let counters = Arc::clone(&host.counters);
        let kiosk = Mutex::new(Kiosk::new(host, KioskConfig::default()));

        assert_eq!(request_quit(&kiosk).unwrap(), MessageOutcome::Terminated);
        assert_eq!(request_quit(&kiosk).unwrap(), MessageOutcome::AlreadyTerminated);
        assert_eq!(counters.terminated.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_release_resources_once() {
        let (app, counters) = ready_app();

        release_resources::<MockRuntime, CountingHost>(app.handle());
        release_resources::<MockRuntime, CountingHost>(app.handle());

        assert_eq!(counters.unregistered.load(Ordering::SeqCst), 1);
        assert_eq!(counters.closed.load(Ordering::SeqCst), 1);
        // 释放资源不等于请求退出
        assert_eq!(counters.terminated.load(Ordering::SeqCst), 0);
    }
}
