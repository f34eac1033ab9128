//! 输入防抖
//!
//! 持有唯一一个待执行任务的句柄；新的触发会取消尚未执行的旧任务。

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

/// 防抖器
///
/// 必须在 tokio 运行时中使用。
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 静默期结束后执行 `job`，取代尚未执行的旧任务
    pub fn schedule<F>(&mut self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            job();
        }));
    }

    /// 取消尚未执行的任务，返回是否真的取消了一个任务
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                debug!("取消尚未执行的防抖任务");
                true
            }
            _ => false,
        }
    }

    /// 是否有尚未执行的任务
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
