use crate::config::Config;
use crate::models::{load_question_bank, QuestionType, TypeFilter};
use crate::services::{ResultSink, ResultWriter};
use crate::utils::logging::{log_startup, log_usage};
use crate::models::SearchOutcome;
use crate::workflow::{Debouncer, SearchContext};
use anyhow::Result;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};

/// 输入事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 关键字输入（防抖后搜索）
    Input(String),
    /// 立即搜索（Enter）
    Commit(String),
    /// 勾选 / 取消勾选题型
    SetType(QuestionType, bool),
    /// 清除
    Clear,
    /// 离开
    Quit,
}

impl Command {
    /// 解析一行输入
    ///
    /// - `:type <题型> on|off`
    /// - `:clear` / `:quit`
    /// - `!关键字` 立即搜索
    /// - 其他内容视为关键字输入
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(rest) = line.strip_prefix(':') {
            let mut parts = rest.split_whitespace();
            return match (parts.next(), parts.next(), parts.next()) {
                (Some("clear"), None, _) => Some(Command::Clear),
                (Some("quit"), None, _) => Some(Command::Quit),
                (Some("type"), Some(name), Some("on")) => {
                    Some(Command::SetType(QuestionType::from(name), true))
                }
                (Some("type"), Some(name), Some("off")) => {
                    Some(Command::SetType(QuestionType::from(name), false))
                }
                _ => None,
            };
        }

        match line.strip_prefix('!') {
            Some(keyword) => Some(Command::Commit(keyword.to_string())),
            None => Some(Command::Input(line.to_string())),
        }
    }
}

/// 应用主结构
///
/// 相当于页面：持有搜索上下文、防抖器和显示区域，把输入事件转成搜索。
pub struct App {
    ctx: SearchContext,
    debouncer: Debouncer,
    sink: Arc<dyn ResultSink>,
    /// 最新一次搜索的代号，输出期间持有锁
    generation: Arc<Mutex<u64>>,
}

fn lock_generation(generation: &Mutex<u64>) -> MutexGuard<'_, u64> {
    generation.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl App {
    /// 初始化应用：载入题库（只载入一次，失败不重试）
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let result = load_question_bank(&config.questions_path, config.strict_validation).await;
        let ctx = SearchContext::from_load_result(
            result,
            &config.questions_path,
            TypeFilter::from_types(config.default_types.iter().cloned()),
        );
        let sink: Arc<dyn ResultSink> =
            Arc::new(ResultWriter::with_path(config.output_html_file.clone()));

        let app = Self::with_parts(ctx, Duration::from_millis(config.debounce_ms), sink);
        app.sink.present(&app.ctx.initial_outcome())?;
        log_usage(config.debounce_ms);

        Ok(app)
    }

    pub fn with_parts(ctx: SearchContext, delay: Duration, sink: Arc<dyn ResultSink>) -> Self {
        Self {
            ctx,
            debouncer: Debouncer::new(delay),
            sink,
            generation: Arc::new(Mutex::new(0)),
        }
    }

    pub fn context(&self) -> &SearchContext {
        &self.ctx
    }

    /// 运行应用主逻辑：逐行读取标准输入直到结束或 `:quit`
    pub async fn run(mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(line) = lines.next_line().await? {
            let Some(command) = Command::parse(&line) else {
                warn!("⚠️ 无法识别的指令: {}", line);
                continue;
            };
            if !self.handle(command)? {
                break;
            }
        }

        self.flush()?;
        info!("👋 结束");
        Ok(())
    }

    /// 处理一个输入事件，返回是否继续
    pub fn handle(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Input(keyword) => {
                self.ctx.set_keyword(keyword);
                let job = self.deferred_search();
                self.debouncer.schedule(job);
            }
            Command::Commit(keyword) => {
                self.debouncer.cancel();
                self.ctx.set_keyword(keyword);
                let outcome = self.ctx.perform_search();
                self.present_latest(&outcome)?;
            }
            Command::SetType(question_type, enabled) => {
                self.debouncer.cancel();
                self.ctx.set_type(question_type, enabled);
                let outcome = self.ctx.perform_search();
                self.present_latest(&outcome)?;
            }
            Command::Clear => {
                self.debouncer.cancel();
                let outcome = self.ctx.clear();
                self.present_latest(&outcome)?;
            }
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// 输入结束时，尚未执行的防抖搜索立即执行
    pub fn flush(&mut self) -> Result<()> {
        if self.debouncer.cancel() {
            let outcome = self.ctx.perform_search();
            self.present_latest(&outcome)?;
        }
        Ok(())
    }

    /// 立即输出，并让所有已排程的防抖搜索过期
    fn present_latest(&self, outcome: &SearchOutcome) -> Result<()> {
        let mut current = lock_generation(&self.generation);
        *current += 1;
        self.sink.present(outcome)?;
        Ok(())
    }

    /// 建立防抖任务
    ///
    /// 任务执行时若已有更新的输出（或更新的任务），就不再输出。
    /// `abort` 拦不住已经开始执行的任务，所以由代号判断。
    fn deferred_search(&self) -> impl FnOnce() + Send + 'static {
        let generation = {
            let mut current = lock_generation(&self.generation);
            *current += 1;
            *current
        };
        let latest = Arc::clone(&self.generation);
        let request = self.ctx.request();
        let sink = Arc::clone(&self.sink);

        move || {
            let current = lock_generation(&latest);
            if *current != generation {
                debug!("略过过期的防抖搜索: {}", request.keyword());
                return;
            }
            if let Err(e) = sink.present(&request.execute()) {
                error!("❌ 输出搜索结果失败: {}", e);
            }
        }
    }
}
