//! numname Core
//!
//! 将非负整数转换为英文表达（例如 5491 -> "five thousand four hundred ninety one"）

#![warn(rust_2018_idioms)]

pub mod namer;
pub mod check;
pub mod config;
pub mod error;

// Re-export key types
pub use error::{NumnameError, NumnameResult, Stage};
pub use namer::{number_to_english, EnglishNumberNamer, UPPER_BOUND};
pub use check::{builtin_cases, run_cases, CheckOutcome, CheckReport, SanityCase};
pub use config::NumnameConfig;

/// 初始化日志系统
///
/// 过滤规则优先取 NUMNAME_LOG，否则使用 `default_filter`
///
/// 需要 --features debug-logs；可以安全地多次调用
pub fn init_logging(default_filter: &str) {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("NUMNAME_LOG")
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        // 已经初始化过时 try_init 返回错误，忽略即可
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    }

    #[cfg(not(feature = "debug-logs"))]
    {
        // 静默运行，不安装 subscriber
        // 如需日志，请使用 --features debug-logs 编译
        let _ = default_filter;
    }
}
