//! numname 命令行入口

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use numname_core::{
    builtin_cases, run_cases, CheckReport, EnglishNumberNamer, NumnameConfig, SanityCase,
    UPPER_BOUND,
};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => NumnameConfig::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => NumnameConfig::load().context("failed to load config")?,
    };

    numname_core::init_logging(&config.logging.filter);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Convert { numbers } => convert(&numbers, &mut out),
        Commands::Check => check(&config, &mut out).map(|_| ()),
    }
}

/// 逐个转换，遇到第一个错误即停止
fn convert<W: Write>(numbers: &[u64], out: &mut W) -> Result<()> {
    for &num in numbers {
        let words = match EnglishNumberNamer::convert(num) {
            Ok(words) => words,
            Err(e) if e.is_out_of_range() => {
                bail!("{} is out of range (expected at most {})", num, UPPER_BOUND - 1)
            }
            Err(e) => return Err(e).with_context(|| format!("cannot convert {}", num)),
        };
        writeln!(out, "{}", words)?;
    }
    Ok(())
}

/// 内置用例在前，配置中的用例追加在后
fn sanity_cases(config: &NumnameConfig) -> Vec<SanityCase> {
    let mut cases = builtin_cases();
    cases.extend(config.check.cases.iter().cloned());
    cases
}

/// 运行自检，任一用例失败时返回错误
fn check<W: Write>(config: &NumnameConfig, out: &mut W) -> Result<CheckReport> {
    let cases = sanity_cases(config);
    tracing::debug!("running {} sanity cases", cases.len());

    writeln!(out, "Running sanity checks for number_to_english:")?;
    let report = run_cases(&cases);
    for result in &report.results {
        writeln!(out, "{}", result)?;
    }
    writeln!(out, "{} passed, {} failed", report.passed(), report.failed())?;

    if !report.is_success() {
        bail!("{} sanity case(s) failed", report.failed());
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(cases: Vec<SanityCase>) -> NumnameConfig {
        let mut config = NumnameConfig::default();
        config.check.cases = cases;
        config
    }

    #[test]
    fn test_convert_writes_one_line_per_number() {
        let mut out = Vec::new();
        convert(&[5491, 0, 1_000_000], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "five thousand four hundred ninety one\nzero\none million\n");
    }

    #[test]
    fn test_convert_stops_at_first_error() {
        let mut out = Vec::new();
        let err = convert(&[5491, 1_000_000_000_000_000, 7], &mut out).unwrap_err();

        assert!(err.to_string().contains("1000000000000000"));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "five thousand four hundred ninety one\n");
    }

    #[test]
    fn test_config_cases_follow_builtin_cases() {
        let config = config_with(vec![SanityCase::new(1_000_000_000, "one billion")]);
        let cases = sanity_cases(&config);

        assert_eq!(cases.len(), 32);
        assert_eq!(&cases[..31], builtin_cases().as_slice());
        assert_eq!(cases[31], SanityCase::new(1_000_000_000, "one billion"));
    }

    #[test]
    fn test_check_passes_with_config_case() {
        let config = config_with(vec![SanityCase::new(1_000_000_000, "one billion")]);
        let mut out = Vec::new();

        let report = check(&config, &mut out).unwrap();
        assert_eq!(report.passed(), 32);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Running sanity checks for number_to_english:");
        assert_eq!(lines[32], "[PASS] one billion === one billion");
        assert_eq!(lines[33], "32 passed, 0 failed");
    }

    #[test]
    fn test_check_fails_on_mismatch() {
        let config = config_with(vec![SanityCase::new(12, "twelfth")]);
        let mut out = Vec::new();

        let err = check(&config, &mut out).unwrap_err();
        assert!(err.to_string().contains("1 sanity case(s) failed"));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[FAIL] twelfth === twelve"));
        assert!(text.ends_with("31 passed, 1 failed\n"));
    }
}
