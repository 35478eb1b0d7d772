//! 自检用例
//!
//! 内置一组 (输入, 期望输出) 用例，逐条运行并生成报告，
//! 输出格式为 `[PASS] expected === actual`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::namer::number_to_english;

/// 单条自检用例
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanityCase {
    /// 输入整数
    pub input: u64,
    /// 期望的英文
    pub expected: String,
}

impl SanityCase {
    pub fn new(input: u64, expected: impl Into<String>) -> Self {
        Self {
            input,
            expected: expected.into(),
        }
    }
}

/// 单条用例的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Pass,
    Fail { actual: String },
    /// 转换本身返回了错误
    Error { message: String },
}

/// 用例与结果
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub case: SanityCase,
    pub outcome: CheckOutcome,
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            CheckOutcome::Pass => {
                write!(f, "[PASS] {} === {}", self.case.expected, self.case.expected)
            }
            CheckOutcome::Fail { actual } => {
                write!(f, "[FAIL] {} === {}", self.case.expected, actual)
            }
            CheckOutcome::Error { message } => {
                write!(f, "[FAIL] {} === <error: {}>", self.case.expected, message)
            }
        }
    }
}

/// 自检报告
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub results: Vec<CaseResult>,
}

impl CheckReport {
    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == CheckOutcome::Pass)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// 内置用例
pub fn builtin_cases() -> Vec<SanityCase> {
    [
        (0, "zero"),
        (1, "one"),
        (2, "two"),
        (3, "three"),
        (4, "four"),
        (5, "five"),
        (6, "six"),
        (7, "seven"),
        (8, "eight"),
        (9, "nine"),
        (54, "fifty four"),
        (90, "ninety"),
        (99, "ninety nine"),
        (999, "nine hundred ninety nine"),
        (200, "two hundred"),
        (205, "two hundred five"),
        (215, "two hundred fifteen"),
        (285, "two hundred eighty five"),
        (280, "two hundred eighty"),
        (1000, "one thousand"),
        (1001, "one thousand one"),
        (1015, "one thousand fifteen"),
        (1115, "one thousand one hundred fifteen"),
        (1100, "one thousand one hundred"),
        (1234, "one thousand two hundred thirty four"),
        (55555, "fifty five thousand five hundred fifty five"),
        (1000000, "one million"),
        (1000001, "one million one"),
        (1000200, "one million two hundred"),
        (1200215, "one million two hundred thousand two hundred fifteen"),
        (21200215, "twenty one million two hundred thousand two hundred fifteen"),
    ]
    .into_iter()
    .map(|(input, expected)| SanityCase::new(input, expected))
    .collect()
}

/// 运行单条用例
pub fn run_case(case: &SanityCase) -> CheckOutcome {
    match number_to_english(case.input) {
        Ok(actual) if actual == case.expected => CheckOutcome::Pass,
        Ok(actual) => {
            tracing::warn!(
                "sanity case {} mismatch: {:?} != {:?}",
                case.input,
                actual,
                case.expected
            );
            CheckOutcome::Fail { actual }
        }
        Err(e) => CheckOutcome::Error {
            message: e.to_string(),
        },
    }
}

/// 运行一组用例
pub fn run_cases<'a, I>(cases: I) -> CheckReport
where
    I: IntoIterator<Item = &'a SanityCase>,
{
    let results = cases
        .into_iter()
        .map(|case| CaseResult {
            outcome: run_case(case),
            case: case.clone(),
        })
        .collect();

    CheckReport { results }
}
