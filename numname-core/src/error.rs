use std::fmt;

use thiserror::Error;

/// 出错的转换阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// 整体输入（按千分组前）
    Magnitude,
    /// 百位转换 [0, 999]
    Hundreds,
    /// 十位转换 [0, 99]
    Tens,
    /// 个位/十几查表 [0, 19]
    Ones,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Magnitude => "magnitude",
            Stage::Hundreds => "hundreds",
            Stage::Tens => "tens",
            Stage::Ones => "ones",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum NumnameError {
    // 转换错误
    #[error("Input out of range in {stage} stage: expected at most {max}, received {value}")]
    OutOfRange { stage: Stage, value: u64, max: u64 },

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(String),

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NumnameError {
    /// 是否为数值越界错误
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, NumnameError::OutOfRange { .. })
    }
}

pub type NumnameResult<T> = Result<T, NumnameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_contains_value() {
        let err = NumnameError::OutOfRange {
            stage: Stage::Tens,
            value: 120,
            max: 99,
        };
        let msg = err.to_string();
        assert!(msg.contains("tens"));
        assert!(msg.contains("120"));
        assert!(msg.contains("99"));
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: NumnameError = io.into();
        assert!(matches!(err, NumnameError::Io(_)));
        assert!(!err.is_out_of_range());
    }
}
