//! 英文数字命名模块
//!
//! 将非负整数转换为英文表达：
//! 千进制分组 -> 百位 -> 十位 -> 个位查表

pub mod tables;
pub mod small_number;
pub mod magnitude;

pub use magnitude::{digit_groups, number_to_english};
pub use small_number::{hundreds_to_english, ones_to_english, tens_to_english};
pub use tables::UPPER_BOUND;

use crate::error::NumnameResult;

/// 英文数字命名器
pub struct EnglishNumberNamer;

impl EnglishNumberNamer {
    /// 将整数转换为英文，等价于 [`number_to_english`]
    pub fn convert(num: u64) -> NumnameResult<String> {
        number_to_english(num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_matches_free_function() {
        for num in [0, 7, 54, 1115, 55555, 1_000_200] {
            assert_eq!(
                EnglishNumberNamer::convert(num).unwrap(),
                number_to_english(num).unwrap()
            );
        }
    }
}
