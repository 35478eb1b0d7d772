//! 三位以内的数字转换
//!
//! 百位 -> 十位 -> 个位查表，逐级委托。越界检查在正常调用路径上不可达，
//! 但仍以错误返回，不做静默截断。

use crate::error::{NumnameError, NumnameResult, Stage};
use crate::namer::tables::{ONES_WORDS, TENS_WORDS};

/// 将 [0, 999] 转换为英文
pub fn hundreds_to_english(num: u64) -> NumnameResult<String> {
    if num > 999 {
        return Err(out_of_range(Stage::Hundreds, num, 999));
    }

    if num < 100 {
        return tens_to_english(num);
    }

    let hundreds = num / 100;
    let rest = num % 100;

    let mut words = format!("{} hundred", ones_to_english(hundreds)?);
    if rest > 0 {
        words.push(' ');
        words.push_str(&tens_to_english(rest)?);
    }

    Ok(words)
}

/// 将 [0, 99] 转换为英文
pub fn tens_to_english(num: u64) -> NumnameResult<String> {
    if num > 99 {
        return Err(out_of_range(Stage::Tens, num, 99));
    }

    if num < 20 {
        return ones_to_english(num).map(str::to_string);
    }

    let tens_word = TENS_WORDS[(num / 10) as usize];
    let ones = num % 10;

    if ones == 0 {
        Ok(tens_word.to_string())
    } else {
        Ok(format!("{} {}", tens_word, ones_to_english(ones)?))
    }
}

/// 查表 [0, 19]
pub fn ones_to_english(num: u64) -> NumnameResult<&'static str> {
    if num > 19 {
        return Err(out_of_range(Stage::Ones, num, 19));
    }

    Ok(ONES_WORDS[num as usize])
}

fn out_of_range(stage: Stage, value: u64, max: u64) -> NumnameError {
    tracing::debug!("{} stage rejected {} (max {})", stage, value, max);
    NumnameError::OutOfRange { stage, value, max }
}
