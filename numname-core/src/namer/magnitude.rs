//! 千进制分组
//!
//! 从最高单位（trillion）往下逐组取出三位数，拼接单位词

use crate::error::{NumnameError, NumnameResult, Stage};
use crate::namer::small_number::hundreds_to_english;
use crate::namer::tables::{GROUP_BASE, SCALE_WORDS, UPPER_BOUND};

/// 将非负整数转换为英文
///
/// # 参数
/// - `num`: 待转换的整数，必须小于 1000^5
///
/// # 返回
/// - `Ok(String)`: 小写、单空格分隔的英文（例如："five thousand four hundred ninety one"）
/// - `Err`: 输入超出最大单位 trillion 的范围
///
/// # 示例
/// ```
/// # use numname_core::number_to_english;
/// assert_eq!(number_to_english(9456012).unwrap(),
///     "nine million four hundred fifty six thousand twelve");
/// ```
pub fn number_to_english(num: u64) -> NumnameResult<String> {
    if num >= UPPER_BOUND {
        tracing::debug!("input too large: {}", num);
        return Err(NumnameError::OutOfRange {
            stage: Stage::Magnitude,
            value: num,
            max: UPPER_BOUND - 1,
        });
    }

    if num == 0 {
        return Ok("zero".to_string());
    }

    let groups = digit_groups(num);
    let mut phrases = Vec::with_capacity(groups.len());

    for (i, &group) in groups.iter().enumerate() {
        // 为零的分组不输出任何内容
        if group == 0 {
            continue;
        }

        // k 为该分组的千次幂，0 表示个位分组
        let k = groups.len() - 1 - i;
        let mut phrase = hundreds_to_english(group)?;

        if k > 0 {
            tracing::trace!("group {} = {}", SCALE_WORDS[k - 1], group);
            phrase.push(' ');
            phrase.push_str(SCALE_WORDS[k - 1]);
        }

        phrases.push(phrase);
    }

    Ok(phrases.join(" "))
}

/// 将输入拆分为千进制分组，最高位在前（例如：21200215 -> [21, 200, 215]）
///
/// 前导的零分组被省略，中间的零分组保留
pub fn digit_groups(num: u64) -> Vec<u64> {
    let mut groups = Vec::new();
    let mut rest = num;

    loop {
        groups.push(rest % GROUP_BASE);
        rest /= GROUP_BASE;
        if rest == 0 {
            break;
        }
    }

    groups.reverse();
    groups
}
