//! 英文数字词表
//!
//! 所有表都是进程级只读常量，可被任意线程直接共享

/// 单位词数量
pub const SCALE_COUNT: usize = 4;

/// 千进制单位词，下标 0 对应 1000^1
pub static SCALE_WORDS: [&str; SCALE_COUNT] = ["thousand", "million", "billion", "trillion"];

/// 十位词，下标为十位数字；0 和 1 由 ONES_WORDS 覆盖，留空
pub static TENS_WORDS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// 0 ~ 19（含不规则的 eleven ~ nineteen）
pub static ONES_WORDS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
    "seventeen", "eighteen", "nineteen",
];

/// 千进制分组的基数
pub const GROUP_BASE: u64 = 1000;

/// 支持的上界（不含），由单位词数量决定：1000^(单位词数 + 1)
pub const UPPER_BOUND: u64 = GROUP_BASE.pow(SCALE_COUNT as u32 + 1);
