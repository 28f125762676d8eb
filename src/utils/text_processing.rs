// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 文本清理工具
//!
//! 结果页单元格文本在提取前统一经过这里的清理函数

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// 将连续空白折叠为单个空格并去除首尾空白
pub fn whitespace_cleanup(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// 仅保留文本中的ASCII数字
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}
