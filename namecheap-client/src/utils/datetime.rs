//! 日期反序列化工具
//!
//! Namecheap 以 `MM/DD/YYYY` 文本返回日期（属性或元素内容）。
//! 空字符串视为缺失。

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// API 使用的日期格式
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// 反序列化 `MM/DD/YYYY` 为 Option<`NaiveDate`>
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => parse_date(&s)
            .map(Some)
            .ok_or_else(|| Error::custom(format!("Invalid MM/DD/YYYY date: {s}"))),
        _ => Ok(None),
    }
}

/// 解析 `MM/DD/YYYY`
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}
