//! 宽松的请求字段反序列化
//!
//! 前端表单的 select 值以字符串提交，如 `"category": "5"`

use serde::{Deserialize, Deserializer};

/// JSON 整数或字符串
#[derive(Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(i64),
    Text(String),
}

/// 接受 JSON 整数或数字字符串的 i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "NumberOrString")]
pub struct FlexibleI64(pub i64);

impl TryFrom<NumberOrString> for FlexibleI64 {
    type Error = String;

    fn try_from(value: NumberOrString) -> Result<Self, Self::Error> {
        match value {
            NumberOrString::Number(v) => Ok(FlexibleI64(v)),
            NumberOrString::Text(text) => match text.trim().parse::<i64>() {
                Ok(v) => Ok(FlexibleI64(v)),
                Err(_) => Err(format!("Wrong value {text}, can not parse to i64")),
            },
        }
    }
}

// 查询参数中的页码非数字时视为未提供，回落到默认页；
// 溢出的数字页码钳制到 i64 边界，仍按越界页处理
pub fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(parse_page))
}

fn parse_page(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(page) = raw.parse::<i64>() {
        return Some(page);
    }

    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}
