//! 型の揺れを許容するデシリアライザ
//!
//! Jotform の `rawRequest` は項目の型が安定しない（未入力の複合項目が `""` で
//! 届く、郵便番号が数値で届く等）。個々の項目の型違いでリクエスト全体を
//! 失敗させないよう、想定外の型は「未入力」として扱う。

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// 文字列項目を読む
///
/// 文字列はそのまま、数値は文字列化し、それ以外（null / bool / 配列 / オブジェクト）は `None`。
pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// 複合項目（オブジェクト）を読む
///
/// オブジェクト以外、または中身が `T` に合わない場合は `None`。
pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(v @ Value::Object(_)) => serde_json::from_value(v).ok(),
        _ => None,
    })
}

/// 空白のみ・空文字列を `None` に寄せる
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
