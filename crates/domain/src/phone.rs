//! # 電話番号の正規化
//!
//! Tasso は国番号付きの数字のみ（`12124567890` 形式）を受け付ける。
//! Jotform の電話番号項目は市外局番と番号が分かれており、括弧やハイフンを含む。

use std::fmt;

use serde::Serialize;

/// 正規化済みの米国電話番号（`1` + 10 桁）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// 市外局番と番号から電話番号を組み立てる
    ///
    /// 数字以外を取り除いたうえで、
    ///
    /// - 10 桁なら先頭に `1` を付ける
    /// - `1` で始まる 11 桁ならそのまま使う
    /// - それ以外は `None`（連絡先に電話番号を含めない）
    ///
    /// ```
    /// use kitrelay_domain::phone::PhoneNumber;
    ///
    /// let phone = PhoneNumber::normalize(Some("(863)"), Some("275-6381")).unwrap();
    /// assert_eq!(phone.as_str(), "18632756381");
    /// ```
    pub fn normalize(area: Option<&str>, phone: Option<&str>) -> Option<Self> {
        let digits: String = area
            .unwrap_or_default()
            .chars()
            .chain(phone.unwrap_or_default().chars())
            .filter(char::is_ascii_digit)
            .collect();

        match digits.len() {
            10 => Some(Self(format!("1{digits}"))),
            11 if digits.starts_with('1') => Some(Self(digits)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("212"), Some("4567890"), "12124567890")]
    #[case(Some("(212)"), Some("456-7890"), "12124567890")]
    #[case(None, Some("212 456 7890"), "12124567890")]
    #[case(Some("1212"), Some("4567890"), "12124567890")]
    #[case(Some("+1 (212)"), Some("456.7890"), "12124567890")]
    fn test_有効な番号は国番号付きに正規化する(
        #[case] area: Option<&str>,
        #[case] phone: Option<&str>,
        #[case] expected: &str,
    ) {
        let normalized = PhoneNumber::normalize(area, phone).unwrap();
        assert_eq!(normalized.as_str(), expected);
    }

    #[rstest]
    #[case(None, None, "未入力")]
    #[case(Some("212"), Some("456789"), "9 桁")]
    #[case(Some("2212"), Some("4567890"), "1 以外で始まる 11 桁")]
    #[case(Some("44"), Some("2079460000"), "12 桁")]
    #[case(Some("abc"), Some("defg"), "数字なし")]
    fn test_不正な番号はnoneを返す(
        #[case] area: Option<&str>,
        #[case] phone: Option<&str>,
        #[case] _reason: &str,
    ) {
        assert_eq!(PhoneNumber::normalize(area, phone), None);
    }

    #[test]
    fn test_serializeは文字列になる() {
        let phone = PhoneNumber::normalize(Some("212"), Some("4567890")).unwrap();
        assert_eq!(
            serde_json::to_value(&phone).unwrap(),
            serde_json::json!("12124567890")
        );
    }
}
