//! # Jotform 送信データ
//!
//! Jotform の webhook はフォーム本体の `rawRequest` フィールドに、送信内容を
//! JSON 文字列として載せてくる。キー名は Jotform が質問ごとに採番したもの
//! （`q3_name` など）で、フォームを作り直すと変わりうる。
//!
//! ## 読み取る項目
//!
//! | キー | 内容 |
//! |------|------|
//! | `q3_name` | `{first, last}` |
//! | `q4_email` | メールアドレス |
//! | `q5_shippingAddress` | `{addr_line1, addr_line2, city, state, postal}` |
//! | `q6_phoneNumber` | `{area, phone}` |
//! | `q15_gender` | 性別 |
//! | `q16_dateOf` | 生年月日 `{year, month, day}` |
//! | `q17_race` | 人種 |
//! | `event_id` | 送信イベント ID |
//! | `path` | 送信先パス（`/submit/<form id>`） |
//! | `configurationId` / `npi` / `containerIdentifier` / `shipByDate` | 注文用の追加項目 |
//!
//! 未知のキーは無視する。

use serde::Deserialize;
use serde_json::Value;

use crate::{DomainError, lenient};

/// 氏名（`q3_name`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NameField {
    #[serde(default, deserialize_with = "lenient::string")]
    pub first: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last:  Option<String>,
}

/// 配送先住所（`q5_shippingAddress`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddressField {
    #[serde(default, deserialize_with = "lenient::string")]
    pub addr_line1: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub addr_line2: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub city:       Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub state:      Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub postal:     Option<String>,
}

/// 電話番号（`q6_phoneNumber`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PhoneField {
    #[serde(default, deserialize_with = "lenient::string")]
    pub area:  Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: Option<String>,
}

/// 日付（`q16_dateOf`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DateField {
    #[serde(default, deserialize_with = "lenient::string")]
    pub year:  Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub month: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub day:   Option<String>,
}

/// 処方医の NPI 情報（`npi`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NpiField {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id:         Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_name:  Option<String>,
}

/// Jotform の送信データ
///
/// どの項目も欠落しうるため、すべて `Option` で保持する。
/// 既定値の補完は各正規化モジュールの責務。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Submission {
    #[serde(rename = "q3_name", default, deserialize_with = "lenient::object")]
    pub name: Option<NameField>,

    #[serde(rename = "q4_email", default, deserialize_with = "lenient::string")]
    pub email: Option<String>,

    #[serde(
        rename = "q5_shippingAddress",
        default,
        deserialize_with = "lenient::object"
    )]
    pub shipping_address: Option<AddressField>,

    #[serde(rename = "q6_phoneNumber", default, deserialize_with = "lenient::object")]
    pub phone: Option<PhoneField>,

    #[serde(rename = "q15_gender", default, deserialize_with = "lenient::string")]
    pub gender: Option<String>,

    #[serde(rename = "q16_dateOf", default, deserialize_with = "lenient::object")]
    pub date_of_birth: Option<DateField>,

    #[serde(rename = "q17_race", default, deserialize_with = "lenient::string")]
    pub race: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub event_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub path: Option<String>,

    #[serde(rename = "configurationId", default, deserialize_with = "lenient::string")]
    pub configuration_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::object")]
    pub npi: Option<NpiField>,

    #[serde(
        rename = "containerIdentifier",
        default,
        deserialize_with = "lenient::string"
    )]
    pub container_identifier: Option<String>,

    #[serde(rename = "shipByDate", default, deserialize_with = "lenient::string")]
    pub ship_by_date: Option<String>,
}

impl Submission {
    /// `rawRequest` の JSON 文字列をパースする
    ///
    /// # エラー
    ///
    /// JSON として不正、またはトップレベルがオブジェクトでない場合は
    /// `DomainError::MalformedSubmission` を返す。
    pub fn from_raw_request(raw: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| DomainError::MalformedSubmission(e.to_string()))?;

        if !value.is_object() {
            return Err(DomainError::MalformedSubmission(
                "rawRequest がオブジェクトではありません".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|e| DomainError::MalformedSubmission(e.to_string()))
    }

    /// 送信イベント ID（未送信時は `"unknown"`）
    pub fn event_id(&self) -> &str {
        self.event_id.as_deref().unwrap_or("unknown")
    }

    /// 注文に使う NPI ID（空文字列は未入力扱い）
    pub fn npi_id(&self) -> Option<&str> {
        lenient::non_empty(self.npi.as_ref().and_then(|npi| npi.id.as_deref()))
    }
}
