//! # 配送先住所の正規化
//!
//! Tasso の `shippingAddress` はすべての項目が必須のため、未入力の項目は
//! 既定値で埋める。国は米国固定。

use serde::Serialize;

use crate::{lenient, submission::AddressField, us_state};

/// 未入力の住所項目に入れる値
pub const UNKNOWN: &str = "Unknown";
/// 未入力の郵便番号に入れる値
pub const UNKNOWN_POSTAL_CODE: &str = "00000";
/// 国コード
pub const COUNTRY_US: &str = "US";

/// Tasso の配送先住所
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub address1:    String,
    pub address2:    String,
    pub city:        String,
    /// 州コード
    pub district1:   String,
    pub postal_code: String,
    pub country:     String,
}

impl ShippingAddress {
    /// フォームの住所項目から配送先住所を作る
    ///
    /// 住所項目そのものが無い場合もすべて既定値で埋める。
    pub fn from_field(field: Option<&AddressField>) -> Self {
        let field = field.cloned().unwrap_or_default();
        let or_unknown =
            |v: &Option<String>| lenient::non_empty(v.as_deref()).unwrap_or(UNKNOWN).to_string();

        let state = lenient::non_empty(field.state.as_deref()).unwrap_or(UNKNOWN);

        Self {
            address1:    or_unknown(&field.addr_line1),
            address2:    or_unknown(&field.addr_line2),
            city:        or_unknown(&field.city),
            district1:   us_state::to_state_code(state),
            postal_code: lenient::non_empty(field.postal.as_deref())
                .unwrap_or(UNKNOWN_POSTAL_CODE)
                .to_string(),
            country:     COUNTRY_US.to_string(),
        }
    }
}
