//! # 米国州コード変換
//!
//! Jotform の住所項目は州をフルネーム（`"Washington"`）で返すが、
//! Tasso の `district1` は USPS の 2 文字コード（`"WA"`）を要求する。

/// 州コードが決まらないときの値
pub const UNKNOWN_STATE: &str = "Unknown";

/// 州名と USPS コードの対応（50 州 + コロンビア特別区）
const US_STATE_CODES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
    ("District of Columbia", "DC"),
];

/// 州名を USPS の州コードに変換する
///
/// - ちょうど 2 文字ならコードとみなしてそのまま返す
/// - 州名の完全一致、次いで前後空白を除いた大文字小文字無視の一致でコードを返す
/// - どれにも当たらなければ [`UNKNOWN_STATE`]
///
/// ```
/// use kitrelay_domain::us_state::to_state_code;
///
/// assert_eq!(to_state_code("New York"), "NY");
/// assert_eq!(to_state_code("WA"), "WA");
/// assert_eq!(to_state_code("Ontario"), "Unknown");
/// ```
pub fn to_state_code(state: &str) -> String {
    if state.chars().count() == 2 {
        return state.to_string();
    }

    if let Some((_, code)) = US_STATE_CODES.iter().find(|(name, _)| *name == state) {
        return (*code).to_string();
    }

    let trimmed = state.trim();
    US_STATE_CODES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        .map_or_else(|| UNKNOWN_STATE.to_string(), |(_, code)| (*code).to_string())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Washington", "WA")]
    #[case("West Virginia", "WV")]
    #[case("District of Columbia", "DC")]
    #[case("Wyoming", "WY")]
    #[case("new hampshire", "NH")]
    #[case("  Texas ", "TX")]
    fn test_州名を州コードに変換する(#[case] state: &str, #[case] expected: &str) {
        assert_eq!(to_state_code(state), expected);
    }

    #[rstest]
    #[case("WA")]
    #[case("ny")]
    #[case("ZZ")]
    fn test_2文字はそのまま返す(#[case] state: &str) {
        assert_eq!(to_state_code(state), state);
    }

    #[rstest]
    #[case("Unknown")]
    #[case("")]
    #[case("Ontario")]
    #[case("Puerto Rico")]
    fn test_不明な州はunknownを返す(#[case] state: &str) {
        assert_eq!(to_state_code(state), UNKNOWN_STATE);
    }

    #[test]
    fn test_対応表は51件でコードが重複しない() {
        let mut codes: Vec<&str> = US_STATE_CODES.iter().map(|(_, code)| *code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 51);
    }
}
