//! # 性別の語彙変換
//!
//! Jotform の性別項目（`Male` / `Female` など）を Tasso の 2 つの項目、
//! `gender`（性自認）と `assignedSex`（出生時に割り当てられた性）へ写す。
//!
//! | フォーム値（小文字化後） | `gender` | `assignedSex` |
//! |--------------------------|----------|---------------|
//! | `male` | `cisMale` | `male` |
//! | `female` | `cisFemale` | `female` |
//! | その他・未入力 | `unspecified` | `unknown` |

use serde::Serialize;

/// Tasso の `gender`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    CisMale,
    CisFemale,
    Unspecified,
}

/// Tasso の `assignedSex`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignedSex {
    Male,
    Female,
    Unknown,
}

/// フォームの性別値を Tasso の語彙に変換する
pub fn from_form_value(value: Option<&str>) -> (Gender, AssignedSex) {
    let value = value.unwrap_or_default().to_lowercase();

    match value.as_str() {
        "male" => (Gender::CisMale, AssignedSex::Male),
        "female" => (Gender::CisFemale, AssignedSex::Female),
        _ => (Gender::Unspecified, AssignedSex::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("Male"), Gender::CisMale, AssignedSex::Male)]
    #[case(Some("male"), Gender::CisMale, AssignedSex::Male)]
    #[case(Some("FEMALE"), Gender::CisFemale, AssignedSex::Female)]
    #[case(Some("Non-binary"), Gender::Unspecified, AssignedSex::Unknown)]
    #[case(Some("Prefer not to say"), Gender::Unspecified, AssignedSex::Unknown)]
    #[case(Some(" male "), Gender::Unspecified, AssignedSex::Unknown)]
    #[case(Some(""), Gender::Unspecified, AssignedSex::Unknown)]
    #[case(None, Gender::Unspecified, AssignedSex::Unknown)]
    fn test_フォーム値をtassoの語彙に変換する(
        #[case] value: Option<&str>,
        #[case] gender: Gender,
        #[case] sex: AssignedSex,
    ) {
        assert_eq!(from_form_value(value), (gender, sex));
    }

    #[test]
    fn test_serialize結果がtassoの語彙と一致する() {
        assert_eq!(
            serde_json::to_value(Gender::CisFemale).unwrap(),
            serde_json::json!("cisFemale")
        );
        assert_eq!(
            serde_json::to_value(Gender::Unspecified).unwrap(),
            serde_json::json!("unspecified")
        );
        assert_eq!(
            serde_json::to_value(AssignedSex::Unknown).unwrap(),
            serde_json::json!("unknown")
        );
    }
}
