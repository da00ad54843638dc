//! # 患者作成リクエスト
//!
//! Jotform の送信データから Tasso の `POST /patients` に送るボディを組み立てる。
//!
//! ## 不変条件
//!
//! - 姓・名がともに入力されている（欠けていれば Tasso を呼ぶ前に弾く）
//! - `subjectId` は `AUTO-` + イベント ID（`_` は `-` に置換）
//! - `smsConsent` は常に `false`

use serde::Serialize;

use crate::{
    DomainError,
    address::ShippingAddress,
    gender::{self, AssignedSex, Gender},
    lenient,
    phone::PhoneNumber,
    program::{Program, ProjectIds},
    submission::{DateField, Submission},
};

/// `subjectId` の接頭辞
const SUBJECT_ID_PREFIX: &str = "AUTO-";

/// 連絡先
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email:        Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<PhoneNumber>,
}

/// Tasso の患者作成リクエスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub project_id:          String,
    pub subject_id:          String,
    pub first_name:          String,
    pub last_name:           String,
    pub shipping_address:    ShippingAddress,
    pub contact_information: ContactInformation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth:       Option<String>,
    pub gender:              Gender,
    pub assigned_sex:        AssignedSex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race:                Option<String>,
    pub sms_consent:         bool,
}

impl NewPatient {
    /// 送信データから患者作成リクエストを組み立てる
    ///
    /// # エラー
    ///
    /// 姓または名が未入力なら `DomainError::Validation` を返す。
    pub fn from_submission(
        submission: &Submission,
        project_ids: &ProjectIds,
    ) -> Result<Self, DomainError> {
        let name = submission.name.as_ref();
        let first_name = lenient::non_empty(name.and_then(|n| n.first.as_deref()));
        let last_name = lenient::non_empty(name.and_then(|n| n.last.as_deref()));
        let (Some(first_name), Some(last_name)) = (first_name, last_name) else {
            return Err(DomainError::Validation(
                "患者の氏名（姓・名）が入力されていません".to_string(),
            ));
        };

        let program = Program::from_submit_path(submission.path.as_deref());
        let phone = submission.phone.as_ref();
        let (gender, assigned_sex) = gender::from_form_value(submission.gender.as_deref());

        Ok(Self {
            project_id: project_ids.project_for(program).to_string(),
            subject_id: subject_id(submission.event_id()),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            shipping_address: ShippingAddress::from_field(submission.shipping_address.as_ref()),
            contact_information: ContactInformation {
                email:        lenient::non_empty(submission.email.as_deref()).map(str::to_string),
                phone_number: PhoneNumber::normalize(
                    phone.and_then(|p| p.area.as_deref()),
                    phone.and_then(|p| p.phone.as_deref()),
                ),
            },
            date_of_birth: submission.date_of_birth.as_ref().and_then(format_date_of_birth),
            gender,
            assigned_sex,
            race: lenient::non_empty(submission.race.as_deref()).map(str::to_string),
            sms_consent: false,
        })
    }
}

/// イベント ID から `subjectId` を作る
///
/// ```
/// use kitrelay_domain::patient::subject_id;
///
/// assert_eq!(subject_id("5812_3345_abc"), "AUTO-5812-3345-abc");
/// ```
pub fn subject_id(event_id: &str) -> String {
    format!("{SUBJECT_ID_PREFIX}{}", event_id.replace('_', "-"))
}

/// 生年月日を `YYYY-MM-DD` に整形する
///
/// 年・月・日のいずれかが欠けていれば `None`。
/// 月と日は数字 1 桁なら 0 埋めする。
fn format_date_of_birth(date: &DateField) -> Option<String> {
    let year = lenient::non_empty(date.year.as_deref())?.trim();
    let month = lenient::non_empty(date.month.as_deref())?.trim();
    let day = lenient::non_empty(date.day.as_deref())?.trim();

    Some(format!("{year}-{}-{}", zero_pad(month), zero_pad(day)))
}

fn zero_pad(value: &str) -> String {
    match value.parse::<u8>() {
        Ok(n) if value.len() == 1 => format!("{n:02}"),
        _ => value.to_string(),
    }
}
