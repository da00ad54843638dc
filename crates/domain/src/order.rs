//! # 注文作成リクエスト
//!
//! Tasso の `POST /orders` に送るボディを組み立てる。
//! 注文は 2 つの経路で作られる。
//!
//! - webhook: 患者作成の直後、送信データに NPI ID があるときのみ
//!   （[`NewOrder::for_submission`]）
//! - 単体 API: 既存患者に対して JSON で直接指定（[`OrderRequest`]）
//!
//! 任意項目は空なら送らない。Tasso は `null` を受け付けない項目がある。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    DomainError,
    lenient,
    submission::{NpiField, Submission},
};

/// 処方医の NPI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Npi {
    pub id:         String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name:  Option<String>,
}

impl Npi {
    /// フォームの NPI 項目から作る。ID が無ければ `None`。
    fn from_field(field: &NpiField) -> Option<Self> {
        let id = lenient::non_empty(field.id.as_deref())?;
        Some(Self {
            id:         id.to_string(),
            first_name: lenient::non_empty(field.first_name.as_deref()).map(str::to_string),
            last_name:  lenient::non_empty(field.last_name.as_deref()).map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provider {
    pub npi: Npi,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfiguration {
    pub configuration_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Specimen {
    pub container_identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    /// `YYYY-MM-DD`
    pub ship_by_date: String,
}

/// 注文に付与する任意属性
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CustomAttribute {
    pub name:  String,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub value: Value,
}

/// Tasso の注文作成リクエスト
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub patient_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_configuration: Option<OrderConfiguration>,
    pub provider: Provider,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub specimens: Vec<Specimen>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_attributes: Vec<CustomAttribute>,
}

impl NewOrder {
    fn new(patient_id: impl Into<String>, npi: Npi) -> Self {
        Self {
            patient_id: patient_id.into(),
            order_configuration: None,
            provider: Provider { npi },
            specimens: Vec::new(),
            timing: None,
            custom_attributes: Vec::new(),
        }
    }

    fn with_configuration_id(mut self, configuration_id: Option<&str>) -> Self {
        self.order_configuration =
            lenient::non_empty(configuration_id).map(|id| OrderConfiguration {
                configuration_id: id.to_string(),
            });
        self
    }

    fn with_container_identifier(mut self, container_identifier: Option<&str>) -> Self {
        self.specimens = lenient::non_empty(container_identifier)
            .map(|id| Specimen {
                container_identifier: id.to_string(),
            })
            .into_iter()
            .collect();
        self
    }

    fn with_ship_by_date(mut self, ship_by_date: Option<&str>) -> Self {
        self.timing = lenient::non_empty(ship_by_date).map(|date| Timing {
            ship_by_date: date.to_string(),
        });
        self
    }

    fn with_custom_attributes(mut self, custom_attributes: Vec<CustomAttribute>) -> Self {
        self.custom_attributes = custom_attributes;
        self
    }

    /// webhook の送信データから、作成直後の患者に対する注文を組み立てる
    ///
    /// 送信データに NPI ID が無ければ注文しない（`None`）。
    pub fn for_submission(submission: &Submission, patient_id: &str) -> Option<Self> {
        let npi = submission.npi.as_ref().and_then(Npi::from_field)?;

        Some(
            Self::new(patient_id, npi)
                .with_configuration_id(submission.configuration_id.as_deref())
                .with_container_identifier(submission.container_identifier.as_deref())
                .with_ship_by_date(submission.ship_by_date.as_deref()),
        )
    }
}

/// 注文作成 API のリクエストボディ
///
/// ```json
/// {
///   "patientId": "e3bb6a15-e19e-47f2-b484-87939cae395f",
///   "configurationId": "fOsd_k9GQ3",
///   "npi": {"id": "1234509876", "firstName": "Marcy", "lastName": "Frank"},
///   "containerIdentifier": "0000000176",
///   "shipByDate": "2021-10-18",
///   "customAttributes": [{"name": "attrib1", "value": "a str"}]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OrderRequest {
    #[serde(default, deserialize_with = "lenient::string")]
    pub patient_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub configuration_id: Option<String>,
    #[serde(default)]
    pub npi: Option<NpiField>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub container_identifier: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub ship_by_date: Option<String>,
    #[serde(default)]
    pub custom_attributes: Option<Vec<CustomAttribute>>,
}

impl OrderRequest {
    /// 検証して注文作成リクエストに変換する
    ///
    /// # エラー
    ///
    /// - `patientId` が無い
    /// - `npi.id` が無い
    pub fn into_new_order(self) -> Result<NewOrder, DomainError> {
        let patient_id = lenient::non_empty(self.patient_id.as_deref())
            .ok_or_else(|| DomainError::Validation("patientId は必須です".to_string()))?;
        let npi = self
            .npi
            .as_ref()
            .and_then(Npi::from_field)
            .ok_or_else(|| DomainError::Validation("npi.id は必須です".to_string()))?;

        Ok(NewOrder::new(patient_id, npi)
            .with_configuration_id(self.configuration_id.as_deref())
            .with_container_identifier(self.container_identifier.as_deref())
            .with_ship_by_date(self.ship_by_date.as_deref())
            .with_custom_attributes(self.custom_attributes.unwrap_or_default()))
    }
}
