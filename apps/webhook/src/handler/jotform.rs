//! # Jotform webhook ハンドラ
//!
//! Jotform の送信通知を受け、Tasso に患者を作成する。
//! 送信データに処方医の NPI ID があれば、続けてキットの注文も作成する。
//!
//! ## エンドポイント
//!
//! - `POST /webhooks/jotform/tasso` - 患者作成（＋注文作成）

use std::sync::Arc;

use axum::{
   Form,
   Json,
   extract::{FromRequest, Multipart, Request, State},
   http::header::CONTENT_TYPE,
   response::{IntoResponse, Response},
};
use kitrelay_domain::{
   order::NewOrder,
   patient::NewPatient,
   program::{Program, ProjectIds},
   submission::Submission,
};
use kitrelay_shared::ErrorResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
   client::TassoClient,
   error::{WebhookError, log_and_convert_webhook_error},
};

/// フォームのうち送信データ本体を持つ項目名
const RAW_REQUEST_FIELD: &str = "rawRequest";

/// 注文しなかったときの案内文
const NO_ORDER_NOTE: &str = "Patient created but no order was placed (missing configuration)";

/// Jotform webhook の共有状態
pub struct JotformState {
   pub tasso_client: Arc<dyn TassoClient>,
   pub project_ids:  ProjectIds,
}

// --- リクエスト型 ---

/// Jotform が POST するフォーム
///
/// `rawRequest` 以外の項目も送られてくるが使わない。
#[derive(Debug, Deserialize, ToSchema)]
pub struct JotformForm {
   /// 送信データの JSON 文字列
   #[serde(rename = "rawRequest")]
   pub raw_request: Option<String>,
}

/// フォームから取り出した `rawRequest`
///
/// `multipart/form-data` と `application/x-www-form-urlencoded` の両方を受け付ける。
#[derive(Debug)]
pub struct RawRequest(pub String);

impl<S> FromRequest<S> for RawRequest
where
   S: Send + Sync,
{
   type Rejection = WebhookError;

   async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
      let is_multipart = req
         .headers()
         .get(CONTENT_TYPE)
         .and_then(|v| v.to_str().ok())
         .is_some_and(|v| v.starts_with("multipart/form-data"));

      let raw_request = if is_multipart {
         let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| WebhookError::InvalidBody(e.body_text()))?;
         read_multipart_field(multipart).await?
      } else {
         let Form(form) = Form::<JotformForm>::from_request(req, state)
            .await
            .map_err(|e| WebhookError::InvalidBody(e.body_text()))?;
         form.raw_request
      };

      raw_request
         .filter(|raw| !raw.trim().is_empty())
         .map(RawRequest)
         .ok_or(WebhookError::MissingRawRequest)
   }
}

async fn read_multipart_field(mut multipart: Multipart) -> Result<Option<String>, WebhookError> {
   while let Some(field) = multipart
      .next_field()
      .await
      .map_err(|e| WebhookError::InvalidBody(e.body_text()))?
   {
      if field.name() == Some(RAW_REQUEST_FIELD) {
         let text = field
            .text()
            .await
            .map_err(|e| WebhookError::InvalidBody(e.body_text()))?;
         return Ok(Some(text));
      }
   }
   Ok(None)
}

// --- レスポンス型 ---

/// webhook の成功レスポンス
///
/// 注文を作成したときは `tasso_order_id` と `order_details`、
/// 患者のみのときは `note` が入る。
#[derive(Debug, Serialize, ToSchema)]
pub struct JotformWebhookResponse {
   pub status:           String,
   pub tasso_patient_id: String,
   #[serde(skip_serializing_if = "Option::is_none")]
   pub tasso_order_id:   Option<String>,
   /// Tasso が返した注文の `results`
   #[serde(skip_serializing_if = "Option::is_none")]
   #[schema(value_type = Option<Object>)]
   pub order_details:    Option<Value>,
   #[serde(skip_serializing_if = "Option::is_none")]
   pub note:             Option<String>,
}

impl JotformWebhookResponse {
   fn order_placed(patient_id: String, order_id: String, order_details: Value) -> Self {
      Self {
         status:           "success".to_string(),
         tasso_patient_id: patient_id,
         tasso_order_id:   Some(order_id),
         order_details:    Some(order_details),
         note:             None,
      }
   }

   fn patient_only(patient_id: String) -> Self {
      Self {
         status:           "success".to_string(),
         tasso_patient_id: patient_id,
         tasso_order_id:   None,
         order_details:    None,
         note:             Some(NO_ORDER_NOTE.to_string()),
      }
   }
}

// --- ハンドラ ---

/// POST /webhooks/jotform/tasso
///
/// 送信データを検証してから Tasso を呼ぶ。検証に失敗したら Tasso には何も送らない。
#[utoipa::path(
   post,
   path = "/webhooks/jotform/tasso",
   tag = "webhooks",
   security((), ("webhook_secret" = [])),
   request_body(
      content = JotformForm,
      content_type = "application/x-www-form-urlencoded",
      description = "Jotform の送信通知（multipart/form-data も可）"
   ),
   responses(
      (status = 200, description = "患者作成（＋注文作成）成功", body = JotformWebhookResponse),
      (status = 400, description = "送信データが不正", body = ErrorResponse),
      (status = 401, description = "シークレット不一致", body = ErrorResponse),
      (status = 500, description = "Tasso API の失敗", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn jotform_webhook(
   State(state): State<Arc<JotformState>>,
   payload: Result<RawRequest, WebhookError>,
) -> Response {
   let result = match payload {
      Ok(RawRequest(raw)) => process_submission(&state, &raw).await,
      Err(e) => Err(e),
   };

   match result {
      Ok(response) => Json(response).into_response(),
      Err(e) => log_and_convert_webhook_error("Jotform webhook", e),
   }
}

async fn process_submission(
   state: &JotformState,
   raw: &str,
) -> Result<JotformWebhookResponse, WebhookError> {
   let submission = Submission::from_raw_request(raw)?;
   let patient = NewPatient::from_submission(&submission, &state.project_ids)?;

   let program: &'static str = Program::from_submit_path(submission.path.as_deref()).into();
   tracing::info!(
      submission.path = submission.path.as_deref().unwrap_or_default(),
      program,
      subject_id = %patient.subject_id,
      "Jotform の送信を受け付けました"
   );

   let token = state.tasso_client.authenticate().await?;
   let created = state.tasso_client.create_patient(&token, &patient).await?;
   tracing::info!(patient_id = %created.id, "Tasso に患者を作成しました");

   let Some(order) = NewOrder::for_submission(&submission, &created.id) else {
      tracing::info!(patient_id = %created.id, "NPI ID が無いため注文は作成しません");
      return Ok(JotformWebhookResponse::patient_only(created.id));
   };

   let order_created = state.tasso_client.create_order(&token, &order).await?;
   tracing::info!(
      patient_id = %created.id,
      order_id = %order_created.id,
      "Tasso に注文を作成しました"
   );

   Ok(JotformWebhookResponse::order_placed(
      created.id,
      order_created.id,
      order_created.details,
   ))
}
