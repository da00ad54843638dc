//! # 注文作成 API ハンドラ
//!
//! 既存の Tasso 患者に対して、キットの注文を単体で作成する。
//!
//! ## エンドポイント
//!
//! - `POST /orders/create` - 注文作成

use std::sync::Arc;

use axum::{
   Json,
   extract::{State, rejection::JsonRejection},
   response::{IntoResponse, Response},
};
use kitrelay_domain::order::OrderRequest;
use kitrelay_shared::ErrorResponse;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
   client::TassoClient,
   error::{WebhookError, log_and_convert_webhook_error},
};

/// 注文作成 API の共有状態
pub struct OrderState {
   pub tasso_client: Arc<dyn TassoClient>,
}

/// 注文作成の成功レスポンス
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderCreateResponse {
   pub status: String,
   /// Tasso が返した注文の `results`
   #[schema(value_type = Object)]
   pub order:  Value,
}

/// POST /orders/create
#[utoipa::path(
   post,
   path = "/orders/create",
   tag = "orders",
   request_body = OrderRequest,
   responses(
      (status = 200, description = "注文作成成功", body = OrderCreateResponse),
      (status = 400, description = "バリデーションエラー", body = ErrorResponse),
      (status = 500, description = "Tasso API の失敗", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn create_order(
   State(state): State<Arc<OrderState>>,
   payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Response {
   let result = match payload {
      Ok(Json(request)) => place_order(&state, request).await,
      Err(rejection) => Err(WebhookError::InvalidBody(rejection.body_text())),
   };

   match result {
      Ok(response) => Json(response).into_response(),
      Err(e) => log_and_convert_webhook_error("注文作成", e),
   }
}

async fn place_order(
   state: &OrderState,
   request: OrderRequest,
) -> Result<OrderCreateResponse, WebhookError> {
   let order = request.into_new_order()?;
   tracing::info!(patient_id = %order.patient_id, "注文作成リクエストを受け付けました");

   let token = state.tasso_client.authenticate().await?;
   let created = state.tasso_client.create_order(&token, &order).await?;
   tracing::info!(
      patient_id = %order.patient_id,
      order_id = %created.id,
      "Tasso に注文を作成しました"
   );

   Ok(OrderCreateResponse {
      status: "success".to_string(),
      order:  created.details,
   })
}
