//! # ヘルスチェックハンドラ
//!
//! Webhook サーバーの稼働状態を確認するためのエンドポイント。
//!
//! - `/health`: Liveness Check（常に `"healthy"` を返す）
//!
//! レスポンス型は [`kitrelay_shared::HealthResponse`] を参照。

use axum::Json;
use kitrelay_shared::HealthResponse;

/// Webhook サーバーのヘルスチェックエンドポイント
#[utoipa::path(
   get,
   path = "/health",
   tag = "health",
   responses(
      (status = 200, description = "サーバー稼働中", body = HealthResponse)
   )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
