//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! Webhook サーバーが返すすべてのエラーレスポンスの共通構造体。
//!
//! `ErrorResponse` は純粋なデータ構造で、axum の `IntoResponse` 変換は
//! アプリケーション側の責務とする（shared に axum 依存を入れない）。

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://kitrelay.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// `type` フィールドは URI で問題の種類を識別する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   ///
   /// `error_type_suffix` はベース URI に付加される（例: `"missing-raw-request"`）。
   pub fn new(
      error_type_suffix: &str,
      title: impl Into<String>,
      status: u16,
      detail: impl Into<String>,
   ) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
         title: title.into(),
         status,
         detail: detail.into(),
      }
   }

   /// 400 Bad Request
   pub fn bad_request(detail: impl Into<String>) -> Self {
      Self::new("bad-request", "Bad Request", 400, detail)
   }

   /// 401 Unauthorized
   pub fn unauthorized(detail: impl Into<String>) -> Self {
      Self::new("unauthorized", "Unauthorized", 401, detail)
   }

   /// 400 Validation Error
   pub fn validation_error(detail: impl Into<String>) -> Self {
      Self::new("validation-error", "Validation Error", 400, detail)
   }

   /// 500 Upstream Error
   ///
   /// Tasso API の失敗をそのまま呼び出し元へ伝える。
   /// detail には上流のエラーメッセージが入る。
   pub fn upstream_error(detail: impl Into<String>) -> Self {
      Self::new("upstream-error", "Upstream Error", 500, detail)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_new_で全フィールドが正しく設定される() {
      let error = ErrorResponse::new("missing-raw-request", "Missing Raw Request", 400, "なし");

      assert_eq!(
         error.error_type,
         "https://kitrelay.example.com/errors/missing-raw-request"
      );
      assert_eq!(error.title, "Missing Raw Request");
      assert_eq!(error.status, 400);
      assert_eq!(error.detail, "なし");
   }

   #[test]
   fn test_upstream_error_はdetailをそのまま保持する() {
      let error = ErrorResponse::upstream_error("Tasso order creation failed: 422");

      assert_eq!(
         error.error_type,
         "https://kitrelay.example.com/errors/upstream-error"
      );
      assert_eq!(error.status, 500);
      assert_eq!(error.detail, "Tasso order creation failed: 422");
   }

   #[test]
   fn test_jsonシリアライズでtypeフィールド名が正しい() {
      let error = ErrorResponse::validation_error("Missing patient name");
      let json = serde_json::to_value(&error).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "type": "https://kitrelay.example.com/errors/validation-error",
            "title": "Validation Error",
            "status": 400,
            "detail": "Missing patient name"
         })
      );
   }

   #[test]
   fn test_全便利コンストラクタのstatusが正しい() {
      assert_eq!(ErrorResponse::bad_request("").status, 400);
      assert_eq!(ErrorResponse::unauthorized("").status, 401);
      assert_eq!(ErrorResponse::validation_error("").status, 400);
      assert_eq!(ErrorResponse::upstream_error("").status, 500);
   }
}
