//! # webhook シークレット検証ミドルウェア
//!
//! Jotform の webhook URL に付けた `?secret=` を、設定値と照合する。
//! シークレットが設定されていないときはこのミドルウェア自体を組み込まない。

use axum::{
   body::Body,
   extract::{Query, State},
   http::Request,
   middleware::Next,
   response::Response,
};
use serde::Deserialize;
use subtle::ConstantTimeEq;

use crate::error::{WebhookError, log_and_convert_webhook_error};

/// webhook シークレット検証の状態
#[derive(Clone)]
pub struct WebhookSecretState {
   pub secret: String,
}

#[derive(Debug, Deserialize)]
struct SecretQuery {
   secret: Option<String>,
}

/// 与えられたシークレットが一致するか
///
/// タイミング攻撃対策として定数時間比較を使用する。
fn secret_matches(expected: &str, provided: Option<&str>) -> bool {
   provided.is_some_and(|provided| expected.as_bytes().ct_eq(provided.as_bytes()).into())
}

/// webhook シークレット検証ミドルウェア
pub async fn webhook_secret_middleware(
   State(state): State<WebhookSecretState>,
   request: Request<Body>,
   next: Next,
) -> Response {
   let provided = Query::<SecretQuery>::try_from_uri(request.uri())
      .ok()
      .and_then(|Query(query)| query.secret);

   if !secret_matches(&state.secret, provided.as_deref()) {
      return log_and_convert_webhook_error("webhook シークレット検証", WebhookError::Unauthorized);
   }

   next.run(request).await
}
