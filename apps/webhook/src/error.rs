//! # Webhook エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換。
//!
//! | エラー | ステータス | `type` |
//! |--------|-----------|--------|
//! | 入力の検証失敗 | 400 | `validation-error` |
//! | フォーム・JSON の解釈失敗 | 400 | `bad-request` |
//! | シークレット不一致 | 401 | `unauthorized` |
//! | Tasso API の失敗 | 500 | `upstream-error` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kitrelay_domain::DomainError;
use kitrelay_shared::ErrorResponse;
use thiserror::Error;

use crate::client::TassoError;

/// Webhook サーバーのエラー
#[derive(Debug, Error)]
pub enum WebhookError {
    /// 送信データ・注文リクエストの検証失敗
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// フォームに `rawRequest` が無い
    #[error("rawRequest がありません")]
    MissingRawRequest,

    /// リクエストボディを読めない
    #[error("リクエストボディを解釈できません: {0}")]
    InvalidBody(String),

    /// webhook シークレットの不一致
    #[error("webhook シークレットが一致しません")]
    Unauthorized,

    /// Tasso API の失敗
    #[error(transparent)]
    Tasso(#[from] TassoError),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        let body = match self {
            WebhookError::Domain(DomainError::Validation(_)) => {
                ErrorResponse::validation_error(detail)
            }
            WebhookError::Domain(DomainError::MalformedSubmission(_))
            | WebhookError::MissingRawRequest
            | WebhookError::InvalidBody(_) => ErrorResponse::bad_request(detail),
            WebhookError::Unauthorized => ErrorResponse::unauthorized(detail),
            WebhookError::Tasso(_) => ErrorResponse::upstream_error(detail),
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

/// Webhook エラーをログ付きでレスポンスに変換する
///
/// Tasso の失敗は `error`、入力起因の失敗は `warn` で出力する。
pub fn log_and_convert_webhook_error(context: &str, err: WebhookError) -> Response {
    match &err {
        WebhookError::Tasso(TassoError::Unavailable | TassoError::Network(_)) => {
            tracing::error!(
                error.category = "external_service",
                error.kind = "service_communication",
                "{}で Tasso と通信できません: {}",
                context,
                err
            );
        }
        WebhookError::Tasso(_) => {
            tracing::error!(
                error.category = "external_service",
                error.kind = "upstream_rejected",
                "{}で Tasso がエラーを返しました: {}",
                context,
                err
            );
        }
        WebhookError::Unauthorized => {
            tracing::warn!(
                error.category = "authentication",
                error.kind = "webhook_secret",
                "{}: {}",
                context,
                err
            );
        }
        WebhookError::Domain(_) | WebhookError::MissingRawRequest | WebhookError::InvalidBody(_) => {
            tracing::warn!(
                error.category = "validation",
                error.kind = "invalid_input",
                "{}: {}",
                context,
                err
            );
        }
    }
    err.into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;

    use super::*;

    async fn into_parts(err: WebhookError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_検証エラーは400のvalidation_error() {
        let (status, body) = into_parts(WebhookError::Domain(DomainError::Validation(
            "患者の氏名（姓・名）が入力されていません".to_string(),
        )))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            ErrorResponse::validation_error("患者の氏名（姓・名）が入力されていません")
        );
    }

    #[tokio::test]
    async fn test_raw_requestが無ければ400のbad_request() {
        let (status, body) = into_parts(WebhookError::MissingRawRequest).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, ErrorResponse::bad_request("rawRequest がありません"));
    }

    #[tokio::test]
    async fn test_解釈できない送信データは400() {
        let (status, body) = into_parts(WebhookError::Domain(
            DomainError::MalformedSubmission("expected value".to_string()),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.detail, "送信データを解釈できません: expected value");
    }

    #[tokio::test]
    async fn test_シークレット不一致は401() {
        let (status, body) = into_parts(WebhookError::Unauthorized).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.status, 401);
    }

    #[tokio::test]
    async fn test_tassoの失敗は500で上流の文言をそのまま返す() {
        let err = TassoError::Rejected {
            operation: "注文作成",
            status:    422,
            body:      "npi not found".to_string(),
        };

        let (status, body) = into_parts(WebhookError::Tasso(err)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            ErrorResponse::upstream_error("Tasso の 注文作成 が失敗しました: 422 - npi not found")
        );
    }

    #[tokio::test]
    async fn test_ログ付き変換でもレスポンスは変わらない() {
        let response =
            log_and_convert_webhook_error("患者作成", WebhookError::Tasso(TassoError::Unavailable));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
