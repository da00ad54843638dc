//! Tasso レスポンスの共通ハンドリング

use serde::{Deserialize, de::DeserializeOwned};

use super::error::TassoError;

/// Tasso の成功レスポンスの外枠
///
/// 本体はすべて `results` に入っている。
#[derive(Debug, Deserialize)]
pub(super) struct Envelope<T> {
   pub results: T,
}

/// Tasso レスポンスの共通ハンドリング
///
/// 200 / 201 のときはボディを `Envelope<T>` にデシリアライズして `results` を返す。
/// それ以外のステータスは `Rejected` として、ボディをそのまま保持する。
///
/// # 引数
///
/// - `response`: Tasso からの HTTP レスポンス
/// - `operation`: エラーメッセージに載せる操作名
pub(super) async fn handle_response<T: DeserializeOwned>(
   response: reqwest::Response,
   operation: &'static str,
) -> Result<T, TassoError> {
   let status = response.status();
   let body = response.text().await?;

   if status != reqwest::StatusCode::OK && status != reqwest::StatusCode::CREATED {
      return Err(TassoError::Rejected {
         operation,
         status: status.as_u16(),
         body,
      });
   }

   serde_json::from_str::<Envelope<T>>(&body)
      .map(|envelope| envelope.results)
      .map_err(|_| TassoError::UnexpectedResponse { operation, body })
}
