//! Tasso クライアントのエラー型

use thiserror::Error;

/// Tasso クライアントエラー
///
/// `Display` の文言はそのまま webhook のエラーレスポンスの `detail` になる。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TassoError {
   /// Tasso が 2xx 以外を返した
   #[error("Tasso の {operation} が失敗しました: {status} - {body}")]
   Rejected {
      operation: &'static str,
      status:    u16,
      body:      String,
   },

   /// 成功ステータスだがボディが想定の形でない
   #[error("Tasso の {operation} のレスポンス形式が不正です: {body}")]
   UnexpectedResponse { operation: &'static str, body: String },

   /// ネットワークエラー
   #[error("ネットワークエラー: {0}")]
   Network(String),

   /// 接続できない、またはタイムアウトした
   #[error("Tasso API に接続できません")]
   Unavailable,
}

impl From<reqwest::Error> for TassoError {
   fn from(err: reqwest::Error) -> Self {
      if err.is_connect() || err.is_timeout() {
         TassoError::Unavailable
      } else {
         TassoError::Network(err.to_string())
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_rejectedの文言にステータスとボディを含める() {
      let err = TassoError::Rejected {
         operation: "患者作成",
         status:    422,
         body:      r#"{"message":"projectId is invalid"}"#.to_string(),
      };

      assert_eq!(
         err.to_string(),
         r#"Tasso の 患者作成 が失敗しました: 422 - {"message":"projectId is invalid"}"#
      );
   }
}
