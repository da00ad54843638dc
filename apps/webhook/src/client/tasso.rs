//! # Tasso クライアント
//!
//! Webhook サーバーから Tasso API への通信を担当する。
//!
//! ## エンドポイント
//!
//! - `POST /authTokens` - API トークンの発行
//! - `POST /patients` - 患者作成
//! - `POST /orders` - キット注文作成
//!
//! トークンはキャッシュしない。webhook 1 回ごとに発行し直す。

mod error;
mod response;

use std::time::Duration;

use async_trait::async_trait;
use kitrelay_domain::{order::NewOrder, patient::NewPatient};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use self::error::TassoError;
use self::response::handle_response;
use crate::config::TassoConfig;

/// 1 リクエストあたりのタイムアウト
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const OPERATION_AUTHENTICATE: &str = "認証";
const OPERATION_CREATE_PATIENT: &str = "患者作成";
const OPERATION_CREATE_ORDER: &str = "注文作成";

// --- リクエスト/レスポンス型 ---

/// トークン発行リクエスト
#[derive(Serialize)]
struct AuthTokenRequest<'a> {
   username: &'a str,
   secret:   &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthTokenResults {
   id_token: String,
}

/// Tasso API のベアラートークン
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
   pub fn new(token: impl Into<String>) -> Self {
      Self(token.into())
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl std::fmt::Debug for AuthToken {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.write_str("AuthToken(***)")
   }
}

/// 患者作成レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatientCreated {
   pub id: String,
}

/// 注文作成レスポンス
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreated {
   pub id:      String,
   /// Tasso が返した `results` 全体（呼び出し元へそのまま返す）
   pub details: Value,
}

impl OrderCreated {
   fn from_results(details: Value) -> Result<Self, TassoError> {
      match details.get("id").and_then(Value::as_str) {
         Some(id) => Ok(Self {
            id: id.to_string(),
            details,
         }),
         None => Err(TassoError::UnexpectedResponse {
            operation: OPERATION_CREATE_ORDER,
            body:      details.to_string(),
         }),
      }
   }
}

/// Tasso クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait TassoClient: Send + Sync {
   /// API トークンを発行する
   ///
   /// Tasso の `POST /authTokens` を呼び出し、`results.idToken` を返す。
   async fn authenticate(&self) -> Result<AuthToken, TassoError>;

   /// 患者を作成する
   ///
   /// Tasso の `POST /patients` を呼び出す。
   async fn create_patient(
      &self,
      token: &AuthToken,
      patient: &NewPatient,
   ) -> Result<PatientCreated, TassoError>;

   /// キットの注文を作成する
   ///
   /// Tasso の `POST /orders` を呼び出す。
   async fn create_order(
      &self,
      token: &AuthToken,
      order: &NewOrder,
   ) -> Result<OrderCreated, TassoError>;
}

/// Tasso クライアント実装
#[derive(Clone)]
pub struct TassoClientImpl {
   base_url: String,
   username: String,
   secret:   String,
   client:   reqwest::Client,
}

impl TassoClientImpl {
   /// 新しい TassoClient を作成する
   ///
   /// # 引数
   ///
   /// - `config`: Tasso の接続情報（ベース URL は末尾の `/` を除いて保持する）
   pub fn new(config: &TassoConfig) -> Self {
      Self {
         base_url: config.base_url.trim_end_matches('/').to_string(),
         username: config.username.clone(),
         secret:   config.secret.clone(),
         client:   reqwest::Client::new(),
      }
   }

   fn post(&self, path: &str) -> reqwest::RequestBuilder {
      self.client
         .post(format!("{}{}", self.base_url, path))
         .timeout(REQUEST_TIMEOUT)
   }
}

#[async_trait]
impl TassoClient for TassoClientImpl {
   async fn authenticate(&self) -> Result<AuthToken, TassoError> {
      let request = AuthTokenRequest {
         username: &self.username,
         secret:   &self.secret,
      };

      let response = self.post("/authTokens").json(&request).send().await?;
      let results: AuthTokenResults = handle_response(response, OPERATION_AUTHENTICATE).await?;

      Ok(AuthToken(results.id_token))
   }

   async fn create_patient(
      &self,
      token: &AuthToken,
      patient: &NewPatient,
   ) -> Result<PatientCreated, TassoError> {
      let response = self
         .post("/patients")
         .bearer_auth(token.as_str())
         .json(patient)
         .send()
         .await?;

      handle_response(response, OPERATION_CREATE_PATIENT).await
   }

   async fn create_order(
      &self,
      token: &AuthToken,
      order: &NewOrder,
   ) -> Result<OrderCreated, TassoError> {
      let response = self
         .post("/orders")
         .bearer_auth(token.as_str())
         .json(order)
         .send()
         .await?;

      let details: Value = handle_response(response, OPERATION_CREATE_ORDER).await?;
      OrderCreated::from_results(details)
   }
}
