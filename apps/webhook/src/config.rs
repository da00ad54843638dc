//! # Webhook サーバー設定
//!
//! 環境変数から Webhook サーバーの設定を読み込む。

use std::env;

use kitrelay_domain::program::ProjectIds;
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// 必須の環境変数が未設定
   #[error("{0} が設定されていません")]
   Missing(&'static str),

   /// 値の形式が不正
   #[error("{name} の値が不正です: {value}")]
   Invalid { name: &'static str, value: String },
}

/// Tasso API の接続情報
#[derive(Clone)]
pub struct TassoConfig {
   /// ベース URL（サンドボックスまたは本番）
   pub base_url: String,
   /// API ユーザー名
   pub username: String,
   /// API シークレット
   pub secret:   String,
}

// secret をログに出さないよう Debug は手書きする
impl std::fmt::Debug for TassoConfig {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.debug_struct("TassoConfig")
         .field("base_url", &self.base_url)
         .field("username", &self.username)
         .field("secret", &"***")
         .finish()
   }
}

/// Webhook サーバーの設定
#[derive(Debug, Clone)]
pub struct WebhookConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
   /// Tasso API の接続情報
   pub tasso: TassoConfig,
   /// プログラムごとの Tasso プロジェクト ID
   pub project_ids: ProjectIds,
   /// Jotform webhook の共有シークレット
   ///
   /// 設定されている場合のみ、webhook の `?secret=` を検証する。
   pub webhook_secret: Option<String>,
}

impl WebhookConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// テストではプロセスの環境変数を汚さないよう `HashMap` を渡す。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let required = |name: &'static str| {
         lookup(name)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(name))
      };

      let port = match lookup("WEBHOOK_PORT") {
         Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            name: "WEBHOOK_PORT",
            value,
         })?,
         None => 8000,
      };

      Ok(Self {
         host: lookup("WEBHOOK_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
         port,
         tasso: TassoConfig {
            base_url: required("TASSO_BASE_URL")?,
            username: required("TASSO_USERNAME")?,
            secret:   required("TASSO_SECRET")?,
         },
         project_ids: ProjectIds {
            glp1:         required("GLP1_PROJECT_ID")?,
            testosterone: required("TESTOSTRONE_PROJECT_ID")?,
         },
         webhook_secret: lookup("JOTFORM_WEBHOOK_SECRET").filter(|v| !v.is_empty()),
      })
   }
}
