//! # OpenAPI 仕様定義
//!
//! utoipa を使用して Webhook サーバーの OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::{
    Modify,
    OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};

use crate::handler::{health, jotform, order};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "KitRelay Webhook API",
      version = "0.1.0",
      description = "Jotform の送信を Tasso の患者・キット注文に変換する Webhook API"
   ),
   paths(
      // health
      health::health_check,
      // webhooks
      jotform::jotform_webhook,
      // orders
      order::create_order,
   ),
   components(schemas(
      kitrelay_shared::ErrorResponse,
   )),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "webhooks", description = "Jotform webhook"),
      (name = "orders", description = "キット注文"),
   ),
   modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// セキュリティスキーム定義
///
/// webhook URL のクエリに付ける共有シークレットを追加する。
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "webhook_secret",
            SecurityScheme::ApiKey(ApiKey::Query(ApiKeyValue::new("secret"))),
        );
    }
}
