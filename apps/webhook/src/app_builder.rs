//! # Webhook アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use kitrelay_domain::program::ProjectIds;
use kitrelay_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    client::TassoClient,
    handler::{JotformState, OrderState, create_order, health_check, jotform_webhook},
    middleware::{WebhookSecretState, webhook_secret_middleware},
};

/// State の構築とルーター定義を行う
///
/// # 引数
///
/// - `tasso_client`: Tasso クライアント（テストではスタブを渡す）
/// - `project_ids`: プログラムごとの Tasso プロジェクト ID
/// - `webhook_secret`: 設定されていれば webhook ルートでのみ `?secret=` を検証する
pub fn build_app(
    tasso_client: Arc<dyn TassoClient>,
    project_ids: ProjectIds,
    webhook_secret: Option<String>,
) -> Router {
    let jotform_state = Arc::new(JotformState {
        tasso_client: tasso_client.clone(),
        project_ids,
    });
    let order_state = Arc::new(OrderState { tasso_client });

    let mut webhook_routes = Router::new()
        .route("/webhooks/jotform/tasso", post(jotform_webhook))
        .with_state(jotform_state);
    if let Some(secret) = webhook_secret {
        webhook_routes = webhook_routes.layer(from_fn_with_state(
            WebhookSecretState { secret },
            webhook_secret_middleware,
        ));
    }

    Router::new()
        .route("/health", get(health_check))
        .merge(webhook_routes)
        .merge(
            Router::new()
                .route("/orders/create", post(create_order))
                .with_state(order_state),
        )
        .layer(CorsLayer::permissive())
        // Request ID レイヤー（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含める
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
