//! # KitRelay Webhook サーバー
//!
//! Jotform の送信通知を受け、Tasso に患者とキット注文を作成する。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Jotform    │────▶│   Webhook    │────▶│  Tasso API   │
//! │  (webhook)   │     │  port: 8000  │     │              │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `WEBHOOK_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `WEBHOOK_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `TASSO_BASE_URL` | **Yes** | Tasso API のベース URL |
//! | `TASSO_USERNAME` | **Yes** | Tasso API のユーザー名 |
//! | `TASSO_SECRET` | **Yes** | Tasso API のシークレット |
//! | `GLP1_PROJECT_ID` | **Yes** | GLP-1 プログラムの Tasso プロジェクト ID |
//! | `TESTOSTRONE_PROJECT_ID` | **Yes** | テストステロンプログラムの Tasso プロジェクト ID |
//! | `JOTFORM_WEBHOOK_SECRET` | No | webhook の `?secret=` と照合する値 |
//! | `LOG_FORMAT` | No | `json` または `pretty` |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p kitrelay-webhook
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use kitrelay_shared::observability::TracingConfig;
use kitrelay_webhook::{
    app_builder::build_app,
    client::{TassoClient, TassoClientImpl},
    config::WebhookConfig,
};
use tokio::net::TcpListener;

/// Webhook サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("webhook");
    let _tracing_guard = kitrelay_shared::observability::init_tracing(tracing_config);

    let config = WebhookConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        tasso = ?config.tasso,
        webhook_secret_enabled = config.webhook_secret.is_some(),
        "Webhook サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let tasso_client: Arc<dyn TassoClient> = Arc::new(TassoClientImpl::new(&config.tasso));
    let app = build_app(tasso_client, config.project_ids, config.webhook_secret);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Webhook サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
