//! # ミドルウェア
//!
//! Webhook サーバー用のミドルウェアを提供する。

mod webhook_secret;

pub use webhook_secret::{WebhookSecretState, webhook_secret_middleware};
