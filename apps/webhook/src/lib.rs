//! # KitRelay Webhook ライブラリ
//!
//! Jotform の送信通知を Tasso API 呼び出しに変換する HTTP サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: State の組み立てとルーター構築
//! - `client`: 外部 API クライアント（Tasso）
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラー型と HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（webhook シークレット検証）
//! - `openapi`: OpenAPI 仕様定義

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod openapi;
