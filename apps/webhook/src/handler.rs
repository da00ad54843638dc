//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、変換ロジックは `kitrelay-domain` に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `jotform`: Jotform webhook（患者作成＋注文作成）
//! - `order`: 注文作成 API

pub mod health;
pub mod jotform;
pub mod order;

pub use health::health_check;
pub use jotform::{JotformState, jotform_webhook};
pub use order::{OrderState, create_order};
