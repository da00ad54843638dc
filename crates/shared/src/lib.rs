//! # KitRelay 共有ユーティリティ
//!
//! Webhook サーバーとドメイン層の双方から使われる、ビジネスロジックを
//! 含まない共通部品を提供する。
//!
//! - [`error_response`]: RFC 9457 形式のエラーレスポンス
//! - [`health`]: ヘルスチェックレスポンス
//! - [`observability`]: トレーシング初期化と Request ID 関連のヘルパー

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
