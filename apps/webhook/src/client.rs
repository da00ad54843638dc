//! # 外部 API クライアント
//!
//! Tasso API との通信を担当する。

pub mod tasso;

pub use tasso::{AuthToken, OrderCreated, PatientCreated, TassoClient, TassoClientImpl, TassoError};
