//! # KitRelay ドメイン層
//!
//! Jotform の送信データを Tasso API のリクエストへ変換する純粋なロジックを置く。
//! HTTP 通信や設定の読み込みには一切依存しない。
//!
//! ## 依存関係の方向
//!
//! ```text
//! webhook → domain
//! ```
//!
//! ## 変換の流れ
//!
//! ```text
//! rawRequest (JSON 文字列)
//!   → Submission        送信データの寛容なパース
//!   → NewPatient        電話番号・州コード・性別・住所の正規化
//!   → NewOrder          NPI があるときのみ
//! ```
//!
//! ## モジュール構成
//!
//! - [`submission`] - Jotform の `rawRequest` のパース
//! - [`phone`] - 電話番号の正規化
//! - [`us_state`] - 米国州名から州コードへの変換
//! - [`gender`] - 性別・出生時の性の語彙変換
//! - [`address`] - 配送先住所の正規化
//! - [`program`] - 送信フォームからプロジェクトへの振り分け
//! - [`patient`] - 患者作成リクエスト
//! - [`order`] - 注文作成リクエスト

pub mod address;
pub mod error;
pub mod gender;
mod lenient;
pub mod order;
pub mod patient;
pub mod phone;
pub mod program;
pub mod submission;
pub mod us_state;

pub use error::DomainError;
