//! # ドメイン層エラー定義
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須項目の欠落 |
//! | `MalformedSubmission` | 400 Bad Request | `rawRequest` が JSON オブジェクトでない |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// webhook 層でこのエラーを受け取り、HTTP レスポンスに変換する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// メッセージはそのまま HTTP レスポンスの `detail` に入る。
    #[error("{0}")]
    Validation(String),

    /// 送信データが解釈できない
    #[error("送信データを解釈できません: {0}")]
    MalformedSubmission(String),
}
