//! # Observability 基盤
//!
//! トレーシング初期化とログ出力形式の設定、Request ID の採番を提供する。
//! 環境変数 `LOG_FORMAT` で JSON / Pretty 出力を切り替える。

/// Request ID を運ぶ HTTP ヘッダー名
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// ログ出力形式
///
/// 値が未設定または不正な場合は [`Pretty`](LogFormat::Pretty) にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON 形式（本番環境向け）
    Json,
    /// 人間が読みやすい形式（開発環境向け）
    #[default]
    Pretty,
}

impl LogFormat {
    /// 文字列からログ形式をパースする
    ///
    /// 不正な値の場合は stderr に警告を出して [`Pretty`](LogFormat::Pretty) を返す。
    /// トレーシング初期化前に呼ばれるため `tracing` ではなく `eprintln!` を使う。
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            other => {
                eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }

    /// 環境変数 `LOG_FORMAT` から読み取る
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT")
            .map(|val| Self::parse(&val))
            .unwrap_or_default()
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// サービス名（`app` スパンの `service` フィールドに出力）
    pub service_name: String,
    /// ログ出力形式
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    /// 環境変数から設定を読み取る
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::new(service_name, LogFormat::from_env())
    }
}

/// トレーシングを初期化し、サービス名を持つ `app` スパンに入る
///
/// `RUST_LOG` でログレベルを制御する。未設定時は `"info,kitrelay=debug"`。
///
/// 戻り値のガードを保持している間のログには `service` フィールドが付く。
#[cfg(feature = "observability")]
#[must_use = "ガードを破棄すると app スパンから抜ける"]
pub fn init_tracing(config: TracingConfig) -> tracing::span::EnteredSpan {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,kitrelay=debug".into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    app_span(&config.service_name).entered()
}

/// プロセス全体を包む `app` スパンを作成する
#[cfg(feature = "observability")]
pub fn app_span(service_name: &str) -> tracing::Span {
    tracing::info_span!("app", service = %service_name)
}

/// UUID v7 で Request ID を採番する `MakeRequestId` 実装
///
/// クライアントが `X-Request-Id` を付けてきた場合は `SetRequestIdLayer` が
/// そちらを優先するため、ここが呼ばれるのは未指定のときのみ。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let id = uuid::Uuid::now_v7().to_string();
        http::HeaderValue::from_str(&id)
            .ok()
            .map(tower_http::request_id::RequestId::new)
    }
}

/// `TraceLayer` 用のリクエストスパンを作成する
///
/// `SetRequestIdLayer` の内側に置くこと（ヘッダーに Request ID が入った後に呼ばれる）。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_jsonでjsonを返す() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
    }

    #[test]
    fn test_parse_prettyでprettyを返す() {
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
    }

    #[test]
    fn test_parse_不正な値でprettyにフォールバックする() {
        assert_eq!(LogFormat::parse("unknown"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(""), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Pretty);
    }

    #[test]
    fn test_newでフィールドが正しく設定される() {
        let config = TracingConfig::new("webhook", LogFormat::Json);

        assert_eq!(config.service_name, "webhook");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[cfg(feature = "observability")]
    #[test]
    fn test_app_spanはサービス名のフィールドを持つ() {
        tracing::subscriber::with_default(tracing_subscriber::registry(), || {
            let span = app_span("webhook");
            let metadata = span.metadata().unwrap();

            assert_eq!(metadata.name(), "app");
            assert!(metadata.fields().field("service").is_some());
        });
    }

    #[cfg(feature = "observability")]
    #[test]
    fn test_make_request_id_はuuid_v7を返す() {
        use tower_http::request_id::MakeRequestId;

        let request = http::Request::builder().body(()).unwrap();
        let id = MakeRequestUuidV7.make_request_id(&request).unwrap();
        let uuid = uuid::Uuid::parse_str(id.header_value().to_str().unwrap()).unwrap();

        assert_eq!(uuid.get_version(), Some(uuid::Version::SortRand));
    }
}
