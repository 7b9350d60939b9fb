//! # Gateway設定・共有状態
//!
//! 環境変数からの設定読み込みとGatewayの共有状態の定義。

use std::path::PathBuf;

use anyhow::Context;

use crate::storage::ObjectStorage;

/// デフォルトの待受ポート
pub const DEFAULT_PORT: u16 = 3001;

/// デフォルトのリージョン
pub const DEFAULT_REGION: &str = "us-east-1";

/// SPAクライアントのビルド成果物ディレクトリ（デフォルト）
pub const DEFAULT_CLIENT_BUILD_DIR: &str = "client/build";

/// アップロード用署名付きURLの有効期限（秒）
pub const UPLOAD_URL_EXPIRY_SECS: u32 = 300;

/// 単体閲覧用署名付きURLの有効期限（秒）
pub const VIEW_URL_EXPIRY_SECS: u32 = 600;

/// 一覧閲覧用署名付きURLの有効期限（秒）
pub const LIST_URL_EXPIRY_SECS: u32 = 3600;

/// S3互換ストレージへの接続設定。
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// バケット名（`S3_BUCKET_NAME`）
    pub bucket_name: String,
    /// リージョン（`AWS_REGION`）
    pub region: String,
    /// S3互換エンドポイント（`S3_ENDPOINT`）。
    /// MinIO, Cloudflare R2 等を使う場合に指定する。Noneの場合はAWS S3。
    pub endpoint: Option<String>,
    /// アクセスキー（`AWS_ACCESS_KEY_ID`）
    pub access_key: Option<String>,
    /// シークレットキー（`AWS_SECRET_ACCESS_KEY`）
    pub secret_key: Option<String>,
    /// セッショントークン（`AWS_SESSION_TOKEN`）
    pub session_token: Option<String>,
}

/// Gateway起動設定。
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// 待受ポート（`PORT`）
    pub port: u16,
    /// SPAクライアントのビルド成果物ディレクトリ（`CLIENT_BUILD_DIR`）
    pub client_build_dir: PathBuf,
    /// ストレージ設定
    pub storage: StorageConfig,
}

impl GatewayConfig {
    /// 環境変数から構築する。
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の変数ソースから構築する。空文字列は未設定として扱う。
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORTの値が不正です: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let bucket_name =
            var("S3_BUCKET_NAME").context("S3_BUCKET_NAMEが設定されていません")?;

        Ok(Self {
            port,
            client_build_dir: var("CLIENT_BUILD_DIR")
                .unwrap_or_else(|| DEFAULT_CLIENT_BUILD_DIR.to_string())
                .into(),
            storage: StorageConfig {
                bucket_name,
                region: var("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
                endpoint: var("S3_ENDPOINT"),
                access_key: var("AWS_ACCESS_KEY_ID"),
                secret_key: var("AWS_SECRET_ACCESS_KEY"),
                session_token: var("AWS_SESSION_TOKEN"),
            },
        })
    }
}

/// Gatewayの共有状態。
///
/// 起動後は不変。リクエスト間で共有される可変状態は持たない。
pub struct GatewayState {
    /// オブジェクトストレージ（S3互換等、トレイトで抽象化）
    pub storage: Box<dyn ObjectStorage>,
    /// アップロード用URLの有効期限（秒）
    pub upload_url_expiry_secs: u32,
    /// 単体閲覧用URLの有効期限（秒）
    pub view_url_expiry_secs: u32,
    /// 一覧閲覧用URLの有効期限（秒）
    pub list_url_expiry_secs: u32,
}

impl GatewayState {
    pub fn new(storage: Box<dyn ObjectStorage>) -> Self {
        Self {
            storage,
            upload_url_expiry_secs: UPLOAD_URL_EXPIRY_SECS,
            view_url_expiry_secs: VIEW_URL_EXPIRY_SECS,
            list_url_expiry_secs: LIST_URL_EXPIRY_SECS,
        }
    }
}
