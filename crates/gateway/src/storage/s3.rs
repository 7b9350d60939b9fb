//! # S3互換 オブジェクトストレージ実装
//!
//! AWS S3, MinIO, Cloudflare R2 等のS3互換APIを使用する実装。

// rust-s3 のカスタムヘッダーは http 0.2 系の型を要求する
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue};

use super::{ObjectStorage, StorageError};
use crate::config::StorageConfig;

/// S3互換ストレージによるObjectStorage実装。
pub struct S3ObjectStorage {
    bucket: s3::Bucket,
}

impl S3ObjectStorage {
    pub fn new(bucket: s3::Bucket) -> Self {
        Self { bucket }
    }

    /// 設定からS3互換バケットを初期化する。
    ///
    /// エンドポイント指定時（MinIO等）はパススタイルでアクセスする。
    /// 認証情報が未設定の場合はrust-s3の標準探索（環境変数・プロファイル）に任せる。
    pub fn from_config(config: &StorageConfig) -> anyhow::Result<Self> {
        let credentials = s3::creds::Credentials::new(
            config.access_key.as_deref(),
            config.secret_key.as_deref(),
            config.session_token.as_deref(),
            None,
            None,
        )?;

        let bucket = match &config.endpoint {
            Some(endpoint) => {
                tracing::info!(s3_endpoint = %endpoint, "S3互換エンドポイントを設定");
                let region = s3::Region::Custom {
                    region: config.region.clone(),
                    endpoint: endpoint.clone(),
                };
                s3::Bucket::new(&config.bucket_name, region, credentials)?.with_path_style()
            }
            None => {
                let region: s3::Region = config.region.parse()?;
                s3::Bucket::new(&config.bucket_name, region, credentials)?
            }
        };

        Ok(Self::new(*bucket))
    }
}

#[async_trait::async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        expiry_secs: u32,
    ) -> Result<String, StorageError> {
        let presign_error = |reason: String| StorageError::Presign {
            key: key.to_string(),
            reason,
        };

        let value = HeaderValue::from_str(content_type)
            .map_err(|e| presign_error(format!("Content-Typeが不正です: {e}")))?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, value);

        self.bucket
            .presign_put(key, expiry_secs, Some(headers), None)
            .await
            .map_err(|e| presign_error(e.to_string()))
    }

    async fn presign_get(&self, key: &str, expiry_secs: u32) -> Result<String, StorageError> {
        self.bucket
            .presign_get(key, expiry_secs, None)
            .await
            .map_err(|e| StorageError::Presign {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let (page, _status) = self
            .bucket
            .list_page(prefix.to_string(), None, None, None, None)
            .await
            .map_err(|e| StorageError::List {
                prefix: prefix.to_string(),
                reason: e.to_string(),
            })?;

        Ok(page.contents.into_iter().map(|object| object.key).collect())
    }
}
