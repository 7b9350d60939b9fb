//! # エンドポイントテスト用共通ヘルパー
//!
//! S3への接続なしで署名付きURLのダミーを返すモックストレージ。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::GatewayState;
use crate::storage::{ObjectStorage, StorageError};

/// テスト用のモックObjectStorage。
///
/// 発行するURLには操作・キー・有効期限と呼び出しごとの連番が含まれる。
/// 連番はモック固有で、実際の署名付きURLが呼び出しごとに異なることは保証しない。
#[derive(Default)]
pub struct MockObjectStorage {
    keys: Vec<String>,
    fail_list: bool,
    fail_sign: bool,
    fail_sign_for: Option<String>,
    nonce: AtomicU64,
}

impl MockObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// バケット内のキー（ストレージの返却順）
    pub fn with_keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_sign(mut self) -> Self {
        self.fail_sign = true;
        self
    }

    /// 指定キーの署名のみ失敗させる
    pub fn failing_sign_for(mut self, key: &str) -> Self {
        self.fail_sign_for = Some(key.to_string());
        self
    }

    fn sign(&self, op: &str, key: &str, extra: &str, expiry_secs: u32) -> Result<String, StorageError> {
        if self.fail_sign || self.fail_sign_for.as_deref() == Some(key) {
            return Err(StorageError::Presign {
                key: key.to_string(),
                reason: "mock: SignatureDoesNotMatch".to_string(),
            });
        }
        let nonce = self.nonce.fetch_add(1, Ordering::SeqCst);
        Ok(format!(
            "http://mock-storage/{key}?op={op}{extra}&expires={expiry_secs}&sig={nonce}"
        ))
    }
}

#[async_trait::async_trait]
impl ObjectStorage for MockObjectStorage {
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        expiry_secs: u32,
    ) -> Result<String, StorageError> {
        self.sign("put", key, &format!("&content-type={content_type}"), expiry_secs)
    }

    async fn presign_get(&self, key: &str, expiry_secs: u32) -> Result<String, StorageError> {
        self.sign("get", key, "", expiry_secs)
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        if self.fail_list {
            return Err(StorageError::List {
                prefix: prefix.to_string(),
                reason: "mock: NoSuchBucket".to_string(),
            });
        }
        Ok(self
            .keys
            .iter()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}

/// テスト用GatewayStateを構築するヘルパー
pub fn test_state(storage: MockObjectStorage) -> Arc<GatewayState> {
    Arc::new(GatewayState::new(Box::new(storage)))
}
