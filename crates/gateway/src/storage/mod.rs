//! # オブジェクトストレージ
//!
//! 署名付きURL生成（PUT/GET）とプレフィックス一覧の抽象インターフェース。
//! S3互換ストレージ実装は `s3` サブモジュールを参照。

pub mod s3;

pub use s3::S3ObjectStorage;

/// ストレージ操作のエラー。HTTPステータスには依存しない。
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// 署名付きURLの生成に失敗
    #[error("署名付きURL生成失敗 ({key}): {reason}")]
    Presign { key: String, reason: String },
    /// オブジェクト一覧の取得に失敗
    #[error("オブジェクト一覧取得失敗 ({prefix}): {reason}")]
    List { prefix: String, reason: String },
}

/// オブジェクトストレージの抽象インターフェース。
///
/// 実装はリクエスト間で共有されるため `Send + Sync` であること。
/// 署名付きURLは発行のたびに新しく生成し、保持しない。
#[async_trait::async_trait]
pub trait ObjectStorage: Send + Sync {
    /// 書き込み用署名付きURL（PUT）を生成する。
    ///
    /// `content_type` は署名対象に含まれ、アップロード時に同じ
    /// `Content-Type` ヘッダーを送る必要がある。
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        expiry_secs: u32,
    ) -> Result<String, StorageError>;

    /// 読み取り用署名付きURL（GET）を生成する。オブジェクトの存在は確認しない。
    async fn presign_get(&self, key: &str, expiry_secs: u32) -> Result<String, StorageError>;

    /// プレフィックス配下のキーをストレージの返却順で列挙する。
    ///
    /// 1ページ分のみ。継続トークンは扱わない。
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}
