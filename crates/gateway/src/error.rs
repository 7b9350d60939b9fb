//! # Gateway エラー型
//!
//! HTTPステータスへの変換はこのモジュールでのみ行う。
//! ストレージ層は [`StorageError`] を返し、HTTPには依存しない。

use axum::http::StatusCode;

use crate::storage::StorageError;

/// Gatewayエラー型。
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// 不正なリクエスト（必須パラメータの欠落）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),
    /// 内部エラー。呼び出し元には汎用メッセージのみを返す。
    #[error("{0}")]
    Internal(&'static str),
}

impl GatewayError {
    /// 原因をサーバー側ログにのみ記録し、汎用メッセージの内部エラーを返す。
    pub(crate) fn internal(message: &'static str, cause: impl std::fmt::Display) -> Self {
        tracing::error!(error = %cause, "{message}");
        GatewayError::Internal(message)
    }

    /// `map_err` 用: ストレージエラーを汎用メッセージの内部エラーに変換する。
    pub(crate) fn storage(message: &'static str) -> impl FnOnce(StorageError) -> Self {
        move |e| Self::internal(message, e)
    }
}

impl axum::response::IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
