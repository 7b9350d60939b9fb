//! # Pixvault 共有型定義
//!
//! Gateway の HTTP API で使用するクエリパラメータとレスポンスボディ。
//!
//! ## 命名規則
//! - ワイヤ上のフィールド名は SPA クライアントに合わせて camelCase
//! - Rust 側のフィールド名は snake_case

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GET /api/generate-upload-url
// ---------------------------------------------------------------------------

/// /api/generate-upload-url クエリパラメータ。
///
/// 両方とも必須だが、欠落時に独自の 400 メッセージを返すため `Option` で受ける。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlQuery {
    /// 元のファイル名
    pub file_name: Option<String>,
    /// コンテンツのMIMEタイプ
    pub file_type: Option<String>,
}

/// /api/generate-upload-url レスポンス。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    /// 署名付きアップロードURL（PUT）
    pub upload_url: String,
    /// アップロード先のオブジェクトキー
    pub key: String,
}

// ---------------------------------------------------------------------------
// GET /api/generate-view-url
// ---------------------------------------------------------------------------

/// /api/generate-view-url クエリパラメータ。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewUrlQuery {
    /// 閲覧対象のオブジェクトキー
    pub key: Option<String>,
}

/// /api/generate-view-url レスポンス。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewUrlResponse {
    /// 署名付き閲覧URL（GET）
    pub view_url: String,
}
