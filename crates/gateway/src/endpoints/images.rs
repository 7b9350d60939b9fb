//! # GET /api/images
//!
//! アップロード済みオブジェクトの一覧と閲覧用署名付きURLの一括発行。

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use futures::future::try_join_all;

use crate::config::GatewayState;
use crate::error::GatewayError;
use crate::object_key::UPLOAD_PREFIX;

const LIST_FAILED: &str = "画像一覧を取得できませんでした";

/// GET /api/images: 閲覧用署名付きURLの一覧（新しい順）。
///
/// 1. `uploads/` 配下を1ページ分列挙
/// 2. 各キーの署名を並行に発行（1件でも失敗すれば全体が失敗、部分結果は返さない）
/// 3. ストレージの返却順を反転して返す
pub async fn handle_images(
    State(state): State<Arc<GatewayState>>,
) -> Result<Json<Vec<String>>, GatewayError> {
    let keys = state
        .storage
        .list_keys(UPLOAD_PREFIX)
        .await
        .map_err(GatewayError::storage(LIST_FAILED))?;

    // try_join_all は入力順を保つ
    let mut urls = try_join_all(
        keys.iter()
            .map(|key| state.storage.presign_get(key, state.list_url_expiry_secs)),
    )
    .await
    .map_err(GatewayError::storage(LIST_FAILED))?;

    // キー辞書順の末尾（直近のアップロード）を先頭に
    urls.reverse();

    tracing::debug!(count = urls.len(), "画像一覧を発行");

    Ok(Json(urls))
}
