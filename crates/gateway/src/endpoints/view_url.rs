//! # GET /api/generate-view-url
//!
//! 単体オブジェクトの閲覧用署名付きURL発行。

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use pixvault_types::{ViewUrlQuery, ViewUrlResponse};

use super::required;
use crate::config::GatewayState;
use crate::error::GatewayError;

/// GET /api/generate-view-url: 閲覧用署名付きURL発行。
///
/// キーの存在確認は行わない。存在しないキーでも署名し、失敗はGET時に判明する。
pub async fn handle_view_url(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<ViewUrlQuery>,
) -> Result<Json<ViewUrlResponse>, GatewayError> {
    let key = required(query.key)
        .ok_or_else(|| GatewayError::BadRequest("key のクエリパラメータは必須です".to_string()))?;

    let view_url = state
        .storage
        .presign_get(&key, state.view_url_expiry_secs)
        .await
        .map_err(GatewayError::storage("閲覧URLを生成できませんでした"))?;

    Ok(Json(ViewUrlResponse { view_url }))
}
