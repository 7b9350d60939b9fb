//! # GET /api/generate-upload-url
//!
//! アップロード用署名付きURL発行。

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use pixvault_types::{UploadUrlQuery, UploadUrlResponse};

use super::required;
use crate::config::GatewayState;
use crate::error::GatewayError;
use crate::object_key;

const UPLOAD_URL_FAILED: &str = "アップロードURLを生成できませんでした";

/// GET /api/generate-upload-url: アップロード用署名付きURL発行。
///
/// キーは `uploads/<ミリ秒>_<fileName>`。`fileType` は署名に含まれる。
/// オブジェクトはクライアントがPUTするまで作成されない。
pub async fn handle_upload_url(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<UploadUrlQuery>,
) -> Result<Json<UploadUrlResponse>, GatewayError> {
    let (Some(file_name), Some(file_type)) =
        (required(query.file_name), required(query.file_type))
    else {
        return Err(GatewayError::BadRequest(
            "fileName と fileType のクエリパラメータは必須です".to_string(),
        ));
    };

    let timestamp_ms =
        object_key::now_millis().map_err(|e| GatewayError::internal(UPLOAD_URL_FAILED, e))?;
    let key = object_key::upload_key(timestamp_ms, &file_name);

    let upload_url = state
        .storage
        .presign_put(&key, &file_type, state.upload_url_expiry_secs)
        .await
        .map_err(GatewayError::storage(UPLOAD_URL_FAILED))?;

    tracing::debug!(key = %key, content_type = %file_type, "アップロードURLを発行");

    Ok(Json(UploadUrlResponse { upload_url, key }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_helpers::{test_state, MockObjectStorage};

    fn query(file_name: Option<&str>, file_type: Option<&str>) -> Query<UploadUrlQuery> {
        Query(UploadUrlQuery {
            file_name: file_name.map(str::to_string),
            file_type: file_type.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_upload_url_issues_key_under_prefix() {
        let state = test_state(MockObjectStorage::new());

        let response = handle_upload_url(State(state), query(Some("cat.png"), Some("image/png")))
            .await
            .unwrap()
            .0;

        assert!(response.key.starts_with("uploads/"));
        assert!(response.key.ends_with("_cat.png"));
        let timestamp = &response.key["uploads/".len()..response.key.len() - "_cat.png".len()];
        assert!(timestamp.parse::<u128>().is_ok(), "timestamp部分: {timestamp}");

        assert!(response.upload_url.contains(&response.key));
        assert!(response.upload_url.contains("op=put"));
        assert!(response.upload_url.contains("content-type=image/png"));
        assert!(response.upload_url.contains("expires=300"));
    }

    /// fileName / fileType のどちらかが欠落・空ならBadRequest
    #[tokio::test]
    async fn test_upload_url_requires_both_params() {
        let cases = [
            (None, Some("image/png")),
            (Some("cat.png"), None),
            (None, None),
            (Some(""), Some("image/png")),
            (Some("cat.png"), Some("")),
        ];

        for (file_name, file_type) in cases {
            let state = test_state(MockObjectStorage::new());
            let result = handle_upload_url(State(state), query(file_name, file_type)).await;
            assert!(
                matches!(result, Err(GatewayError::BadRequest(_))),
                "fileName={file_name:?} fileType={file_type:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_upload_url_signing_failure_is_internal() {
        let state = test_state(MockObjectStorage::new().failing_sign());

        let result = handle_upload_url(State(state), query(Some("cat.png"), Some("image/png"))).await;

        assert!(matches!(result, Err(GatewayError::Internal(_))));
    }
}
