//! # Pixvault Gateway
//!
//! オブジェクトストレージへの期限付きアクセスを仲介するGateway。
//! ファイル本体は転送せず、クライアントは発行された署名付きURLに対して
//! 直接アップロード・ダウンロードを行う。
//!
//! ## API エンドポイント
//! - `GET /api/generate-upload-url?fileName=&fileType=`: アップロード用署名付きURL発行（300秒）
//! - `GET /api/generate-view-url?key=`: 閲覧用署名付きURL発行（600秒）
//! - `GET /api/images`: 閲覧用署名付きURL一覧（3600秒、新しい順）
//! - `GET *`: SPAクライアントの静的ファイル（該当なしは `index.html`）

mod config;
mod endpoints;
mod error;
mod object_key;
mod storage;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use config::{GatewayConfig, GatewayState};
use endpoints::{handle_images, handle_upload_url, handle_view_url};
use storage::S3ObjectStorage;

/// ルーターを構築する。
///
/// APIに一致しないパスは静的ファイル、それも無ければエントリドキュメントを200で返す。
fn build_app(state: Arc<GatewayState>, client_build_dir: &Path) -> axum::Router {
    let static_files = ServeDir::new(client_build_dir)
        .fallback(ServeFile::new(client_build_dir.join("index.html")));

    axum::Router::new()
        .route("/api/generate-upload-url", get(handle_upload_url))
        .route("/api/generate-view-url", get(handle_view_url))
        .route("/api/images", get(handle_images))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env は任意
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = GatewayConfig::from_env()?;

    let storage = S3ObjectStorage::from_config(&config.storage)?;
    tracing::info!(
        bucket = %config.storage.bucket_name,
        region = %config.storage.region,
        "S3バケットを設定"
    );

    let state = Arc::new(GatewayState::new(Box::new(storage)));
    let app = build_app(state, &config.client_build_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        client_build_dir = %config.client_build_dir.display(),
        "Gatewayを {} で起動します",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---------------------------------------------------------------------------
// テスト
// ---------------------------------------------------------------------------
