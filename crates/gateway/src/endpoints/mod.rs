//! # Gatewayエンドポイント
//!
//! 入力検証、ストレージ呼び出し、レスポンス整形を行う。

pub mod images;
pub mod upload_url;
pub mod view_url;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use images::handle_images;
pub use upload_url::handle_upload_url;
pub use view_url::handle_view_url;

/// 必須クエリパラメータ: 欠落と空文字列を同一に扱う。
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
