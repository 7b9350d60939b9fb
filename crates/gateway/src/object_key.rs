//! # オブジェクトキー
//!
//! アップロード先キーは `uploads/<ミリ秒タイムスタンプ>_<元のファイル名>`。
//! 同一ミリ秒・同一ファイル名の衝突は防止しない。
//!
//! 一覧の「新しい順」はキーの辞書順がアップロード順と一致することに依存する。
//! タイムスタンプの桁数が変わる（13桁→14桁）と辞書順と時系列がずれる。

use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};

/// アップロード名前空間のプレフィックス
pub const UPLOAD_PREFIX: &str = "uploads/";

/// アップロード先のオブジェクトキーを構築する。
pub fn upload_key(timestamp_ms: u128, file_name: &str) -> String {
    format!("{UPLOAD_PREFIX}{timestamp_ms}_{file_name}")
}

/// 現在時刻（UNIXエポックからのミリ秒）
pub fn now_millis() -> Result<u128, SystemTimeError> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis())
}
