//! Display & Video 360 API クライアント抽象化レイヤー
//!
//! # 責務
//!
//! - API クライアントを統一的に扱うインターフェース
//!   （[`DisplayVideoService`] トレイト）を提供
//! - 設定からクライアントを生成するファクトリー機能
//!
//! # アーキテクチャ
//!
//! サンプル側はトレイト経由でのみ API に触れます。実行ドライバーは
//! クライアントの中身を一切検査しません（認証済みであることだけを前提とする）。
//! テストではモック実装に差し替えます。
//!
//! # モジュール構成
//!
//! - `traits` - 共通インターフェースとエンティティ型
//! - `http` - reqwest ベースの REST クライアント
//!
//! # 使用例
//!
//! ```rust,no_run
//! use dv360_samples::config::AppConfig;
//! use dv360_samples::service::create_service;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_file("config/example.toml")?;
//! let service = create_service(config.api());
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod traits;

// 公開APIの再エクスポート
pub use http::DisplayVideoClient;
pub use traits::{Advertiser, CreativeAsset, DisplayVideoService, Partner};

use std::sync::Arc;

use crate::config::ApiSettings;

/// API クライアントを生成するファクトリー関数
///
/// 検証済みの接続設定から REST クライアントを生成し、
/// トレイトオブジェクトとして返します。I/O は行いません。
///
/// # 引数
///
/// - `settings`: 検証済みの API 接続設定
pub fn create_service(settings: &ApiSettings) -> Arc<dyn DisplayVideoService> {
    Arc::new(DisplayVideoClient::new(settings))
}
