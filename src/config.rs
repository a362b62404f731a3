//! アプリケーション設定モジュール
//!
//! # 責務
//!
//! - TOML 形式の設定ファイル（API 接続情報）の読み込みと検証
//! - DTO（生データ）とドメインモデル（検証済み）の分離
//!
//! # モジュール構成
//!
//! - [`settings`][]: 検証済み設定（[`AppConfig`] / [`ApiSettings`]）
//! - `dto`: TOML デシリアライズ専用の内部 DTO

mod dto;
pub mod settings;

// 公開APIの再エクスポート
pub use settings::{ApiSettings, AppConfig};
