//! TOML デシリアライズ用の DTO (Data Transfer Object)
//!
//! # 責務
//!
//! このモジュールは、TOML ファイルからのデータ読み込み専用の構造体を提供します。
//! DTO はバリデーション前の「生データ」を表現し、ドメインモデルとは分離されています。
//!
//! ## 変換フロー
//!
//! ```text
//! TOML ファイル
//!   ↓ (デシリアライズ)
//! AppConfigDto
//!   ↓ (TryFrom でバリデーション)
//! AppConfig (ドメインモデル)
//! ```

use serde::{Deserialize, Serialize};

/// アプリケーション設定 DTO
///
/// TOML の `[api]` セクションをデシリアライズ/シリアライズします。
///
/// **注**: この構造体は config モジュール内部の実装詳細です。
/// 外部からは [`AppConfig`](super::settings::AppConfig) を使用してください。
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct AppConfigDto {
    /// API 接続設定
    pub(super) api: ApiSettingsDto,
}

/// API 接続設定 DTO
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct ApiSettingsDto {
    /// API のベース URL
    pub(super) base_url: String,

    /// 認証済みアクセストークン
    pub(super) access_token: String,

    /// デフォルトのパートナー ID（省略可）
    pub(super) partner_id: Option<String>,
}
