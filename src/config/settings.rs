//! アプリケーション設定の読み込みと管理を行うモジュール
//!
//! # 責務
//!
//! このモジュールは、Display & Video 360 API への接続情報を TOML 形式で定義し、
//! それを Rust の型として扱うための機能を提供します。
//!
//! ## 主な機能
//!
//! - **TOML パース**: `config/` ディレクトリ内の TOML ファイルを読み込み、
//!   [`AppConfig`] 構造体にデシリアライズ
//! - **バリデーション**: 必須項目（ベース URL、アクセストークン）の検証
//!
//! ## 使用例
//!
//! ```toml
//! [api]
//! base_url = "https://displayvideo.googleapis.com/v3"
//! access_token = "ya29.a0Af..."
//! partner_id = "1234567"
//! ```

use std::path::Path;

use crate::error::ConfigError;
use super::dto::{ApiSettingsDto, AppConfigDto};

/// アプリケーション設定（ドメインモデル）
///
/// バリデーション済みの状態を保証します。
///
/// ## DTO との違い
///
/// - [`AppConfigDto`]: TOML デシリアライズ専用、バリデーション前の生データ
/// - [`AppConfig`]: バリデーション済み
#[derive(Debug, Clone)]
pub struct AppConfig {
    api: ApiSettings,
}

/// API 接続設定（ドメインモデル）
#[derive(Debug, Clone)]
pub struct ApiSettings {
    base_url: String,
    access_token: String,
    partner_id: Option<String>,
}

impl AppConfig {
    /// TOML ファイルから設定を読み込む
    ///
    /// # 処理フロー
    ///
    /// 1. ファイル読み込み
    /// 2. TOML デシリアライズ → [`AppConfigDto`]
    /// 3. バリデーション & 変換 → [`AppConfig`]
    ///
    /// # 引数
    ///
    /// * `path` - TOML ファイルのパス
    ///
    /// # 戻り値
    ///
    /// * `Ok(AppConfig)` - 読み込みに成功した場合
    /// * `Err(ConfigError)` - ファイルの読み込みまたはパースに失敗した場合
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// TOML 文字列から設定を読み込む
    ///
    /// # 引数
    ///
    /// * `toml` - TOML 形式の文字列
    ///
    /// # 戻り値
    ///
    /// * `Ok(AppConfig)` - パースに成功した場合
    /// * `Err(ConfigError)` - パースまたはバリデーションに失敗した場合
    ///
    /// # 例
    ///
    /// ```rust
    /// use dv360_samples::config::AppConfig;
    ///
    /// let config = AppConfig::from_toml(
    ///     "[api]\n\
    ///      base_url = \"https://displayvideo.googleapis.com/v3\"\n\
    ///      access_token = \"ya29.test\"\n",
    /// ).unwrap();
    ///
    /// assert_eq!(config.api().base_url(), "https://displayvideo.googleapis.com/v3");
    /// ```
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let dto: AppConfigDto = toml::from_str(toml)?;
        Self::try_from(dto)
    }

    /// 設定を TOML 文字列に変換
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - TOML 文字列
    /// * `Err(ConfigError)` - シリアライズに失敗した場合
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let dto = AppConfigDto::from(self.clone());
        Ok(toml::to_string(&dto)?)
    }

    /// 設定を TOML ファイルに保存
    ///
    /// # 引数
    ///
    /// * `path` - 保存先のファイルパス
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 保存に成功した場合
    /// * `Err(ConfigError)` - ファイル書き込みに失敗した場合
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let toml = self.to_toml()?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// API 接続設定を取得
    pub fn api(&self) -> &ApiSettings {
        &self.api
    }
}

impl ApiSettings {
    /// API のベース URL（末尾スラッシュなし）
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 認証済みアクセストークン
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// デフォルトのパートナー ID
    pub fn partner_id(&self) -> Option<&str> {
        self.partner_id.as_deref()
    }
}

/// DTO からドメインモデルへの変換（読み込み方向）
///
/// バリデーションを実施し、不正なデータの場合は [`ConfigError::Validation`] を返します。
impl TryFrom<AppConfigDto> for AppConfig {
    type Error = ConfigError;

    fn try_from(dto: AppConfigDto) -> Result<Self, Self::Error> {
        if dto.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.base_url が空です".to_string(),
            ));
        }
        if dto.api.access_token.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.access_token が空です".to_string(),
            ));
        }

        // ベース URL の末尾スラッシュを正規化（パス結合時の二重スラッシュ防止）
        let base_url = dto.api.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            api: ApiSettings {
                base_url,
                access_token: dto.api.access_token,
                partner_id: dto.api.partner_id,
            },
        })
    }
}

/// ドメインモデルから DTO への変換（書き込み方向）
///
/// バリデーション済みのドメインモデルから DTO を生成するため、
/// この変換は失敗しません（`From` トレイトを使用）。
impl From<AppConfig> for AppConfigDto {
    fn from(config: AppConfig) -> Self {
        Self {
            api: ApiSettingsDto {
                base_url: config.api.base_url,
                access_token: config.api.access_token,
                partner_id: config.api.partner_id,
            },
        }
    }
}
