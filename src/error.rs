//! エラー型の定義
//!
//! このモジュールは、dv360-samples 全体で使用されるエラー型を定義します。

use thiserror::Error;

/// 設定関連のエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// ファイルの読み込みに失敗
    #[error("設定ファイルの読み込みに失敗しました: {0}")]
    FileRead(#[from] std::io::Error),

    /// TOML のデシリアライズに失敗
    #[error("TOML のデシリアライズに失敗しました: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    /// TOML のシリアライズに失敗
    #[error("TOML のシリアライズに失敗しました: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// バリデーションエラー
    #[error("設定のバリデーションに失敗しました: {0}")]
    Validation(String),
}

/// Display & Video 360 API 呼び出し時のエラー
///
/// エラーページの描画（[`render_error`](crate::runner::form::render_error)）が
/// 数値コードとメッセージを必要とするため、すべてのバリアントから
/// [`code`](ServiceError::code) と [`message`](ServiceError::message) を取得できます。
#[derive(Debug, Error)]
pub enum ServiceError {
    /// API がエラーレスポンスを返した
    #[error("API エラー (code {code}): {message}")]
    Api {
        /// HTTP ステータスコード（Google エラーエンベロープの `error.code`）
        code: u16,
        /// エラーメッセージ（`error.message`）
        message: String,
    },

    /// HTTP 通信に失敗
    #[error("HTTP リクエストに失敗しました: {0}")]
    Http(#[from] reqwest::Error),

    /// レスポンスのパースに失敗
    #[error("不正なレスポンス: {0}")]
    InvalidResponse(String),
}

impl ServiceError {
    /// エラーページ描画用の数値コードを返す
    ///
    /// API エラーはステータスコード、HTTP エラーはレスポンスがあればその
    /// ステータスコード、それ以外は 0 を返します。
    pub fn code(&self) -> u16 {
        match self {
            Self::Api { code, .. } => *code,
            Self::Http(err) => err.status().map(|s| s.as_u16()).unwrap_or(0),
            Self::InvalidResponse(_) => 0,
        }
    }

    /// エラーページ描画用のメッセージを返す
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
