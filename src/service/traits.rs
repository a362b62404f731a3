//! Display & Video 360 API クライアントの共通インターフェース定義
//!
//! # 責務
//!
//! - 認証済み API クライアントの共通トレイト [`DisplayVideoService`] を定義
//! - クライアント非依存のエンティティ型（[`Partner`] / [`Advertiser`] /
//!   [`CreativeAsset`]）を提供
//!
//! サンプル側はこのトレイト経由でのみ API に触れるため、
//! テストではモック実装に差し替えられます。

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::runner::context::UploadedFile;

/// Display & Video 360 API クライアントの共通インターフェース
///
/// 実装は構築時点で認証済みであることを前提とします。
/// 各サンプルが必要とする操作のみを公開します。
///
/// # 実装要件
///
/// - `Send + Sync`: トレイトオブジェクトとして共有可能
/// - 非同期実行対応（`async_trait` を使用）
#[async_trait]
pub trait DisplayVideoService: Send + Sync {
    /// アクセス可能なパートナーの一覧を取得
    ///
    /// # 戻り値
    ///
    /// - `Ok(Vec<Partner>)`: 成功時、パートナーの一覧
    /// - `Err(ServiceError)`: API 呼び出し失敗時
    async fn list_partners(&self) -> Result<Vec<Partner>, ServiceError>;

    /// 指定パートナー配下の広告主の一覧を取得
    ///
    /// # 引数
    ///
    /// - `partner_id`: パートナー ID
    async fn list_advertisers(
        &self,
        partner_id: &str,
    ) -> Result<Vec<Advertiser>, ServiceError>;

    /// クリエイティブアセットをアップロード
    ///
    /// # 引数
    ///
    /// - `advertiser_id`: アップロード先の広告主 ID
    /// - `file`: アップロードするファイル
    async fn upload_creative_asset(
        &self,
        advertiser_id: &str,
        file: &UploadedFile,
    ) -> Result<CreativeAsset, ServiceError>;
}

/// パートナー
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    /// パートナー ID
    pub partner_id: String,

    /// 表示名
    #[serde(default)]
    pub display_name: String,
}

/// 広告主
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertiser {
    /// 広告主 ID
    pub advertiser_id: String,

    /// 表示名
    #[serde(default)]
    pub display_name: String,

    /// エンティティの状態（例: "ENTITY_STATUS_ACTIVE"）
    #[serde(default)]
    pub entity_status: String,
}

/// アップロード済みクリエイティブアセット
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeAsset {
    /// アセットのメディア ID
    pub media_id: String,

    /// アセットの内容を参照するパス
    #[serde(default)]
    pub content: String,
}
