//! Display & Video 360 REST API クライアント
//!
//! # 責務
//!
//! - Display & Video 360 REST API との HTTP 通信を担当
//! - [`DisplayVideoService`] トレイトを実装し、統一インターフェースを提供
//! - Google エラーエンベロープと共通エラー型の変換
//!
//! # 認証
//!
//! このクライアントは認証フローを持ちません。構築時に受け取った
//! アクセストークンを Bearer トークンとして送るだけです。
//! トークンの取得・更新は設定ファイル側（呼び出し元）の責務です。
//!
//! # エラーレスポンス形式
//!
//! Google API は失敗時に次のエンベロープを返します：
//!
//! ```json
//! {
//!   "error": {
//!     "code": 403,
//!     "message": "The caller does not have permission",
//!     "status": "PERMISSION_DENIED"
//!   }
//! }
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ApiSettings;
use crate::error::ServiceError;
use crate::runner::context::UploadedFile;
use super::traits::{Advertiser, CreativeAsset, DisplayVideoService, Partner};

/// Display & Video 360 REST API クライアント
///
/// 認証済みアクセストークンを保持し、[`DisplayVideoService`] の各操作を
/// REST エンドポイントにマッピングします。構築時に I/O は行いません。
pub struct DisplayVideoClient {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl DisplayVideoClient {
    /// 新しいクライアントを生成
    ///
    /// # 引数
    ///
    /// - `settings`: 検証済みの API 接続設定
    pub fn new(settings: &ApiSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: settings.base_url().to_string(),
            access_token: settings.access_token().to_string(),
        }
    }

    /// GET リクエストを実行して JSON をデコード（プライベートメソッド）
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ServiceError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// レスポンスをデコードし、エラーエンベロープを [`ServiceError`] に変換
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ServiceError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(parse_api_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            ServiceError::InvalidResponse(format!(
                "Failed to parse API JSON response: {}. Body was: {}",
                e, body
            ))
        })
    }
}

#[async_trait]
impl DisplayVideoService for DisplayVideoClient {
    async fn list_partners(&self) -> Result<Vec<Partner>, ServiceError> {
        let response: PartnersResponse = self.get_json("partners", &[]).await?;
        Ok(response.partners)
    }

    async fn list_advertisers(
        &self,
        partner_id: &str,
    ) -> Result<Vec<Advertiser>, ServiceError> {
        let response: AdvertisersResponse = self
            .get_json("advertisers", &[("partnerId", partner_id)])
            .await?;
        Ok(response.advertisers)
    }

    async fn upload_creative_asset(
        &self,
        advertiser_id: &str,
        file: &UploadedFile,
    ) -> Result<CreativeAsset, ServiceError> {
        let url = format!("{}/advertisers/{}/assets", self.base_url, advertiser_id);
        tracing::debug!(%url, file = %file.file_name, "POST (media upload)");

        // マルチパートではなく生バイトのメディアアップロードを使用
        let response = self
            .client
            .post(&url)
            .query(&[("uploadType", "media"), ("filename", &file.file_name)])
            .bearer_auth(&self.access_token)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(file.bytes.clone())
            .send()
            .await?;

        let envelope: AssetEnvelope = Self::decode(response).await?;
        Ok(envelope.asset)
    }
}

/// エラーレスポンスの本文を [`ServiceError::Api`] に変換
///
/// Google エラーエンベロープとしてパースできた場合はその code/message を、
/// できなかった場合は HTTP ステータスと本文をそのまま使います。
fn parse_api_error(status: u16, body: &str) -> ServiceError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => ServiceError::Api {
            code: envelope.error.code,
            message: envelope.error.message,
        },
        Err(_) => ServiceError::Api {
            code: status,
            message: body.to_string(),
        },
    }
}

/// `partners` エンドポイントのレスポンス形式
#[derive(Debug, Deserialize)]
struct PartnersResponse {
    /// パートナーの一覧（0 件のときは省略される）
    #[serde(default)]
    partners: Vec<Partner>,
}

/// `advertisers` エンドポイントのレスポンス形式
#[derive(Debug, Deserialize)]
struct AdvertisersResponse {
    /// 広告主の一覧（0 件のときは省略される）
    #[serde(default)]
    advertisers: Vec<Advertiser>,
}

/// アセットアップロードのレスポンス形式
#[derive(Debug, Deserialize)]
struct AssetEnvelope {
    /// アップロードされたアセット
    asset: CreativeAsset,
}

/// Google エラーエンベロープ
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    /// エラー詳細
    error: ErrorDetail,
}

/// エラーエンベロープの内訳
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    /// HTTP ステータス相当のコード
    code: u16,

    /// エラーメッセージ
    message: String,
}
