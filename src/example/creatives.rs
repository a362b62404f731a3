//! クリエイティブアセットアップロードサンプル
//!
//! # 責務
//!
//! - 指定広告主にクリエイティブアセットをアップロードして結果を描画
//! - 必須テキスト + 必須ファイルのサンプルの実例

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::example::traits::{Example, Parameter};
use crate::runner::context::FormValues;
use crate::service::DisplayVideoService;

/// クリエイティブアセットアップロードサンプル
///
/// 広告主 ID（必須テキスト）とクリエイティブファイル（必須ファイル）を
/// 受け取り、アセットとしてアップロードします。
pub struct UploadCreativeAsset;

#[async_trait]
impl Example for UploadCreativeAsset {
    fn name(&self) -> &str {
        "Upload Creative Asset"
    }

    fn input_parameters(&self) -> Vec<Parameter> {
        vec![
            Parameter::text("advertiser_id", "Advertiser ID").required(),
            Parameter::upload("creative", "Creative File").required(),
        ]
    }

    async fn run(
        &self,
        service: &dyn DisplayVideoService,
        values: &FormValues,
    ) -> Result<String, ServiceError> {
        let advertiser_id = values.text("advertiser_id").unwrap_or_default();
        let file = values.file("creative").ok_or_else(|| {
            ServiceError::InvalidResponse("creative ファイルがありません".to_string())
        })?;

        let asset = service.upload_creative_asset(advertiser_id, file).await?;

        Ok(format!(
            "<h2>Asset uploaded</h2>\
             <p>File: {}</p>\
             <p>Media ID: {}</p>\
             <p>Content: {}</p>",
            file.file_name, asset.media_id, asset.content
        ))
    }
}
