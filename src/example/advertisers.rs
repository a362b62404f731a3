//! 広告主一覧サンプル
//!
//! # 責務
//!
//! - 指定パートナー配下の広告主一覧を取得して描画
//! - 必須テキストパラメータ 1 件のサンプルの実例

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::example::traits::{Example, Parameter};
use crate::runner::context::FormValues;
use crate::service::DisplayVideoService;

/// 広告主一覧サンプル
///
/// パートナー ID（必須テキスト）を受け取り、その配下の広告主を一覧表示します。
pub struct ListAdvertisers;

#[async_trait]
impl Example for ListAdvertisers {
    fn name(&self) -> &str {
        "List Advertisers"
    }

    fn input_parameters(&self) -> Vec<Parameter> {
        vec![Parameter::text("partner_id", "Partner ID").required()]
    }

    async fn run(
        &self,
        service: &dyn DisplayVideoService,
        values: &FormValues,
    ) -> Result<String, ServiceError> {
        // 送信ゲートを通過している時点で必須値の存在は保証されている
        let partner_id = values.text("partner_id").unwrap_or_default();

        let advertisers = service.list_advertisers(partner_id).await?;

        let mut html = format!("<h2>Advertisers for partner {}</h2><ul>", partner_id);
        for advertiser in &advertisers {
            html.push_str(&format!(
                "<li>{} (ID: {}, status: {})</li>",
                advertiser.display_name, advertiser.advertiser_id, advertiser.entity_status
            ));
        }
        html.push_str("</ul>");

        Ok(html)
    }
}
