//! パートナー一覧サンプル
//!
//! # 責務
//!
//! - アクセス可能なパートナーの一覧を取得して描画
//! - 入力パラメータなしのサンプル（毎リクエスト無条件に実行される）の実例

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::example::traits::Example;
use crate::runner::context::FormValues;
use crate::service::DisplayVideoService;

/// パートナー一覧サンプル
///
/// 入力パラメータを持たないため、`input_parameters` はオーバーライドしません。
pub struct ListPartners;

#[async_trait]
impl Example for ListPartners {
    fn name(&self) -> &str {
        "List Partners"
    }

    async fn run(
        &self,
        service: &dyn DisplayVideoService,
        _values: &FormValues,
    ) -> Result<String, ServiceError> {
        let partners = service.list_partners().await?;

        let mut html = String::from("<h2>Partners</h2><ul>");
        for partner in &partners {
            html.push_str(&format!(
                "<li>{} (ID: {})</li>",
                partner.display_name, partner.partner_id
            ));
        }
        html.push_str("</ul>");

        Ok(html)
    }
}
