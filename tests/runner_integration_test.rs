use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use dv360_samples::config::AppConfig;
use dv360_samples::error::ServiceError;
use dv360_samples::example::{Example, Parameter, create_example};
use dv360_samples::runner::ExampleRunner;
use dv360_samples::runner::context::{FormValues, RequestContext, UploadedFile};
use dv360_samples::service::{Advertiser, CreativeAsset, DisplayVideoService, Partner};

/// 実際の API を呼ばないモックサービス
struct MockService {
    fail_with: Option<(u16, String)>,
}

impl MockService {
    fn ok() -> Arc<Self> {
        Arc::new(Self { fail_with: None })
    }

    fn failing(code: u16, message: &str) -> Arc<Self> {
        Arc::new(Self {
            fail_with: Some((code, message.to_string())),
        })
    }

    fn maybe_fail(&self) -> Result<(), ServiceError> {
        if let Some((code, message)) = &self.fail_with {
            return Err(ServiceError::Api {
                code: *code,
                message: message.clone(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DisplayVideoService for MockService {
    async fn list_partners(&self) -> Result<Vec<Partner>, ServiceError> {
        self.maybe_fail()?;
        Ok(vec![Partner {
            partner_id: "1234567".to_string(),
            display_name: "Integration Partner".to_string(),
        }])
    }

    async fn list_advertisers(
        &self,
        partner_id: &str,
    ) -> Result<Vec<Advertiser>, ServiceError> {
        self.maybe_fail()?;
        Ok(vec![Advertiser {
            advertiser_id: format!("{partner_id}-001"),
            display_name: "Integration Advertiser".to_string(),
            entity_status: "ENTITY_STATUS_ACTIVE".to_string(),
        }])
    }

    async fn upload_creative_asset(
        &self,
        _advertiser_id: &str,
        file: &UploadedFile,
    ) -> Result<CreativeAsset, ServiceError> {
        self.maybe_fail()?;
        Ok(CreativeAsset {
            media_id: "media-42".to_string(),
            content: format!("creative/{}", file.file_name),
        })
    }
}

/// 必須テキストパラメータ `url` を 1 件だけ持つサンプル（仕様シナリオ用）
struct FetchUrl {
    run_count: Mutex<u32>,
    last_values: Mutex<Option<String>>,
}

impl FetchUrl {
    fn new() -> Self {
        Self {
            run_count: Mutex::new(0),
            last_values: Mutex::new(None),
        }
    }

    fn runs(&self) -> u32 {
        *self.run_count.lock().unwrap()
    }

    fn last_url(&self) -> Option<String> {
        self.last_values.lock().unwrap().clone()
    }
}

#[async_trait]
impl Example for FetchUrl {
    fn name(&self) -> &str {
        "Fetch URL"
    }

    fn input_parameters(&self) -> Vec<Parameter> {
        vec![Parameter::text("url", "URL").required()]
    }

    async fn run(
        &self,
        _service: &dyn DisplayVideoService,
        values: &FormValues,
    ) -> Result<String, ServiceError> {
        *self.run_count.lock().unwrap() += 1;
        *self.last_values.lock().unwrap() = values.text("url").map(str::to_string);
        Ok("<p>done</p>".to_string())
    }
}

#[test]
fn test_load_example_config() {
    let config_path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/example.toml");
    let config = AppConfig::from_file(config_path).expect("Failed to load config");

    assert_eq!(
        config.api().base_url(),
        "https://displayvideo.googleapis.com/v3"
    );
    assert_eq!(config.api().partner_id(), Some("1234567"));
}

#[tokio::test]
async fn test_fetch_url_renders_form_without_submit() {
    let example = FetchUrl::new();
    let runner = ExampleRunner::new(MockService::ok());

    let outcome = runner.execute(&example, &RequestContext::new()).await;

    assert!(outcome.page.is_input_form());
    assert!(outcome.page.html().contains("URL*:"));
    assert!(outcome.page.html().contains("<input name=\"url\" value=\"\">"));
    assert_eq!(example.runs(), 0);
}

#[tokio::test]
async fn test_fetch_url_runs_with_submitted_value() {
    let example = FetchUrl::new();
    let runner = ExampleRunner::new(MockService::ok());
    let request = RequestContext::new()
        .with_post("submit", "1")
        .with_post("url", "http://example.com");

    let outcome = runner.execute(&example, &request).await;

    assert!(outcome.page.is_output());
    assert_eq!(example.runs(), 1);
    assert_eq!(example.last_url(), Some("http://example.com".to_string()));
}

#[tokio::test]
async fn test_fetch_url_rerenders_form_when_url_missing() {
    let example = FetchUrl::new();
    let runner = ExampleRunner::new(MockService::ok());
    let request = RequestContext::new().with_post("submit", "1");

    let outcome = runner.execute(&example, &request).await;

    assert!(outcome.page.is_input_form());
    assert_eq!(example.runs(), 0);
}

#[tokio::test]
async fn test_list_partners_runs_without_parameters() {
    let example = create_example("list_partners").unwrap();
    let runner = ExampleRunner::new(MockService::ok());

    let outcome = runner.execute(example.as_ref(), &RequestContext::new()).await;

    assert!(outcome.page.is_output());
    assert!(outcome.page.html().contains("Integration Partner"));
    assert!(outcome.page.html().contains("1234567"));
}

#[tokio::test]
async fn test_list_advertisers_end_to_end() {
    let example = create_example("list_advertisers").unwrap();
    let runner = ExampleRunner::new(MockService::ok());
    let request = RequestContext::new()
        .with_query("action", "list_advertisers")
        .with_post("submit", "1")
        .with_post("partner_id", "1234567");

    let outcome = runner.execute(example.as_ref(), &request).await;

    assert!(outcome.page.is_output());
    assert!(outcome.page.html().contains("Advertisers for partner 1234567"));
    assert!(outcome.page.html().contains("1234567-001"));
}

#[tokio::test]
async fn test_upload_creative_asset_end_to_end() {
    let example = create_example("upload_creative_asset").unwrap();
    let runner = ExampleRunner::new(MockService::ok());
    let request = RequestContext::new()
        .with_post("submit", "1")
        .with_post("advertiser_id", "111")
        .with_file("creative", UploadedFile::new("banner.png", vec![0x89, 0x50]));

    let outcome = runner.execute(example.as_ref(), &request).await;

    assert!(outcome.page.is_output());
    assert!(outcome.page.html().contains("banner.png"));
    assert!(outcome.page.html().contains("media-42"));
}

#[tokio::test]
async fn test_upload_creative_asset_blocked_without_file() {
    // 必須ファイルが欠けているため送信ゲートで止まり、フォームが再描画される
    let example = create_example("upload_creative_asset").unwrap();
    let runner = ExampleRunner::new(MockService::ok());
    let request = RequestContext::new()
        .with_post("submit", "1")
        .with_post("advertiser_id", "111");

    let outcome = runner.execute(example.as_ref(), &request).await;

    assert!(outcome.page.is_input_form());
    assert!(
        outcome
            .page
            .html()
            .contains("<input name=\"advertiser_id\" value=\"111\">")
    );
    assert!(
        outcome
            .page
            .html()
            .contains("<input name=\"creative\" value=\"\" type=\"file\">")
    );
}

#[tokio::test]
async fn test_api_failure_renders_error_page() {
    let example = create_example("list_advertisers").unwrap();
    let runner = ExampleRunner::new(MockService::failing(403, "permission denied"));
    let request = RequestContext::new()
        .with_query("action", "list_advertisers")
        .with_post("submit", "1")
        .with_post("partner_id", "1234567");

    let outcome = runner.execute(example.as_ref(), &request).await;

    assert!(outcome.page.is_error());
    assert!(outcome.page.html().contains("Error Code: 403 "));
    assert!(outcome.page.html().contains("permission denied"));
    assert!(
        outcome
            .page
            .html()
            .contains("Go back to List Advertisers sample")
    );
}
