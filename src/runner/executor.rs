//! サンプル実行ドライバー
//!
//! # 責務
//!
//! このモジュールは、サンプルの実行を制御する [`ExampleRunner`] を提供します。
//! [`Example`] トレイトオブジェクトとリクエストコンテキストを受け取り、
//! 「フォーム表示」か「サンプル実行」かを 1 箇所で判断します。
//!
//! # 実行フロー
//!
//! 1. サンプルのパラメータ記述子を取得（1 リクエストにつき 1 回だけ取得し、
//!    検証・収集・描画で同じ列を使い回す）
//! 2. パラメータなし → `run` を無条件に実行
//! 3. パラメータあり:
//!    - 送信完了 → 値を収集して `run` を実行
//!    - 送信未完了 → 入力フォームを描画（`run` は実行しない）
//! 4. `run` の失敗はエラーページに変換
//!
//! リトライもタイムアウトも行いません。1 インスタンス 1 リクエストの
//! 使い捨てを想定しており、リクエストをまたいだ状態は持ちません。
//!
//! # 使用例
//!
//! ```rust,no_run
//! use dv360_samples::config::AppConfig;
//! use dv360_samples::example::create_example;
//! use dv360_samples::runner::context::RequestContext;
//! use dv360_samples::runner::ExampleRunner;
//! use dv360_samples::service::create_service;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_file("config/example.toml")?;
//!     let runner = ExampleRunner::new(create_service(config.api()));
//!
//!     let example = create_example("list_partners").expect("unknown action");
//!     let request = RequestContext::new().with_query("action", "list_partners");
//!
//!     let outcome = runner.execute(example.as_ref(), &request).await;
//!     println!("{}", outcome.page.html());
//!     Ok(())
//! }
//! ```

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::example::Example;
use crate::runner::context::{FormValues, RequestContext};
use crate::runner::form::{render_error, render_input_form};
use crate::runner::page::{ExecutionOutcome, Page};
use crate::service::DisplayVideoService;

/// サンプル実行ドライバー
///
/// 認証済みの API クライアントを 1 つ保持し、サンプルとリクエストを
/// 受け取って 1 ページ分の結果を返します。構築時に I/O は行いません。
///
/// # フィールド
///
/// - `service`: 認証済み API クライアント（構築時に 1 度だけ注入）
pub struct ExampleRunner {
    service: Arc<dyn DisplayVideoService>,
}

impl ExampleRunner {
    /// 新しいドライバーを生成
    ///
    /// # 引数
    ///
    /// - `service`: 認証済みの API クライアント
    pub fn new(service: Arc<dyn DisplayVideoService>) -> Self {
        Self { service }
    }

    /// サンプルを実行し、描画結果を返す
    ///
    /// 外部のディスパッチャーから 1 リクエストにつき 1 回呼ばれる想定の
    /// エントリポイントです。
    ///
    /// # 引数
    ///
    /// - `example`: 実行するサンプル
    /// - `request`: 現在のリクエストの入力状態
    ///
    /// # 戻り値
    ///
    /// [`ExecutionOutcome`] — 描画されたページ（フォーム / 出力 / エラー）と実行時間
    pub async fn execute(
        &self,
        example: &dyn Example,
        request: &RequestContext,
    ) -> ExecutionOutcome {
        let start_time = SystemTime::now();

        // 記述子の列は 1 リクエスト内で安定している必要があるため、
        // ここで 1 回だけ取得して使い回す
        let parameters = example.input_parameters();

        let page = if parameters.is_empty() {
            tracing::debug!(example = example.name(), "no parameters, running directly");
            self.run_example(example, request, FormValues::new()).await
        } else if request.is_submit_complete(&parameters) {
            let values = request.collect_values(&parameters);
            tracing::debug!(
                example = example.name(),
                values = values.len(),
                "submission complete, running"
            );
            self.run_example(example, request, values).await
        } else {
            tracing::debug!(example = example.name(), "rendering input form");
            Page::InputForm(render_input_form(example.name(), &parameters, request))
        };

        let duration = SystemTime::now()
            .duration_since(start_time)
            .unwrap_or(Duration::from_secs(0));

        ExecutionOutcome {
            example_name: example.name().to_string(),
            page,
            duration,
        }
    }

    /// サンプル本体を実行し、失敗時はエラーページに変換（プライベートメソッド）
    async fn run_example(
        &self,
        example: &dyn Example,
        request: &RequestContext,
        values: FormValues,
    ) -> Page {
        match example.run(self.service.as_ref(), &values).await {
            Ok(html) => Page::Output(html),
            Err(error) => {
                tracing::warn!(
                    example = example.name(),
                    code = error.code(),
                    "example failed: {error}"
                );
                Page::Error(render_error(example.name(), &error, request))
            }
        }
    }
}
