//! サンプル実行ドライバーモジュール
//!
//! # 責務
//!
//! - [`Example`](crate::example::Example) トレイトオブジェクトを受け取り、
//!   「入力フォーム表示」と「サンプル実行」を 1 箇所で分岐
//! - 必須パラメータとファイルアップロードの検証（全件一致のゲート）
//! - 送信値の収集とサンプルへの受け渡し
//! - 入力フォームとエラーページの HTML 生成
//!
//! # モジュール構成
//!
//! - [`executor`][]: 実行ドライバー本体（[`ExampleRunner`]）
//! - [`context`][]: リクエストコンテキスト（POST / ファイル / クエリ）
//! - [`form`][]: フォームとエラーページの HTML 生成（純粋関数）
//! - [`page`][]: 描画結果型（[`Page`] / [`ExecutionOutcome`]）
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
//!     // 1. 設定を読み込み、認証済みクライアントを生成
//!     let config = AppConfig::from_file("config/example.toml")?;
//!     let runner = ExampleRunner::new(create_service(config.api()));
//!
//!     // 2. action 識別子からサンプルを選択
//!     let example = create_example("list_advertisers").expect("unknown action");
//!
//!     // 3. リクエスト状態を組み立てて実行
//!     let request = RequestContext::new()
//!         .with_query("action", "list_advertisers")
//!         .with_post("submit", "1")
//!         .with_post("partner_id", "1234567");
//!
//!     let outcome = runner.execute(example.as_ref(), &request).await;
//!     println!("{}", outcome.page.html());
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod executor;
pub mod form;
pub mod page;

// 公開APIの再エクスポート
pub use context::{FormValue, FormValues, RequestContext, UploadedFile};
pub use executor::ExampleRunner;
pub use page::{ExecutionOutcome, Page};
