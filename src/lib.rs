//! Display & Video 360 API のサンプル集を動かすための小さなフレームワーク
//!
//! # 責務
//!
//! - サンプル（1 ページ = 1 API 操作のデモ）の共通インターフェース
//! - パラメータ記述子に基づく入力フォームの生成と送信値の検証・収集
//! - 認証済み API クライアントの注入とサンプルへの受け渡し
//! - エラーページの生成
//!
//! # モジュール構成
//!
//! - [`config`][]: TOML 設定の読み込みと検証
//! - [`error`][]: エラー型（[`ConfigError`](error::ConfigError) /
//!   [`ServiceError`](error::ServiceError)）
//! - [`example`][]: サンプルの共通トレイトと具象サンプル
//! - [`runner`][]: 実行ドライバー（フォーム表示か実行かの分岐）
//! - [`service`][]: Display & Video 360 API クライアント
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

pub mod config;
pub mod error;
pub mod example;
pub mod runner;
pub mod service;
