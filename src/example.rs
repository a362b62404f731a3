//! サンプル（デモページ）の抽象化レイヤー
//!
//! # 責務
//!
//! - 各サンプルを統一的に扱うインターフェース（[`Example`] トレイト）を提供
//! - `action` 識別子に応じたサンプルを生成するファクトリー機能
//! - 入力パラメータ記述子 [`Parameter`] の提供
//!
//! # モジュール構成
//!
//! - `traits` - 共通インターフェース（[`Example`] トレイト、[`Parameter`]）
//! - `partners` - パートナー一覧サンプル（パラメータなし）
//! - `advertisers` - 広告主一覧サンプル（必須テキスト）
//! - `creatives` - クリエイティブアセットアップロードサンプル（テキスト + ファイル）
//!
//! # 使用例
//!
//! ```rust
//! use dv360_samples::example::{all_actions, create_example};
//!
//! let example = create_example("list_advertisers").expect("unknown action");
//! assert_eq!(example.name(), "List Advertisers");
//!
//! assert!(create_example("no_such_action").is_none());
//! assert!(all_actions().contains(&"list_partners"));
//! ```

pub mod advertisers;
pub mod creatives;
pub mod partners;
pub mod traits;

// 公開APIの再エクスポート
pub use traits::{Example, Parameter};

use advertisers::ListAdvertisers;
use creatives::UploadCreativeAsset;
use partners::ListPartners;

/// 利用可能な action 識別子の一覧
///
/// 外部ディスパッチャー（CLI やトップページ）がサンプル一覧の表示に使用します。
pub fn all_actions() -> Vec<&'static str> {
    vec!["list_partners", "list_advertisers", "upload_creative_asset"]
}

/// `action` 識別子からサンプルを生成するファクトリー関数
///
/// # 引数
///
/// - `action`: サンプルを識別する action 文字列
///
/// # 戻り値
///
/// - `Some(Box<dyn Example>)`: 対応するサンプル
/// - `None`: 未知の action の場合
pub fn create_example(action: &str) -> Option<Box<dyn Example>> {
    match action {
        "list_partners" => Some(Box::new(ListPartners)),
        "list_advertisers" => Some(Box::new(ListAdvertisers)),
        "upload_creative_asset" => Some(Box::new(UploadCreativeAsset)),
        _ => None,
    }
}
