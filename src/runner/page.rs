//! サンプル実行結果の型定義
//!
//! # 責務
//!
//! - 1 リクエスト分の描画結果 [`Page`] の型定義
//! - 実行結果全体 [`ExecutionOutcome`] の型定義
//!
//! # 主要な型
//!
//! - [`Page`][]: 描画された HTML（入力フォーム / サンプル出力 / エラーページ）
//! - [`ExecutionOutcome`][]: サンプル名・ページ・実行時間のまとまり
//!
//! # 使用例
//!
//! ```rust
//! use dv360_samples::runner::page::Page;
//!
//! fn handle_page(page: Page) {
//!     if page.is_input_form() {
//!         println!("入力待ち: {}", page.html());
//!     } else {
//!         println!("{}", page.html());
//!     }
//! }
//! ```

use serde::Serialize;
use std::time::Duration;

/// 1 リクエスト分の描画結果
///
/// `execute` は必ずこの 3 種のいずれかを返します。
/// どの分岐を通ったかが型で判別できるため、出力ストリームを
/// キャプチャせずにテストできます。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "html", rename_all = "snake_case")]
pub enum Page {
    /// 入力フォーム（送信未完了のため `run` は実行されていない）
    InputForm(String),

    /// サンプルの `run` が生成した出力
    Output(String),

    /// `run` が失敗し、エラーページに変換されたもの
    Error(String),
}

impl Page {
    /// ページの HTML を取得
    pub fn html(&self) -> &str {
        match self {
            Self::InputForm(html) | Self::Output(html) | Self::Error(html) => html,
        }
    }

    /// 入力フォームかどうか
    pub fn is_input_form(&self) -> bool {
        matches!(self, Self::InputForm(_))
    }

    /// サンプル出力かどうか
    pub fn is_output(&self) -> bool {
        matches!(self, Self::Output(_))
    }

    /// エラーページかどうか
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// サンプル実行結果
///
/// 1 回の `execute` 呼び出しの結果をまとめた型です。
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionOutcome {
    /// サンプルの表示名
    pub example_name: String,

    /// 描画されたページ
    pub page: Page,

    /// 実行時間
    pub duration: Duration,
}

impl ExecutionOutcome {
    /// 結果をJSON形式でシリアライズ
    ///
    /// # 戻り値
    ///
    /// - `Ok(String)`: JSON文字列
    /// - `Err(serde_json::Error)`: シリアライズ失敗
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
