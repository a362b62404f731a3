//! サンプル（Example）の共通インターフェース定義
//!
//! # 責務
//!
//! - 各サンプルページの共通トレイト [`Example`] を定義
//! - 入力パラメータ記述子 [`Parameter`] を提供
//!
//! # 設計方針
//!
//! 元々の「抽象基底クラス + テンプレートメソッド」構成を、
//! トレイトオブジェクト + 単一のドライバー
//! （[`ExampleRunner`](crate::runner::ExampleRunner)）に置き換えています。
//! サンプル側は `name` / `run` と、入力が必要な場合のみ
//! `input_parameters` を実装します。
//!
//! # 使用例
//!
//! ```rust
//! use async_trait::async_trait;
//! use dv360_samples::error::ServiceError;
//! use dv360_samples::example::{Example, Parameter};
//! use dv360_samples::runner::context::FormValues;
//! use dv360_samples::service::DisplayVideoService;
//!
//! struct GetAdvertiser;
//!
//! #[async_trait]
//! impl Example for GetAdvertiser {
//!     fn name(&self) -> &str {
//!         "Get Advertiser"
//!     }
//!
//!     fn input_parameters(&self) -> Vec<Parameter> {
//!         vec![Parameter::text("advertiser_id", "Advertiser ID").required()]
//!     }
//!
//!     async fn run(
//!         &self,
//!         _service: &dyn DisplayVideoService,
//!         values: &FormValues,
//!     ) -> Result<String, ServiceError> {
//!         let id = values.text("advertiser_id").unwrap_or("");
//!         Ok(format!("<p>advertiser: {}</p>", id))
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::runner::context::FormValues;
use crate::service::DisplayVideoService;

/// サンプルの共通インターフェース
///
/// 1 つのサンプル = 1 つの API 操作を実演する自己完結したデモページ。
/// 実行制御（フォーム表示・バリデーション・値収集）はドライバー側が行うため、
/// 実装側はサンプル固有のロジックだけを記述します。
///
/// # 実装要件
///
/// - `Send + Sync`: トレイトオブジェクトとして共有可能
/// - 非同期実行対応（`async_trait` を使用）
/// - `input_parameters` は決定的かつ副作用なしであること
///   （1 リクエスト内で複数回呼ばれても同じ列を返す）
#[async_trait]
pub trait Example: Send + Sync {
    /// サンプルの表示名
    ///
    /// フォームの見出しやエラーページの「戻る」リンクに使用されます。
    fn name(&self) -> &str;

    /// サンプルが必要とする入力パラメータの列
    ///
    /// 入力が不要なサンプルはオーバーライド不要（デフォルトは空）。
    /// 空の場合、ドライバーはリクエスト内容にかかわらず [`run`](Example::run) を
    /// 無条件に実行します。
    fn input_parameters(&self) -> Vec<Parameter> {
        Vec::new()
    }

    /// サンプル本体のロジック
    ///
    /// # 引数
    ///
    /// - `service`: 認証済みの API クライアント
    /// - `values`: 収集済みの送信値（パラメータなしのサンプルでは空）
    ///
    /// # 戻り値
    ///
    /// - `Ok(String)`: サンプルが生成した HTML 断片
    /// - `Err(ServiceError)`: API 呼び出し失敗時（ドライバーがエラーページに変換）
    async fn run(
        &self,
        service: &dyn DisplayVideoService,
        values: &FormValues,
    ) -> Result<String, ServiceError>;
}

/// 入力パラメータ記述子
///
/// サンプルが必要とする入力 1 件の静的な宣言です。
/// サンプルごとに宣言され、返却後は不変として扱われます。
///
/// # フィールド
///
/// - `name`: 識別子（サンプル内で一意、フォームの input 名になる）
/// - `display`: 人間向けのラベル
/// - `required`: 必須フラグ（`*` マーカー付きで描画され、送信ゲートの対象になる）
/// - `file`: ファイルアップロードかどうか（`type="file"` で描画される）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// 識別子（フォームの input 名）
    pub name: String,

    /// 人間向けのラベル
    pub display: String,

    /// 必須フラグ
    pub required: bool,

    /// ファイルアップロードフラグ
    pub file: bool,
}

impl Parameter {
    /// テキスト入力のパラメータを生成（デフォルトは任意入力）
    ///
    /// # 例
    ///
    /// ```rust
    /// use dv360_samples::example::Parameter;
    ///
    /// let param = Parameter::text("partner_id", "Partner ID");
    /// assert!(!param.required);
    /// assert!(!param.file);
    /// ```
    pub fn text(name: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display: display.into(),
            required: false,
            file: false,
        }
    }

    /// ファイルアップロードのパラメータを生成（デフォルトは任意入力）
    ///
    /// # 例
    ///
    /// ```rust
    /// use dv360_samples::example::Parameter;
    ///
    /// let param = Parameter::upload("creative", "Creative File");
    /// assert!(param.file);
    /// ```
    pub fn upload(name: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display: display.into(),
            required: false,
            file: true,
        }
    }

    /// 必須フラグを立てる
    ///
    /// # 例
    ///
    /// ```rust
    /// use dv360_samples::example::Parameter;
    ///
    /// let param = Parameter::text("partner_id", "Partner ID").required();
    /// assert!(param.required);
    /// ```
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
