//! リクエストコンテキストの管理
//!
//! # 責務
//!
//! - 1 リクエスト分の HTTP 状態（POST フィールド、アップロードファイル、
//!   クエリパラメータ）を明示的な値として保持
//! - 送信マーカーと必須パラメータの検証（全件一致のゲート）
//! - 送信値の収集（[`FormValues`] の構築）
//!
//! # 主要な型
//!
//! - [`RequestContext`][]: 1 リクエスト分の入力状態
//! - [`UploadedFile`][]: アップロードされたファイル
//! - [`FormValues`][]: パラメータ名 → 送信値のマッピング
//!
//! # 設計方針
//!
//! 暗黙のグローバル状態（`$_POST` / `$_FILES` / `$_GET` 相当）を廃し、
//! すべての検証・収集・描画関数に [`RequestContext`] を引数として渡します。
//! これにより HTTP サーバーなしでユニットテストできます。
//!
//! # 使用例
//!
//! ```rust
//! use dv360_samples::example::Parameter;
//! use dv360_samples::runner::context::RequestContext;
//!
//! let params = vec![Parameter::text("url", "URL").required()];
//!
//! let request = RequestContext::new()
//!     .with_post("submit", "1")
//!     .with_post("url", "http://example.com");
//!
//! assert!(request.is_submit_complete(&params));
//!
//! let values = request.collect_values(&params);
//! assert_eq!(values.text("url"), Some("http://example.com"));
//! ```

use std::collections::HashMap;

use crate::example::Parameter;

/// 送信マーカーとなる POST フィールド名
///
/// このフィールドが存在することが「送信ボタンが押された」ことの合図です。
pub const SUBMIT_FIELD: &str = "submit";

/// 1 リクエスト分の HTTP 入力状態
///
/// リクエストごとに生成され、`execute` の 1 回の呼び出しで使い捨てられます。
/// リクエストをまたいだ状態は持ちません。
///
/// # フィールド
///
/// - `post`: POST フィールド（パラメータ名 → テキスト値）
/// - `files`: アップロードファイル（パラメータ名 → [`UploadedFile`]）
/// - `query`: クエリパラメータ（「戻る」リンク用の `action` 等）
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    post: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
    query: HashMap<String, String>,
}

impl RequestContext {
    /// 空のリクエストコンテキストを生成
    pub fn new() -> Self {
        Self::default()
    }

    /// POST フィールドを追加
    pub fn with_post(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.post.insert(name.into(), value.into());
        self
    }

    /// アップロードファイルを追加
    pub fn with_file(mut self, name: impl Into<String>, file: UploadedFile) -> Self {
        self.files.insert(name.into(), file);
        self
    }

    /// クエリパラメータを追加
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// POST フィールドのテキスト値を取得
    pub fn post_value(&self, name: &str) -> Option<&str> {
        self.post.get(name).map(String::as_str)
    }

    /// アップロードファイルを取得
    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }

    /// クエリパラメータの値を取得
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// 送信マーカーが存在するか
    ///
    /// `submit` POST フィールドの存在のみを見ます（値は問いません）。
    pub fn is_submitted(&self) -> bool {
        self.post.contains_key(SUBMIT_FIELD)
    }

    /// フォーム送信が完了しているか（全件一致のゲート）
    ///
    /// 送信マーカーが存在し、かつ `required` フラグの立った全パラメータに
    /// 空でない値があるときのみ `true` を返します。
    ///
    /// - ファイルパラメータ: 空でないアップロードファイルが存在すること
    /// - テキストパラメータ: 空でないテキスト値が存在すること
    ///
    /// 1 件でも欠けると `false` になり、フォームが再描画されます。
    /// どのフィールドが欠けたかの情報は返しません（仕様どおりの制限）。
    ///
    /// # 引数
    ///
    /// - `parameters`: サンプルが宣言したパラメータ記述子の列
    pub fn is_submit_complete(&self, parameters: &[Parameter]) -> bool {
        if !self.is_submitted() {
            return false;
        }

        for parameter in parameters {
            if !parameter.required {
                continue;
            }

            if parameter.file {
                match self.file(&parameter.name) {
                    Some(file) if !file.is_empty() => {}
                    _ => return false,
                }
            } else {
                match self.post_value(&parameter.name) {
                    Some(value) if !value.is_empty() => {}
                    _ => return false,
                }
            }
        }

        true
    }

    /// 送信値を収集して [`FormValues`] を構築
    ///
    /// パラメータごとに次の順で値を採用します。
    ///
    /// 1. ファイルパラメータで空でないファイルが存在 → ファイルエントリ
    /// 2. 空でないテキスト値が存在 → テキストエントリ
    /// 3. どちらもなければエントリなし（`None` や空値では入れない）
    ///
    /// # 引数
    ///
    /// - `parameters`: サンプルが宣言したパラメータ記述子の列
    ///
    /// # 戻り値
    ///
    /// 空でない値を持つパラメータのみを含む [`FormValues`]
    pub fn collect_values(&self, parameters: &[Parameter]) -> FormValues {
        let mut values = FormValues::new();

        for parameter in parameters {
            if parameter.file {
                if let Some(file) = self.file(&parameter.name) {
                    if !file.is_empty() {
                        values.insert(&parameter.name, FormValue::File(file.clone()));
                    }
                    continue;
                }
            }

            if let Some(text) = self.post_value(&parameter.name) {
                if !text.is_empty() {
                    values.insert(&parameter.name, FormValue::Text(text.to_string()));
                }
            }
        }

        values
    }
}

/// アップロードされたファイル
///
/// ファイル名と生のバイト列のみを保持します。
/// 永続化はしません（リクエスト終了とともに破棄されます）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// 送信時のファイル名
    pub file_name: String,

    /// ファイルの内容
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// 新しいアップロードファイルを生成
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// ファイル名も内容も空なら `true`
    ///
    /// 必須ファイルパラメータの充足判定に使用します。
    pub fn is_empty(&self) -> bool {
        self.file_name.is_empty() && self.bytes.is_empty()
    }
}

/// 送信値 1 件（テキストまたはファイル）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// テキスト値
    Text(String),

    /// アップロードファイル
    File(UploadedFile),
}

/// パラメータ名 → 送信値のマッピング
///
/// 送信完了時にリクエストごとに新しく構築されます。
/// 空でない値を持ったパラメータのエントリのみを含みます。
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    values: HashMap<String, FormValue>,
}

impl FormValues {
    /// 空のマッピングを生成
    pub fn new() -> Self {
        Self::default()
    }

    /// エントリを追加
    pub fn insert(&mut self, name: impl Into<String>, value: FormValue) {
        self.values.insert(name.into(), value);
    }

    /// 送信値を取得
    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.values.get(name)
    }

    /// テキスト値を取得（ファイルエントリの場合は `None`）
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FormValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// ファイルエントリを取得（テキストエントリの場合は `None`）
    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        match self.values.get(name) {
            Some(FormValue::File(file)) => Some(file),
            _ => None,
        }
    }

    /// エントリが存在するか
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// エントリ数
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// エントリが 1 件もないか
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_param() -> Vec<Parameter> {
        vec![Parameter::text("url", "URL").required()]
    }

    #[test]
    fn test_is_submitted_requires_marker() {
        let request = RequestContext::new().with_post("url", "http://example.com");
        assert!(!request.is_submitted());

        let request = request.with_post(SUBMIT_FIELD, "1");
        assert!(request.is_submitted());
    }

    #[test]
    fn test_submit_complete_without_marker() {
        // 値が揃っていても送信マーカーがなければ未完了
        let request = RequestContext::new().with_post("url", "http://example.com");
        assert!(!request.is_submit_complete(&url_param()));
    }

    #[test]
    fn test_submit_complete_with_required_text() {
        let request = RequestContext::new()
            .with_post(SUBMIT_FIELD, "1")
            .with_post("url", "http://example.com");

        assert!(request.is_submit_complete(&url_param()));
    }

    #[test]
    fn test_submit_incomplete_when_required_text_missing() {
        let request = RequestContext::new().with_post(SUBMIT_FIELD, "1");
        assert!(!request.is_submit_complete(&url_param()));
    }

    #[test]
    fn test_submit_incomplete_when_required_text_empty() {
        let request = RequestContext::new()
            .with_post(SUBMIT_FIELD, "1")
            .with_post("url", "");

        assert!(!request.is_submit_complete(&url_param()));
    }

    #[test]
    fn test_submit_complete_ignores_missing_optional() {
        let params = vec![
            Parameter::text("url", "URL").required(),
            Parameter::text("note", "Note"),
        ];
        let request = RequestContext::new()
            .with_post(SUBMIT_FIELD, "1")
            .with_post("url", "http://example.com");

        assert!(request.is_submit_complete(&params));
    }

    #[test]
    fn test_submit_incomplete_when_required_file_missing() {
        let params = vec![Parameter::upload("creative", "Creative File").required()];
        let request = RequestContext::new().with_post(SUBMIT_FIELD, "1");

        assert!(!request.is_submit_complete(&params));
    }

    #[test]
    fn test_submit_incomplete_when_required_file_empty() {
        let params = vec![Parameter::upload("creative", "Creative File").required()];
        let request = RequestContext::new()
            .with_post(SUBMIT_FIELD, "1")
            .with_file("creative", UploadedFile::new("", Vec::new()));

        assert!(!request.is_submit_complete(&params));
    }

    #[test]
    fn test_submit_complete_with_required_file() {
        let params = vec![Parameter::upload("creative", "Creative File").required()];
        let request = RequestContext::new()
            .with_post(SUBMIT_FIELD, "1")
            .with_file("creative", UploadedFile::new("banner.png", vec![1, 2, 3]));

        assert!(request.is_submit_complete(&params));
    }

    #[test]
    fn test_collect_values_text() {
        let request = RequestContext::new()
            .with_post(SUBMIT_FIELD, "1")
            .with_post("url", "http://example.com");

        let values = request.collect_values(&url_param());

        assert_eq!(values.len(), 1);
        assert_eq!(values.text("url"), Some("http://example.com"));
    }

    #[test]
    fn test_collect_values_skips_missing_optional() {
        let params = vec![
            Parameter::text("url", "URL").required(),
            Parameter::text("note", "Note"),
        ];
        let request = RequestContext::new()
            .with_post(SUBMIT_FIELD, "1")
            .with_post("url", "http://example.com");

        let values = request.collect_values(&params);

        assert!(values.contains("url"));
        assert!(!values.contains("note"));
    }

    #[test]
    fn test_collect_values_skips_empty_text() {
        let params = vec![Parameter::text("note", "Note")];
        let request = RequestContext::new()
            .with_post(SUBMIT_FIELD, "1")
            .with_post("note", "");

        let values = request.collect_values(&params);
        assert!(values.is_empty());
    }

    #[test]
    fn test_collect_values_file() {
        let params = vec![Parameter::upload("creative", "Creative File").required()];
        let file = UploadedFile::new("banner.png", vec![0xDE, 0xAD]);
        let request = RequestContext::new()
            .with_post(SUBMIT_FIELD, "1")
            .with_file("creative", file.clone());

        let values = request.collect_values(&params);

        assert_eq!(values.file("creative"), Some(&file));
        assert_eq!(values.text("creative"), None);
    }

    #[test]
    fn test_collect_values_file_param_ignores_text_fallback_when_file_present() {
        // ファイルパラメータにファイルがあれば、同名の POST 値は使わない
        let params = vec![Parameter::upload("creative", "Creative File")];
        let request = RequestContext::new()
            .with_post(SUBMIT_FIELD, "1")
            .with_post("creative", "should-not-be-used")
            .with_file("creative", UploadedFile::new("banner.png", vec![1]));

        let values = request.collect_values(&params);
        assert!(values.file("creative").is_some());
    }

    #[test]
    fn test_uploaded_file_is_empty() {
        assert!(UploadedFile::new("", Vec::new()).is_empty());
        assert!(!UploadedFile::new("a.png", Vec::new()).is_empty());
        assert!(!UploadedFile::new("", vec![1]).is_empty());
    }

    #[test]
    fn test_query_value() {
        let request = RequestContext::new().with_query("action", "list_advertisers");

        assert_eq!(request.query_value("action"), Some("list_advertisers"));
        assert_eq!(request.query_value("missing"), None);
    }
}
