//! 入力フォームとエラーページの HTML 生成
//!
//! # 責務
//!
//! - パラメータ記述子の列から汎用の入力フォーム HTML を生成
//! - エラーの数値コードとメッセージから汎用のエラーブロック HTML を生成
//!
//! # 設計方針
//!
//! 出力ストリームへの直接書き込みではなく、HTML 文字列を返す純粋関数として
//! 実装しています。`execute` の制御フローが出力の副作用から分離され、
//! 戻り値の検査だけでテストできます。
//!
//! CSRF 対策や入力のサニタイズは行いません（デモページの範囲外）。

use crate::error::ServiceError;
use crate::example::Parameter;
use crate::runner::context::{RequestContext, SUBMIT_FIELD};

/// 入力フォームの HTML を生成
///
/// パラメータが 1 件もない場合は空文字列を返します。
///
/// パラメータごとに、ラベル（必須なら `*` マーカー付き）と input 要素
/// （ファイルパラメータなら `type="file"`）を描画します。
/// テキスト入力には、同名フィールドの直前の送信値があればそれを事前入力します
/// （バリデーション失敗後の再入力を軽減するため。ファイルには適用されません）。
/// 末尾に `*required` の凡例と送信ボタンを描画します。
///
/// # 引数
///
/// - `example_name`: サンプルの表示名（見出しに使用）
/// - `parameters`: パラメータ記述子の列
/// - `request`: 現在のリクエスト（テキスト値の事前入力に使用）
///
/// # 例
///
/// ```rust
/// use dv360_samples::example::Parameter;
/// use dv360_samples::runner::context::RequestContext;
/// use dv360_samples::runner::form::render_input_form;
///
/// let params = vec![Parameter::text("url", "URL").required()];
/// let html = render_input_form("Fetch URL", &params, &RequestContext::new());
///
/// assert!(html.contains("Enter Fetch URL parameters"));
/// assert!(html.contains("URL*:"));
/// assert!(html.contains("name=\"url\""));
/// ```
pub fn render_input_form(
    example_name: &str,
    parameters: &[Parameter],
    request: &RequestContext,
) -> String {
    if parameters.is_empty() {
        return String::new();
    }

    let mut html = String::new();
    html.push_str(&format!("<h2>Enter {} parameters</h2>", example_name));
    html.push_str("<form method=\"POST\" enctype=\"multipart/form-data\"><fieldset>");

    for parameter in parameters {
        // ファイル入力には直前の値を復元しない（復元できるのはテキストのみ）
        let current_value = if parameter.file {
            ""
        } else {
            request.post_value(&parameter.name).unwrap_or("")
        };

        let input_type = if parameter.file { " type=\"file\"" } else { "" };
        let required_marker = if parameter.required { "*" } else { "" };

        html.push_str(&format!(
            "{}{}: <input name=\"{}\" value=\"{}\"{}>",
            parameter.display, required_marker, parameter.name, current_value, input_type
        ));
        html.push_str("</br>");
    }

    html.push_str("</fieldset>*required<br/>");
    html.push_str(&format!(
        "<input type=\"submit\" name=\"{}\" value=\"Submit\"/>",
        SUBMIT_FIELD
    ));
    html.push_str("</form>");

    html
}

/// エラーページの HTML を生成
///
/// エラーの数値コードとメッセージを描画し、現在のリクエストの `action`
/// クエリパラメータとサンプル名から「戻る」リンクを組み立てます。
/// これは表示用の整形のみで、リトライやエラー種別の判別は行いません。
///
/// # 引数
///
/// - `example_name`: サンプルの表示名（「戻る」リンクの文言に使用）
/// - `error`: 描画するエラー
/// - `request`: 現在のリクエスト（`action` クエリパラメータの取得に使用）
pub fn render_error(
    example_name: &str,
    error: &ServiceError,
    request: &RequestContext,
) -> String {
    let action = request.query_value("action").unwrap_or("");

    let mut html = String::new();
    html.push_str(&format!(
        "<p class=\"error\">Error Code: {} </p>",
        error.code()
    ));
    html.push_str(&format!(
        "<p class=\"error\">Exception: {} </p>",
        error.message()
    ));
    html.push_str(&format!(
        "<p><a class=\"highlight\" href=\"?action={}\"> Go back to {} sample</a></p>",
        action, example_name
    ));

    html
}
