//! dv360-samples CLI
//!
//! # 責務
//!
//! - コマンドライン引数からリクエストコンテキストを組み立て
//! - 設定ファイルの読み込みと API クライアントの生成
//! - サンプルの実行と結果（HTML または JSON）の出力
//! - ロギングの初期化（標準出力、または `--log-dir` 指定時は JSON ファイル）
//!
//! # 使用例
//!
//! ```text
//! # 利用可能なサンプルの一覧
//! dv360-samples list
//!
//! # パラメータなしのサンプルを実行
//! dv360-samples run list_partners
//!
//! # パラメータ付きで送信
//! dv360-samples run list_advertisers --param partner_id=1234567 --submit
//!
//! # ファイルアップロード付きで送信
//! dv360-samples run upload_creative_asset \
//!     --param advertiser_id=111 --file creative=./banner.png --submit
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dv360_samples::config::AppConfig;
use dv360_samples::example::{all_actions, create_example};
use dv360_samples::runner::ExampleRunner;
use dv360_samples::runner::context::{RequestContext, UploadedFile};
use dv360_samples::service::create_service;

/// コマンドライン引数
#[derive(Debug, Parser)]
#[command(name = "dv360-samples", about = "Display & Video 360 API サンプル実行ツール")]
struct Cli {
    /// 設定ファイル（TOML）のパス
    #[arg(long, default_value = "config/example.toml")]
    config: PathBuf,

    /// ログの出力先ディレクトリ（指定時は JSON 形式でファイルに出力）
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// サブコマンド
#[derive(Debug, Subcommand)]
enum Command {
    /// 利用可能なサンプルの一覧を表示
    List,

    /// サンプルを実行
    Run {
        /// サンプルを識別する action 文字列（例: list_advertisers）
        action: String,

        /// POST フィールド（NAME=VALUE、複数指定可）
        #[arg(long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,

        /// アップロードファイル（NAME=PATH、複数指定可）
        #[arg(long = "file", value_name = "NAME=PATH")]
        files: Vec<String>,

        /// 送信マーカーを立てる（フォーム送信をシミュレート）
        #[arg(long)]
        submit: bool,

        /// 結果を JSON 形式で出力
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // ロギング初期化（guard は main 終了までフラッシュを保持する）
    let _guard = match &cli.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "dv360-samples.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt().json().with_writer(writer).init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt().init();
            None
        }
    };

    match cli.command {
        Command::List => {
            for line in list_lines() {
                println!("{line}");
            }
            Ok(())
        }
        Command::Run {
            action,
            params,
            files,
            submit,
            json,
        } => run_action(&cli.config, &action, &params, &files, submit, json).await,
    }
}

/// `list` サブコマンドの出力行を組み立てる
///
/// 解決できない action は一覧から除外します（パニックはしません）。
fn list_lines() -> Vec<String> {
    all_actions()
        .into_iter()
        .filter_map(|action| {
            create_example(action).map(|example| format!("{action}\t{}", example.name()))
        })
        .collect()
}

/// `run` サブコマンドの本体
async fn run_action(
    config_path: &PathBuf,
    action: &str,
    params: &[String],
    files: &[String],
    submit: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let example = create_example(action)
        .ok_or_else(|| format!("未知の action です: {action}"))?;

    let config = AppConfig::from_file(config_path)?;
    let runner = ExampleRunner::new(create_service(config.api()));

    let request = build_request(action, params, files, submit)?;
    let outcome = runner.execute(example.as_ref(), &request).await;

    if json {
        println!("{}", outcome.to_json()?);
    } else {
        println!("{}", outcome.page.html());
    }

    Ok(())
}

/// コマンドライン引数からリクエストコンテキストを組み立てる
fn build_request(
    action: &str,
    params: &[String],
    files: &[String],
    submit: bool,
) -> Result<RequestContext, Box<dyn Error>> {
    let mut request = RequestContext::new().with_query("action", action);

    for param in params {
        let (name, value) = split_pair(param, "--param")?;
        request = request.with_post(name, value);
    }

    for file in files {
        let (name, path) = split_pair(file, "--file")?;
        let bytes = std::fs::read(path)?;
        let file_name = PathBuf::from(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        request = request.with_file(name, UploadedFile::new(file_name, bytes));
    }

    if submit {
        request = request.with_post("submit", "1");
    }

    Ok(request)
}

/// `NAME=VALUE` 形式の引数を分解する
fn split_pair<'a>(raw: &'a str, flag: &str) -> Result<(&'a str, &'a str), Box<dyn Error>> {
    raw.split_once('=')
        .ok_or_else(|| format!("{flag} は NAME=VALUE 形式で指定してください: {raw}").into())
}
