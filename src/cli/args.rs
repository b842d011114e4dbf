// src/cli/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, ValueHint};

use super::{
    parsers::SelectionArg,
    value_enum::{CliCountMode, CliEncoding, CliOutputFormat},
};

#[derive(Parser, Debug)]
#[command(name = "livecount", version, about = "テキストの行数/単語数/文字数/バイト数を逐次集計するツール")]
pub struct Args {
    #[command(flatten)]
    pub counting: CountingOptions,

    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// 対象ファイル（省略時は標準入力）
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub files: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug, Default)]
pub struct CountingOptions {
    /// 空白文字の正規表現（単語の区切り）
    #[arg(long, value_name = "REGEX", help_heading = "集計")]
    pub white_space: Option<String>,

    /// 改行文字の正規表現（1 文字 = 1 行）
    #[arg(long, value_name = "REGEX", help_heading = "集計")]
    pub new_line: Option<String>,

    /// サイズ列に文字数とバイト数のどちらを出すか
    #[arg(long, value_enum, help_heading = "集計")]
    pub count: Option<CliCountMode>,

    /// バイト数を測るエンコーディング
    #[arg(long, value_enum, help_heading = "集計")]
    pub encoding: Option<CliEncoding>,

    /// 設定ファイル（JSON、yaml フィーチャ有効時は YAML も可）
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "集計")]
    pub config: Option<PathBuf>,

    /// 逐次更新のたびに全体を再集計して照合する
    #[arg(long, help_heading = "集計")]
    pub verify: bool,
}

#[derive(ClapArgs, Debug, Default)]
pub struct InputOptions {
    /// 選択範囲（文字オフセット A..B、複数可）
    #[arg(long = "select", value_name = "A..B", help_heading = "入力")]
    pub selections: Vec<SelectionArg>,

    /// 編集スクリプト（JSON Lines）を 1 ファイルに逐次適用する
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub edits: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Default)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "status", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 警告を表示しない（エラーは表示する）
    #[arg(long, short, help_heading = "出力")]
    pub quiet: bool,
}
