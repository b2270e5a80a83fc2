// src/args.rs
use crate::config::DEFAULT_ROOT;
use crate::parsers;
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rs_linecount",
    version = crate::VERSION,
    about = "Rust ソースファイルの行数/ファイル数の集計ツール"
)]
pub struct Args {
    /// 走査するルートディレクトリ
    #[arg(default_value = DEFAULT_ROOT, value_hint = ValueHint::DirPath, help_heading = "走査")]
    pub root: PathBuf,

    /// 対象とするファイル名の末尾 (複数可, 既定: .rs .rss)
    #[arg(
        short = 'e',
        long = "ext",
        value_name = "SUFFIX",
        value_parser = parsers::parse_suffix,
        help_heading = "走査"
    )]
    pub ext: Vec<String>,

    /// シンボリックリンクを辿る
    #[arg(short = 'L', long, help_heading = "走査")]
    pub follow: bool,

    /// 不正な UTF-8 を含むファイルを読み取りエラーとして扱う
    #[arg(long, help_heading = "デコード")]
    pub strict_utf8: bool,

    /// ログを詳細にする (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "ログ")]
    pub verbose: u8,
}
