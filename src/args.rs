// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};

use crate::{
    options::{ExportFormat, OutputFormat, TransformOp},
    parsers::parse_top_limit,
};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "textutils",
    version = crate::VERSION,
    about = "テキスト統計/変換ツール (文字数・単語数・頻度分析・エクスポート)"
)]
pub struct Args {
    #[command(flatten)]
    pub log: LogOptions,

    #[command(subcommand)]
    pub command: CommandArgs,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct LogOptions {
    /// ログを詳細にする (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CommandArgs {
    /// テキストの統計を表示
    Analyze(AnalyzeArgs),
    /// テキストをファイル (txt / json) にエクスポート
    Export(ExportArgs),
    /// テキストを変換して標準出力へ書き出す
    Transform(TransformArgs),
}

impl CommandArgs {
    pub fn source(&self) -> &InputOptions {
        match self {
            Self::Analyze(a) => &a.source,
            Self::Export(e) => &e.source,
            Self::Transform(t) => &t.source,
        }
    }
}

/// 入力元 (ファイル・標準入力・インライン文字列)
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct InputOptions {
    /// 入力ファイル (省略または "-" で標準入力)
    pub input: Option<PathBuf>,

    /// 入力ファイルの代わりに文字列を直接指定
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: InputOptions,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// 頻出単語を上位N件表示
    #[arg(long, default_value = "5", value_parser = parse_top_limit)]
    pub top: usize,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: InputOptions,

    /// エクスポート形式
    #[arg(long = "as", value_enum, default_value = "txt")]
    pub kind: ExportFormat,

    /// 出力先ディレクトリ
    #[arg(long, default_value = ".", conflicts_with = "stdout")]
    pub out_dir: PathBuf,

    /// ファイルではなく標準出力へ書き出す
    #[arg(long)]
    pub stdout: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct TransformArgs {
    /// 変換の種類
    #[arg(value_enum)]
    pub op: TransformOp,

    #[command(flatten)]
    pub source: InputOptions,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn analyze_defaults() {
        let args = Args::try_parse_from(["textutils", "analyze", "notes.txt"]).expect("parses");
        let CommandArgs::Analyze(analyze) = args.command else {
            panic!("expected analyze");
        };
        assert_eq!(analyze.format, OutputFormat::Table);
        assert_eq!(analyze.top, 5);
        assert_eq!(analyze.source.input, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn text_conflicts_with_input() {
        let res = Args::try_parse_from(["textutils", "analyze", "a.txt", "--text", "hi"]);
        assert!(res.is_err());
    }

    #[test]
    fn export_kind_uses_as_flag() {
        let args = Args::try_parse_from(["textutils", "export", "--text", "hi", "--as", "json", "--stdout"])
            .expect("parses");
        let CommandArgs::Export(export) = args.command else {
            panic!("expected export");
        };
        assert_eq!(export.kind, ExportFormat::Json);
        assert!(export.stdout);
    }

    #[test]
    fn stdout_conflicts_with_out_dir() {
        let res = Args::try_parse_from(["textutils", "export", "--text", "hi", "--stdout", "--out-dir", "x"]);
        assert!(res.is_err());
    }

    #[test]
    fn transform_takes_op_first() {
        let args = Args::try_parse_from(["textutils", "-vv", "transform", "upper", "-"]).expect("parses");
        assert_eq!(args.log.verbose, 2);
        let CommandArgs::Transform(t) = args.command else {
            panic!("expected transform");
        };
        assert_eq!(t.op, TransformOp::Upper);
        assert_eq!(t.source.input, Some(PathBuf::from("-")));
    }

    #[test]
    fn zero_top_is_rejected() {
        let res = Args::try_parse_from(["textutils", "analyze", "--top", "0"]);
        assert!(res.is_err());
    }
}
