// src/options.rs
use clap::ValueEnum;
use textutils_domain::Transform;
use textutils_usecase::ExportKind;

/// レポートの表示形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Md,
}

/// エクスポート形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ExportFormat {
    /// 入力テキストをそのまま保存
    #[default]
    Txt,
    /// テキスト・統計・タイムスタンプを JSON で保存
    Json,
}

impl From<ExportFormat> for ExportKind {
    fn from(value: ExportFormat) -> Self {
        match value {
            ExportFormat::Txt => ExportKind::Text,
            ExportFormat::Json => ExportKind::Structured,
        }
    }
}

/// テキスト変換
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TransformOp {
    /// 大文字に変換
    Upper,
    /// 小文字に変換
    Lower,
    /// 空にする
    Clear,
}

impl From<TransformOp> for Transform {
    fn from(value: TransformOp) -> Self {
        match value {
            TransformOp::Upper => Transform::Uppercase,
            TransformOp::Lower => Transform::Lowercase,
            TransformOp::Clear => Transform::Clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_formats_map_to_kinds() {
        assert_eq!(ExportKind::from(ExportFormat::Txt), ExportKind::Text);
        assert_eq!(ExportKind::from(ExportFormat::Json), ExportKind::Structured);
    }

    #[test]
    fn transform_ops_map_to_domain() {
        assert_eq!(Transform::from(TransformOp::Upper), Transform::Uppercase);
        assert_eq!(Transform::from(TransformOp::Lower), Transform::Lowercase);
        assert_eq!(Transform::from(TransformOp::Clear), Transform::Clear);
    }
}
