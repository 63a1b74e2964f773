use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillstd")]
#[command(about = "宇宙スキル標準データ抽出・整合性検証ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Excelからスキルレベル定義を抽出してYAMLを出力
    Extract {
        /// 入力Excelファイル
        #[arg(default_value = "uchuskill2025.xlsx")]
        excel: PathBuf,

        /// 出力YAMLファイル
        #[arg(default_value = "skill_levels_fixed.yaml")]
        output: PathBuf,
    },

    /// ExcelとYAMLデータの整合性を検証
    Verify,
}
