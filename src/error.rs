use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillStdError {
    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("シートが見つかりません: {0}")]
    SheetNotFound(String),

    #[error("Excel読み込みエラー: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    #[error("YAML処理エラー: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SkillStdError>;
