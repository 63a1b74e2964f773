//! skillstd-rust
//!
//! 内閣府「宇宙スキル標準」ワークブックのデータ抽出・整合性検証ツール

pub mod cli;
pub mod error;
pub mod extractor;
pub mod sheet;
pub mod types;
pub mod verifier;

pub use error::{Result, SkillStdError};
pub use sheet::{CellValue, ExcelBook, Sheet};
pub use types::{SkillLevel, SkillLevelDocument, SkillNumber, StandardData};
pub use verifier::Verifier;
