//! 宇宙スキル標準ワークブックの読み込み
//!
//! calamineのRangeを1始まりの行・列番号で引ける薄いラッパーと、
//! 正規化済みセル値(CellValue)、結合セル向けのカテゴリ継承を提供する

use std::collections::HashMap;
use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};

use crate::error::{Result, SkillStdError};

// =============================================
// ワークブック固定レイアウト
// =============================================

/// スキル一覧シート
pub const SHEET_SKILLS: &str = "①スキル一覧";
/// 業務一覧シート
pub const SHEET_TASKS: &str = "②業務一覧";
/// スキルディクショナリシート
pub const SHEET_DICTIONARY: &str = "③スキルディクショナリ";
/// スキルレベル一覧シート
pub const SHEET_SKILL_LEVELS: &str = "④‐2スキルレベル一覧";
/// ロール一覧シート
pub const SHEET_ROLES: &str = "⑥ロール一覧";

/// 評価軸ラベル（④‐2シートの4行ブロックに対応）
pub const AXIS_LABELS: [&str; 4] = [
    "遂行可能な業務範囲・深さ",
    "業務遂行時の自立性",
    "資格・検定",
    "経験年数",
];

/// レベル説明の空欄に入れるプレースホルダー
pub const LEVEL_PLACEHOLDER: &str = "ー";

/// ロール一覧の未定義行を示すプレースホルダー
pub const ROLE_PLACEHOLDER: &str = "*";

// =============================================
// セル値
// =============================================

/// 正規化済みセル値
///
/// 文字列は前後の空白を除去し、空白だけのセルはEmptyに寄せる。
/// 真偽値は0/1、日時はシリアル値として数値に畳む。
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// 表示用文字列へ変換（i64に収まる整数値は小数点なしで整形）
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n)
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64 =>
            {
                format!("{}", *n as i64)
            }
            CellValue::Number(n) => n.to_string(),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(trimmed.to_string())
                }
            }
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::Error(_) => CellValue::Empty,
        }
    }
}

// =============================================
// シート・ワークブック
// =============================================

/// 1シート分のデータ
#[derive(Debug)]
pub struct Sheet {
    range: Range<Data>,
}

impl Sheet {
    pub fn new(range: Range<Data>) -> Self {
        Self { range }
    }

    /// セル値を取得（行・列とも1始まり。範囲外はEmpty）
    pub fn cell(&self, row: u32, col: u32) -> CellValue {
        if row == 0 || col == 0 {
            return CellValue::Empty;
        }
        self.range
            .get_value((row - 1, col - 1))
            .map(CellValue::from)
            .unwrap_or(CellValue::Empty)
    }

    /// データが存在する最終行（1始まり。空シートは0）
    pub fn max_row(&self) -> u32 {
        self.range.end().map(|(row, _)| row + 1).unwrap_or(0)
    }
}

/// ワークブック全体（全シート読み込み済み）
#[derive(Debug)]
pub struct ExcelBook {
    sheets: HashMap<String, Sheet>,
}

impl ExcelBook {
    /// xlsxファイルを開いて全シートを読み込む
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SkillStdError::FileNotFound(path.display().to_string()));
        }
        let mut workbook: Xlsx<_> = open_workbook(path)?;
        let sheets = workbook
            .worksheets()
            .into_iter()
            .map(|(name, range)| (name, Sheet::new(range)))
            .collect();
        Ok(Self { sheets })
    }

    /// メモリ上のRangeから構築
    pub fn from_ranges(ranges: Vec<(String, Range<Data>)>) -> Self {
        let sheets = ranges
            .into_iter()
            .map(|(name, range)| (name, Sheet::new(range)))
            .collect();
        Self { sheets }
    }

    pub fn sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .get(name)
            .ok_or_else(|| SkillStdError::SheetNotFound(name.to_string()))
    }
}

// =============================================
// カテゴリ継承
// =============================================

/// 結合セル由来の空欄に直前の非空白値を引き継ぐアキュムレータ
///
/// カテゴリ列はブロック先頭行にしか値が入っていないため、
/// 走査中はこのアキュムレータを通して現在値を得る
#[derive(Debug, Default)]
pub struct CarryForward {
    current: String,
}

impl CarryForward {
    pub fn new() -> Self {
        Self::default()
    }

    /// セル値を反映して現在値を返す（空欄なら直前値を維持）
    pub fn apply(&mut self, value: &CellValue) -> String {
        if !value.is_empty() {
            self.current = value.to_text();
        }
        self.current.clone()
    }
}

// =============================================
// テスト用シートビルダ
// =============================================
