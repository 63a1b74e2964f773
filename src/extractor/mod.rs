//! スキルレベル抽出
//!
//! ④‐2スキルレベル一覧シートは1スキル=4行（評価軸ごとに1行）の
//! 固定ブロック構造を持つ。スキル番号とスキル名が揃った行をブロック
//! 先頭とみなし、評価軸の有無にかかわらず4行単位で読み進める。

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::sheet::{CarryForward, ExcelBook, Sheet, LEVEL_PLACEHOLDER, SHEET_SKILL_LEVELS};
use crate::types::{SkillLevel, SkillLevelDocument, SkillNumber};

/// データ開始行（1〜4行目はヘッダ）
pub const RUBRIC_START_ROW: u32 = 5;

/// 1スキルが占める行数（評価軸4行）
pub const ROWS_PER_SKILL: u32 = 4;

/// ④‐2シートを走査してスキルレベル定義を列挙するイテレータ
///
/// ブロック先頭にならない行（スキル番号かスキル名が空欄）は1行だけ
/// 進めて読み直し、ブロックを見つけたら必ず4行進める。途中の空行で
/// ストライドがずれない。
pub struct RubricScan<'a> {
    sheet: &'a Sheet,
    row: u32,
    max_row: u32,
    category: CarryForward,
    pending: std::vec::IntoIter<SkillLevel>,
}

impl<'a> RubricScan<'a> {
    pub fn new(sheet: &'a Sheet) -> Self {
        Self {
            sheet,
            row: RUBRIC_START_ROW,
            max_row: sheet.max_row(),
            category: CarryForward::new(),
            pending: Vec::new().into_iter(),
        }
    }

    /// ブロック先頭行から評価軸ごとのレコードを組み立てる
    ///
    /// 評価軸名（F列）が空欄の行はレコードを作らない。レベル説明
    /// （G〜K列）の空欄はプレースホルダーで埋める。
    fn read_block(&self, category: &str, number: &SkillNumber, name: &str) -> Vec<SkillLevel> {
        let mut records = Vec::new();

        for offset in 0..ROWS_PER_SKILL {
            let row = self.row + offset;
            let axis = self.sheet.cell(row, 6);
            if axis.is_empty() {
                continue;
            }

            let mut levels = BTreeMap::new();
            for level in 1..=5u8 {
                let cell = self.sheet.cell(row, 6 + u32::from(level)); // G=7 〜 K=11
                let desc = if cell.is_empty() {
                    LEVEL_PLACEHOLDER.to_string()
                } else {
                    cell.to_text()
                };
                levels.insert(level, desc);
            }

            records.push(SkillLevel {
                category: category.to_string(),
                skill_number: number.clone(),
                skill_name: name.to_string(),
                evaluation_axis: axis.to_text(),
                levels,
            });
        }

        records
    }
}

impl Iterator for RubricScan<'_> {
    type Item = SkillLevel;

    fn next(&mut self) -> Option<SkillLevel> {
        loop {
            if let Some(record) = self.pending.next() {
                return Some(record);
            }
            if self.row > self.max_row {
                return None;
            }

            // スキル番号（D列）とスキル名（E列）が揃う行がブロック先頭
            let number = self.sheet.cell(self.row, 4);
            let name = self.sheet.cell(self.row, 5);
            if number.is_empty() || name.is_empty() {
                self.row += 1;
                continue;
            }

            let category = self.category.apply(&self.sheet.cell(self.row, 2));
            let number = SkillNumber::from_cell(&number);
            let records = self.read_block(&category, &number, &name.to_text());

            self.row += ROWS_PER_SKILL;
            self.pending = records.into_iter();
        }
    }
}

/// ④‐2シートからスキルレベル定義を全件抽出する
pub fn extract_skill_levels(book: &ExcelBook) -> Result<Vec<SkillLevel>> {
    let sheet = book.sheet(SHEET_SKILL_LEVELS)?;
    Ok(RubricScan::new(sheet).collect())
}

/// 抽出コマンド本体。ExcelからスキルレベルをYAMLに書き出す
pub fn run(excel: &Path, output: &Path) -> Result<()> {
    println!("Excelファイルを読み込み中: {}", excel.display());
    let book = ExcelBook::open(excel)?;
    let skill_levels = extract_skill_levels(&book)?;

    println!("抽出したスキルレベル: {}件", skill_levels.len());

    println!("\n最初の2件:");
    for (i, record) in skill_levels.iter().take(2).enumerate() {
        println!("\n{}.", i + 1);
        println!("  スキル番号: {}", record.skill_number);
        println!("  スキル名: {}", record.skill_name);
        println!("  評価軸: {}", record.evaluation_axis);
        println!("  レベル数: {}", record.levels.len());
        if let Some(level1) = record.levels.get(&1) {
            let head: String = level1.chars().take(50).collect();
            println!("  レベル1: {}...", head);
        }
    }

    let document = SkillLevelDocument { skill_levels };
    let yaml = serde_yaml::to_string(&document)?;
    std::fs::write(output, yaml)?;

    println!("\n✅ 保存完了: {}", output.display());
    Ok(())
}
