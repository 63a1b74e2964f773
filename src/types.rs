//! データ型定義
//!
//! 整備済みYAML(space_skill_standard_complete.yaml)と抽出結果YAMLで
//! 共有される型。フィールドの宣言順がそのままYAMLの出力順になる。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sheet::CellValue;

/// スキル番号
///
/// 元データは整数だが、一部のシートに文字列番号（枝番など）が
/// 混在するため両方を保持する
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillNumber {
    Int(i64),
    Text(String),
}

impl SkillNumber {
    /// セル値から変換（数値は整数へ切り捨て、文字列はそのまま）
    pub fn from_cell(value: &CellValue) -> Self {
        match value {
            CellValue::Number(n) => SkillNumber::Int(*n as i64),
            CellValue::Text(s) => SkillNumber::Text(s.clone()),
            CellValue::Empty => SkillNumber::Text(String::new()),
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, SkillNumber::Int(_))
    }
}

impl Default for SkillNumber {
    fn default() -> Self {
        SkillNumber::Text(String::new())
    }
}

impl std::fmt::Display for SkillNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillNumber::Int(n) => write!(f, "{}", n),
            SkillNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

/// スキルレベル定義（④‐2シートの評価軸1行分）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillLevel {
    /// スキルカテゴリ（結合セルは直前の値を継承）
    pub category: String,
    pub skill_number: SkillNumber,
    pub skill_name: String,
    /// 評価軸名
    pub evaluation_axis: String,
    /// レベル1〜5の説明（空欄は「ー」）
    pub levels: BTreeMap<u8, String>,
}

/// スキル（①スキル一覧の1行）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub category: String,
    pub number: SkillNumber,
    pub name: String,
    pub description: String,
}

/// 業務（②業務一覧の1行）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub category: String,
    pub subcategory: Option<String>,
    pub number: SkillNumber,
    pub name: String,
    pub description: String,
}

/// スキルディクショナリ（③シートの1行）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryEntry {
    pub task_category: String,
    pub task_name: String,
    pub skill_name: String,
}

/// ロール（⑥ロール一覧の1行）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub category: String,
    pub number: SkillNumber,
    pub name: String,
    pub description: String,
}

/// 整備済みYAMLデータ全体
///
/// キーが欠けていても読み込めるようにし、欠落は件数検証で検出する
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardData {
    pub skills: Vec<Skill>,
    pub tasks: Vec<Task>,
    pub skill_dictionary: Vec<DictionaryEntry>,
    pub skill_levels: Vec<SkillLevel>,
    pub roles: Vec<Role>,
}

/// 抽出結果YAMLのルート（トップレベルキーはskill_levels）
#[derive(Debug, Serialize, Deserialize)]
pub struct SkillLevelDocument {
    pub skill_levels: Vec<SkillLevel>,
}
