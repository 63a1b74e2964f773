//! Excel側データの再導出
//!
//! 検証はYAMLと突き合わせる前に、各シートから同じ継承規則で
//! レコードを組み立て直す。①②⑥はキー列（D列またはC列）が
//! 埋まった行だけを数え、④‐2は抽出と同じ4行ストライドで走査する。

use std::collections::BTreeMap;

use crate::extractor::{ROWS_PER_SKILL, RUBRIC_START_ROW};
use crate::sheet::{CarryForward, Sheet, ROLE_PLACEHOLDER};
use crate::types::{Role, Skill, SkillNumber, Task};

/// データ開始行（①②③⑥共通。1〜3行目はヘッダ）
const DATA_START_ROW: u32 = 4;

/// キー列（D列）が埋まっている行数を数える
pub fn count_key_rows(sheet: &Sheet) -> usize {
    (DATA_START_ROW..=sheet.max_row())
        .filter(|&row| !sheet.cell(row, 4).is_empty())
        .count()
}

/// ①スキル一覧からスキルを読み出す（カテゴリは直前値を継承）
pub fn read_skills(sheet: &Sheet) -> Vec<Skill> {
    let mut skills = Vec::new();
    let mut category = CarryForward::new();

    for row in DATA_START_ROW..=sheet.max_row() {
        let number = sheet.cell(row, 4);
        if number.is_empty() {
            continue;
        }
        skills.push(Skill {
            category: category.apply(&sheet.cell(row, 2)),
            number: SkillNumber::from_cell(&number),
            name: sheet.cell(row, 5).to_text(),
            description: String::new(),
        });
    }
    skills
}

/// ②業務一覧から業務を読み出す（カテゴリ・サブカテゴリとも直前値を継承）
pub fn read_tasks(sheet: &Sheet) -> Vec<Task> {
    let mut tasks = Vec::new();
    let mut category = CarryForward::new();
    let mut subcategory = CarryForward::new();

    for row in DATA_START_ROW..=sheet.max_row() {
        let number = sheet.cell(row, 4);
        if number.is_empty() {
            continue;
        }
        let sub = subcategory.apply(&sheet.cell(row, 3));
        tasks.push(Task {
            category: category.apply(&sheet.cell(row, 2)),
            subcategory: (!sub.is_empty()).then_some(sub),
            number: SkillNumber::from_cell(&number),
            name: sheet.cell(row, 5).to_text(),
            description: String::new(),
        });
    }
    tasks
}

/// ④‐2スキルレベル一覧の評価軸行数を数える
///
/// 抽出と同じ4行ストライドで走査するが、ブロック判定はスキル番号のみ
/// （スキル名は見ない）
pub fn count_rubric_axes(sheet: &Sheet) -> usize {
    let mut count = 0;
    let mut row = RUBRIC_START_ROW;
    let max_row = sheet.max_row();

    while row <= max_row {
        if sheet.cell(row, 4).is_empty() {
            row += 1;
            continue;
        }
        for offset in 0..ROWS_PER_SKILL {
            if !sheet.cell(row + offset, 6).is_empty() {
                count += 1;
            }
        }
        row += ROWS_PER_SKILL;
    }
    count
}

/// ⑥ロール一覧からロールを読み出す
///
/// 番号（C列）とロール名（D列）が揃った行のみ。名前が「*」の行は
/// 未定義のプレースホルダーとして除外する
pub fn read_roles(sheet: &Sheet) -> Vec<Role> {
    let mut roles = Vec::new();
    let mut category = CarryForward::new();

    for row in DATA_START_ROW..=sheet.max_row() {
        let number = sheet.cell(row, 3);
        let name = sheet.cell(row, 4);
        if number.is_empty() || name.is_empty() {
            continue;
        }
        let name = name.to_text();
        if name == ROLE_PLACEHOLDER {
            continue;
        }
        roles.push(Role {
            category: category.apply(&sheet.cell(row, 2)),
            number: SkillNumber::from_cell(&number),
            name,
            description: String::new(),
        });
    }
    roles
}

/// ①スキル一覧のカテゴリ別件数（カテゴリは直前値を継承）
pub fn skills_by_category(sheet: &Sheet) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for skill in read_skills(sheet) {
        *counts.entry(skill.category).or_insert(0) += 1;
    }
    counts
}
