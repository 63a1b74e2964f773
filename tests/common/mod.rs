//! 統合テスト用フィクスチャ
//!
//! 本物のワークブックと同じレイアウトの小さなxlsxと、それに整合する
//! YAMLデータを生成する。レベル説明文は両者で同じ関数から作るので、
//! 抽出結果の期待値としてもそのまま使える。

use std::collections::BTreeMap;
use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};
use skillstd_rust::sheet::{
    AXIS_LABELS, LEVEL_PLACEHOLDER, ROLE_PLACEHOLDER, SHEET_DICTIONARY, SHEET_ROLES,
    SHEET_SKILLS, SHEET_SKILL_LEVELS, SHEET_TASKS,
};
use skillstd_rust::types::{DictionaryEntry, Role, Skill, SkillLevel, SkillNumber, Task};
use skillstd_rust::StandardData;

fn level_text(skill: &str, axis: &str, level: u8) -> String {
    format!("{}：{}のレベル{}", skill, axis, level)
}

fn level_map(skill: &str, axis: &str) -> BTreeMap<u8, String> {
    (1..=5).map(|n| (n, level_text(skill, axis, n))).collect()
}

fn rubric(category: &str, number: i64, name: &str, axis: &str) -> SkillLevel {
    SkillLevel {
        category: category.to_string(),
        skill_number: SkillNumber::Int(number),
        skill_name: name.to_string(),
        evaluation_axis: axis.to_string(),
        levels: level_map(name, axis),
    }
}

fn write_axis_row(
    sheet: &mut Worksheet,
    row: u32,
    axis: &str,
    levels: &[String; 5],
) -> anyhow::Result<()> {
    sheet.write_string(row, 5, axis)?;
    for (i, text) in levels.iter().enumerate() {
        if !text.is_empty() {
            sheet.write_string(row, 6 + i as u16, text)?;
        }
    }
    Ok(())
}

/// 本物と同じシート構成のワークブックを書き出す
///
/// スキル3件（カテゴリ2つ・結合セルあり）、業務3件、辞書2件、
/// スキルレベル2ブロック（4軸＋2軸、空欄レベル1箇所）、
/// ロール3件＋プレースホルダー行1件。
pub fn write_standard_workbook(path: &Path) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();

    // ①スキル一覧: 4行目から。カテゴリは先頭行のみ（結合セル相当）
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_SKILLS)?;
    sheet.write_string(3, 1, "データ利活用")?;
    sheet.write_number(3, 3, 1.0)?;
    sheet.write_string(3, 4, "データ分析基盤の構築")?;
    sheet.write_string(3, 5, "分析基盤を設計・構築するスキル")?;
    sheet.write_number(4, 3, 2.0)?;
    sheet.write_string(4, 4, "衛星データ解析")?;
    sheet.write_string(5, 1, "事業開発")?;
    sheet.write_number(5, 3, 3.0)?;
    sheet.write_string(5, 4, "宇宙ビジネス企画")?;

    // ②業務一覧: 大分類・小分類の2段カテゴリ
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_TASKS)?;
    sheet.write_string(3, 1, "企画")?;
    sheet.write_string(3, 2, "戦略")?;
    sheet.write_number(3, 3, 1.0)?;
    sheet.write_string(3, 4, "事業戦略の立案")?;
    sheet.write_number(4, 3, 2.0)?;
    sheet.write_string(4, 4, "市場調査")?;
    sheet.write_string(5, 1, "開発")?;
    sheet.write_string(5, 2, "設計")?;
    sheet.write_number(5, 3, 3.0)?;
    sheet.write_string(5, 4, "システム設計")?;

    // ③スキルディクショナリ: D列が埋まっている行を数える
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_DICTIONARY)?;
    sheet.write_string(3, 3, "事業戦略の立案")?;
    sheet.write_string(4, 3, "市場調査")?;

    // ④‐2スキルレベル一覧: 5行目から4行1ブロック
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_SKILL_LEVELS)?;
    sheet.write_string(4, 1, "データ利活用")?;
    sheet.write_number(4, 3, 1.0)?;
    sheet.write_string(4, 4, "データ分析基盤の構築")?;
    for (i, axis) in AXIS_LABELS.iter().enumerate() {
        let mut levels = [1u8, 2, 3, 4, 5].map(|n| level_text("データ分析基盤の構築", axis, n));
        if i == 1 {
            // 2軸目のレベル3を空欄にする（本物にも歯抜けがある）
            levels[2] = String::new();
        }
        write_axis_row(sheet, 4 + i as u32, axis, &levels)?;
    }
    sheet.write_number(8, 3, 2.0)?;
    sheet.write_string(8, 4, "衛星データ解析")?;
    for (i, axis) in AXIS_LABELS.iter().take(2).enumerate() {
        let levels = [1u8, 2, 3, 4, 5].map(|n| level_text("衛星データ解析", axis, n));
        write_axis_row(sheet, 8 + i as u32, axis, &levels)?;
    }

    // ⑥ロール一覧: 最後は名前が「*」のプレースホルダー行
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_ROLES)?;
    sheet.write_string(3, 1, "経営層")?;
    sheet.write_number(3, 2, 1.0)?;
    sheet.write_string(3, 3, "経営企画責任者")?;
    sheet.write_number(4, 2, 2.0)?;
    sheet.write_string(4, 3, "事業責任者")?;
    sheet.write_string(5, 1, "実務層")?;
    sheet.write_number(5, 2, 3.0)?;
    sheet.write_string(5, 3, "データエンジニア")?;
    sheet.write_number(6, 2, 4.0)?;
    sheet.write_string(6, 3, ROLE_PLACEHOLDER)?;

    workbook.save(path)?;
    Ok(())
}

/// write_standard_workbook() と完全に整合するYAML側データ
pub fn matching_data() -> StandardData {
    let mut skill_levels: Vec<SkillLevel> = AXIS_LABELS
        .iter()
        .map(|axis| rubric("データ利活用", 1, "データ分析基盤の構築", axis))
        .collect();
    skill_levels[1]
        .levels
        .insert(3, LEVEL_PLACEHOLDER.to_string());
    skill_levels.push(rubric("データ利活用", 2, "衛星データ解析", AXIS_LABELS[0]));
    skill_levels.push(rubric("データ利活用", 2, "衛星データ解析", AXIS_LABELS[1]));

    StandardData {
        skills: vec![
            Skill {
                category: "データ利活用".to_string(),
                number: SkillNumber::Int(1),
                name: "データ分析基盤の構築".to_string(),
                description: "分析基盤を設計・構築するスキル".to_string(),
            },
            Skill {
                category: "データ利活用".to_string(),
                number: SkillNumber::Int(2),
                name: "衛星データ解析".to_string(),
                description: String::new(),
            },
            Skill {
                category: "事業開発".to_string(),
                number: SkillNumber::Int(3),
                name: "宇宙ビジネス企画".to_string(),
                description: String::new(),
            },
        ],
        tasks: vec![
            Task {
                category: "企画".to_string(),
                subcategory: Some("戦略".to_string()),
                number: SkillNumber::Int(1),
                name: "事業戦略の立案".to_string(),
                description: String::new(),
            },
            Task {
                category: "企画".to_string(),
                subcategory: Some("戦略".to_string()),
                number: SkillNumber::Int(2),
                name: "市場調査".to_string(),
                description: String::new(),
            },
            Task {
                category: "開発".to_string(),
                subcategory: Some("設計".to_string()),
                number: SkillNumber::Int(3),
                name: "システム設計".to_string(),
                description: String::new(),
            },
        ],
        skill_dictionary: vec![
            DictionaryEntry {
                task_category: "企画".to_string(),
                task_name: "事業戦略の立案".to_string(),
                skill_name: "データ分析基盤の構築".to_string(),
            },
            DictionaryEntry {
                task_category: "企画".to_string(),
                task_name: "市場調査".to_string(),
                skill_name: "衛星データ解析".to_string(),
            },
        ],
        skill_levels,
        roles: vec![
            Role {
                category: "経営層".to_string(),
                number: SkillNumber::Int(1),
                name: "経営企画責任者".to_string(),
                description: String::new(),
            },
            Role {
                category: "経営層".to_string(),
                number: SkillNumber::Int(2),
                name: "事業責任者".to_string(),
                description: String::new(),
            },
            Role {
                category: "実務層".to_string(),
                number: SkillNumber::Int(3),
                name: "データエンジニア".to_string(),
                description: String::new(),
            },
            Role {
                category: String::new(),
                number: SkillNumber::Int(4),
                name: ROLE_PLACEHOLDER.to_string(),
                description: String::new(),
            },
        ],
    }
}
