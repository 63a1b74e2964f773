//! データ整合性検証
//!
//! 元のExcelワークブックと整備済みYAMLを突き合わせ、件数・番号・名前・
//! カテゴリ分布を検証する。検証は途中で打ち切らず、エラーと警告を
//! 積み上げて最後にサマリーを出す（エラーのみが合否に影響する）。

pub mod source;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::{Result, SkillStdError};
use crate::sheet::{
    ExcelBook, AXIS_LABELS, ROLE_PLACEHOLDER, SHEET_DICTIONARY, SHEET_ROLES, SHEET_SKILLS,
    SHEET_SKILL_LEVELS, SHEET_TASKS,
};
use crate::types::{Role, StandardData};

/// 検証対象の既定パス
const EXCEL_PATH: &str = "tmp/uchuskill2025.xlsx";
const EXCEL_FALLBACK: &str = "/tmp/uchuskill2025.xlsx";
const YAML_PATH: &str = "data/space_skill_standard_complete.yaml";
const DOWNLOAD_URL: &str = "https://www8.cao.go.jp/space/skill/uchuskill2025.xlsx";

/// 空カテゴリの表示名
const NO_CATEGORY: &str = "（カテゴリなし）";

/// ExcelとYAMLの突き合わせ検証器
pub struct Verifier {
    book: ExcelBook,
    data: StandardData,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Verifier {
    /// 読み込み済みのデータから構築する
    pub fn new(book: ExcelBook, data: StandardData) -> Self {
        Self {
            book,
            data,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// ExcelとYAMLを読み込んで構築する
    pub fn load(excel_path: &Path, yaml_path: &Path) -> Result<Self> {
        println!("データを読み込み中...");
        let book = ExcelBook::open(excel_path)?;

        if !yaml_path.exists() {
            return Err(SkillStdError::FileNotFound(
                yaml_path.display().to_string(),
            ));
        }
        let text = std::fs::read_to_string(yaml_path)?;
        let data: StandardData = serde_yaml::from_str(&text)?;

        println!("✓ データ読み込み完了\n");
        Ok(Self::new(book, data))
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// 全検証を実行して合否を返す（警告は合否に影響しない）
    pub fn run(&mut self) -> Result<bool> {
        self.verify_counts()?;
        self.verify_skills()?;
        self.verify_tasks()?;
        self.verify_skill_levels()?;
        self.verify_roles()?;
        self.verify_categories()?;
        Ok(self.print_summary())
    }

    /// 【1】シートごとの件数検証
    fn verify_counts(&mut self) -> Result<()> {
        print_section("【1. 件数検証】");

        let checks = [
            ("スキル", SHEET_SKILLS, self.data.skills.len()),
            ("業務", SHEET_TASKS, self.data.tasks.len()),
            (
                "スキルディクショナリ",
                SHEET_DICTIONARY,
                self.data.skill_dictionary.len(),
            ),
        ];

        for (name, sheet_name, yaml_count) in checks {
            let sheet = self.book.sheet(sheet_name)?;
            let excel_count = source::count_key_rows(sheet);
            self.check_count(name, excel_count, yaml_count);
        }

        // ロールはプレースホルダー行を除いてカウント
        let sheet = self.book.sheet(SHEET_ROLES)?;
        let excel_count = source::read_roles(sheet).len();
        let yaml_count = self
            .data
            .roles
            .iter()
            .filter(|role| role.name != ROLE_PLACEHOLDER)
            .count();
        self.check_count("ロール", excel_count, yaml_count);

        Ok(())
    }

    fn check_count(&mut self, name: &str, excel_count: usize, yaml_count: usize) {
        let matched = excel_count == yaml_count;
        println!("{}:", name);
        println!("  Excel: {:3}件", excel_count);
        println!("  YAML:  {:3}件", yaml_count);
        println!("  結果:  {}", if matched { "✓" } else { "✗" });

        if !matched {
            self.errors.push(format!(
                "{}の件数が一致しません (Excel: {}, YAML: {})",
                name, excel_count, yaml_count
            ));
        }
        println!();
    }

    /// 【2】スキルの番号・名前を位置どおしで照合
    fn verify_skills(&mut self) -> Result<()> {
        print_section("【2. スキルデータ検証】");

        let excel_skills = source::read_skills(self.book.sheet(SHEET_SKILLS)?);

        let mut mismatch_count = 0;
        for (i, (excel_skill, yaml_skill)) in
            excel_skills.iter().zip(&self.data.skills).enumerate()
        {
            if excel_skill.number != yaml_skill.number {
                self.errors.push(format!(
                    "スキル#{}: 番号不一致 (Excel: {}, YAML: {})",
                    i + 1,
                    excel_skill.number,
                    yaml_skill.number
                ));
                mismatch_count += 1;
            }
            if excel_skill.name != yaml_skill.name {
                self.errors
                    .push(format!("スキル#{}: 名前不一致", excel_skill.number));
                println!("  Excel: {}", excel_skill.name);
                println!("  YAML:  {}", yaml_skill.name);
                mismatch_count += 1;
            }
        }

        if mismatch_count == 0 {
            println!("✓ 全{}スキルの番号・名前が一致しています", excel_skills.len());
        } else {
            println!("✗ {}件の不一致が見つかりました", mismatch_count);
        }
        println!();
        Ok(())
    }

    /// 【3】業務の番号・名前を位置どおしで照合
    fn verify_tasks(&mut self) -> Result<()> {
        print_section("【3. 業務データ検証】");

        let excel_tasks = source::read_tasks(self.book.sheet(SHEET_TASKS)?);

        let mut mismatch_count = 0;
        for (i, (excel_task, yaml_task)) in
            excel_tasks.iter().zip(&self.data.tasks).enumerate()
        {
            if excel_task.number != yaml_task.number {
                self.errors.push(format!("業務#{}: 番号不一致", i + 1));
                mismatch_count += 1;
            }
            if excel_task.name != yaml_task.name {
                self.errors
                    .push(format!("業務#{}: 名前不一致", excel_task.number));
                mismatch_count += 1;
            }
        }

        if mismatch_count == 0 {
            println!("✓ 全{}業務の番号・名前が一致しています", excel_tasks.len());
        } else {
            println!("✗ {}件の不一致が見つかりました", mismatch_count);
        }
        println!();
        Ok(())
    }

    /// 【4】スキルレベル定義の件数と構造
    fn verify_skill_levels(&mut self) -> Result<()> {
        print_section("【4. スキルレベル定義検証】");

        let excel_count = source::count_rubric_axes(self.book.sheet(SHEET_SKILL_LEVELS)?);
        let yaml_count = self.data.skill_levels.len();

        println!("スキルレベル定義数:");
        println!("  Excel: {}件", excel_count);
        println!("  YAML:  {}件", yaml_count);

        if excel_count == yaml_count {
            println!("  結果:  ✓");
        } else {
            println!("  結果:  ✗");
            self.errors.push(format!(
                "スキルレベル定義数が異なります (差分: {}件)",
                excel_count.abs_diff(yaml_count)
            ));
        }

        // 先頭レコードの構造チェック
        if let Some(sample) = self.data.skill_levels.first() {
            println!("\nサンプル確認:");
            println!("  スキル番号: {}", sample.skill_number);
            println!("  スキル名: {}", sample.skill_name);
            println!("  評価軸: {}", sample.evaluation_axis);
            println!("  レベル数: {}段階", sample.levels.len());

            if !sample.skill_number.is_int() {
                self.errors
                    .push("skill_numberが整数型ではありません".to_string());
            }
            if sample.levels.len() != 5 {
                self.warnings
                    .push("一部のスキルレベルが5段階ではありません".to_string());
            }

            // レベル1の説明が評価軸名なら列ずれ（過去に発生した取り込み不具合）
            let level1 = sample.levels.get(&1).map(String::as_str).unwrap_or("");
            if AXIS_LABELS.contains(&level1) {
                self.errors.push(
                    "skill_levelsのデータ構造が不正です（フィールドがずれています）".to_string(),
                );
            }
        }
        println!();
        Ok(())
    }

    /// 【5】ロールの件数とカテゴリ分布
    fn verify_roles(&mut self) -> Result<()> {
        print_section("【5. ロールデータ検証】");

        let excel_roles = source::read_roles(self.book.sheet(SHEET_ROLES)?);
        let yaml_roles: Vec<&Role> = self
            .data
            .roles
            .iter()
            .filter(|role| role.name != ROLE_PLACEHOLDER)
            .collect();

        println!("ロール数:");
        println!("  Excel: {}件", excel_roles.len());
        println!("  YAML:  {}件", yaml_roles.len());

        let totals_match = excel_roles.len() == yaml_roles.len();
        if totals_match {
            println!("  結果:  ✓");
        } else {
            println!("  結果:  ✗");
            self.errors.push(format!(
                "ロール数が一致しません (Excel: {}, YAML: {})",
                excel_roles.len(),
                yaml_roles.len()
            ));
        }

        // カテゴリ別の集計（空カテゴリは（カテゴリなし）に寄せる）
        let mut excel_by_cat: BTreeMap<String, usize> = BTreeMap::new();
        for role in &excel_roles {
            *excel_by_cat.entry(role_category(&role.category)).or_insert(0) += 1;
        }
        let mut yaml_by_cat: BTreeMap<String, usize> = BTreeMap::new();
        for role in &yaml_roles {
            *yaml_by_cat.entry(role_category(&role.category)).or_insert(0) += 1;
        }

        println!("\nカテゴリ別ロール数:");
        let categories: BTreeSet<&String> =
            excel_by_cat.keys().chain(yaml_by_cat.keys()).collect();
        let mut all_match = true;

        for cat in categories {
            let excel_count = excel_by_cat.get(cat).copied().unwrap_or(0);
            let yaml_count = yaml_by_cat.get(cat).copied().unwrap_or(0);
            let matched = excel_count == yaml_count;

            if !matched {
                all_match = false;
                self.errors
                    .push(format!("ロールカテゴリ「{}」の件数が一致しません", cat));
            }
            println!(
                "  {:40}: Excel={:2}, YAML={:2} {}",
                display_name(cat, 40),
                excel_count,
                yaml_count,
                if matched { "✓" } else { "✗" }
            );
        }

        if all_match && totals_match {
            println!("\n✓ 全ロールの件数とカテゴリが一致しています");
        } else {
            println!("\n✗ 一部のロールで不一致があります");
        }
        println!();
        Ok(())
    }

    /// 【6】スキルのカテゴリ分布
    fn verify_categories(&mut self) -> Result<()> {
        print_section("【6. カテゴリ分類検証】");

        let excel_by_cat = source::skills_by_category(self.book.sheet(SHEET_SKILLS)?);

        let mut yaml_by_cat: BTreeMap<String, usize> = BTreeMap::new();
        for skill in &self.data.skills {
            *yaml_by_cat.entry(skill.category.clone()).or_insert(0) += 1;
        }

        println!("スキルカテゴリ別件数:");
        let categories: BTreeSet<&String> =
            excel_by_cat.keys().chain(yaml_by_cat.keys()).collect();
        let mut all_match = true;

        for cat in categories {
            let excel_count = excel_by_cat.get(cat).copied().unwrap_or(0);
            let yaml_count = yaml_by_cat.get(cat).copied().unwrap_or(0);
            let matched = excel_count == yaml_count;

            if !matched {
                all_match = false;
                self.errors
                    .push(format!("カテゴリ「{}」の件数が一致しません", cat));
            }
            println!(
                "  {:30}: Excel={:2}, YAML={:2} {}",
                display_name(cat, 30),
                excel_count,
                yaml_count,
                if matched { "✓" } else { "✗" }
            );
        }

        if all_match {
            println!("\n✓ 全カテゴリの件数が一致しています");
        } else {
            println!("\n✗ 一部のカテゴリで不一致があります");
        }
        println!();
        Ok(())
    }

    fn print_summary(&self) -> bool {
        print_section("【検証結果サマリー】");

        if self.errors.is_empty() && self.warnings.is_empty() {
            println!("✓ すべての検証項目に合格しました！");
            println!("  Excel と YAML のデータは完全に整合しています。");
        } else {
            if !self.errors.is_empty() {
                println!("✗ {}件のエラーが見つかりました:", self.errors.len());
                for error in &self.errors {
                    println!("  - {}", error);
                }
            }
            if !self.warnings.is_empty() {
                println!("\n⚠ {}件の警告があります:", self.warnings.len());
                for warning in &self.warnings {
                    println!("  - {}", warning);
                }
            }
        }

        println!("{}", "=".repeat(80));
        self.errors.is_empty()
    }
}

/// 検証コマンド本体。既定パスのExcelとYAMLを突き合わせる
pub fn run() -> Result<bool> {
    let excel = [EXCEL_PATH, EXCEL_FALLBACK]
        .into_iter()
        .map(Path::new)
        .find(|path| path.exists());

    let Some(excel) = excel else {
        println!("エラー: Excelファイルが見つかりません");
        println!("パス: {}", EXCEL_FALLBACK);
        println!("\n以下のコマンドでダウンロードしてください:");
        println!("  curl -L -o {} \"{}\"", EXCEL_FALLBACK, DOWNLOAD_URL);
        return Ok(false);
    };

    let yaml = Path::new(YAML_PATH);
    if !yaml.exists() {
        println!("エラー: YAMLファイルが見つかりません: {}", yaml.display());
        return Ok(false);
    }

    println!("{}", report_header(excel, yaml));
    println!();

    let mut verifier = Verifier::load(excel, yaml)?;
    verifier.run()
}

/// レポート冒頭のタイトルと検証対象パスのブロック
fn report_header(excel: &Path, yaml: &Path) -> String {
    let rule = "=".repeat(80);
    format!(
        "宇宙スキル標準データ整合性検証\n{}\nExcel: {}\nYAML:  {}\n{}",
        rule,
        excel.display(),
        yaml.display(),
        rule
    )
}

fn print_section(title: &str) {
    println!("{}", "=".repeat(80));
    println!("{}", title);
    println!("{}", "=".repeat(80));
}

/// 表示用にカテゴリ名を整形（改行を除去して先頭limit文字まで）
fn display_name(category: &str, limit: usize) -> String {
    category.replace('\n', " ").chars().take(limit).collect()
}

fn role_category(category: &str) -> String {
    if category.is_empty() {
        NO_CATEGORY.to_string()
    } else {
        category.to_string()
    }
}
