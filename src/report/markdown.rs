//! Markdown rendering of a [`CanonicalReport`].
//!
//! Output is a pure function of the report structure: identical input yields
//! byte-identical markdown.

use std::fmt::Write;

use crate::report::assembler::{CanonicalReport, DimensionScore};

pub const BAR_WIDTH: u32 = 10;
const BAR_FILLED: &str = "■";
const BAR_EMPTY: &str = "□";

/// Fixed-width score bar: filled units = round(points / max × width).
pub fn score_bar(score: &DimensionScore) -> String {
    let filled = if score.max == 0 {
        0
    } else {
        ((score.points as f64 / score.max as f64) * BAR_WIDTH as f64).round() as u32
    };
    let filled = filled.min(BAR_WIDTH);
    format!(
        "{}{}",
        BAR_FILLED.repeat(filled as usize),
        BAR_EMPTY.repeat((BAR_WIDTH - filled) as usize)
    )
}

/// Itemized observation line: «head — tail» becomes a bolded head with the
/// tail as explanation; items without the dash render as plain bullets.
fn push_item(md: &mut String, item: &str) {
    match item.split_once('—') {
        Some((head, tail)) => {
            let _ = writeln!(md, "* **{}**: {}", head.trim(), tail.trim());
        }
        None => {
            let _ = writeln!(md, "* {}", item.trim());
        }
    }
}

pub fn render(report: &CanonicalReport) -> String {
    let mut md = String::new();
    let child = &report.child;
    let bank = &report.bank;

    let _ = writeln!(md, "**Психологический отчёт о ребёнке {}**", child.age_text);
    md.push('\n');

    md.push_str("## 📚 Краткая сводка\n\n");
    let _ = writeln!(md, "* **Имя ребёнка:** {}", child.name);
    let _ = writeln!(md, "* **Дата рождения:** {}", child.dob);
    let _ = writeln!(md, "* **Пол:** {}", child.gender);
    md.push('\n');
    let _ = writeln!(md, "* **Главное качество (Дом):** {}", bank.home.conclusion);
    let _ = writeln!(md, "* **Основная черта (Животное):** {}", bank.animal.conclusion);
    let _ = writeln!(
        md,
        "* **Самооценка (автопортрет):** {}",
        bank.self_portrait.conclusion
    );
    md.push('\n');

    md.push_str("## 🔍 Развёрнутые разделы\n\n");
    md.push_str("### 1. Дом-Дерево-Человек: ключевые наблюдения\n\n");
    md.push_str("| Элемент | Особенности рисунка | Психологический вывод |\n");
    md.push_str("| ------- | -------------- | --------------------------- |\n");
    for element in [&bank.home, &bank.tree, &bank.human] {
        let _ = writeln!(
            md,
            "| {} | {} | {} |",
            element.label, element.features, element.conclusion
        );
    }
    let _ = writeln!(md, "\n**Общий вывод:** {}", bank.triad_summary);
    md.push('\n');

    md.push_str("### 2. Животное: детали и фантазия\n\n");
    for item in &bank.animal.items {
        push_item(&mut md, item);
    }
    let _ = writeln!(md, "\n**Вывод:** {}", bank.animal.conclusion);
    md.push('\n');

    md.push_str("### 3. Автопортрет: особенности самовосприятия\n\n");
    for item in &bank.self_portrait.items {
        push_item(&mut md, item);
    }
    let _ = writeln!(md, "\n**Вывод:** {}", bank.self_portrait.conclusion);
    md.push('\n');

    md.push_str("### 4. Опросник: суммарные баллы и профиль\n\n");
    md.push_str("| Шкала | Баллы |\n");
    md.push_str("| ----------- |:-----:|\n");
    for score in &report.scores {
        let _ = writeln!(md, "| {} | {} |", score.label, score.points);
    }
    md.push_str("\n#### Визуальный профиль:\n\n```\n");
    for score in &report.scores {
        let _ = writeln!(md, " ■ {} [{}]", score.label, score_bar(score));
    }
    md.push_str("```\n\n");

    md.push_str("## 📖 Рекомендации для родителей\n\n");
    for line in &report.recommendations {
        let _ = writeln!(md, "* {line}");
    }
    md.push_str("\n---\n\n");
    let _ = writeln!(md, "*{}*", report.closing_note);

    md
}
