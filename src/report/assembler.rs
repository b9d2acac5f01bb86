//! Canonical report assembly.
//!
//! `assemble` is total: any survey shape, including a missing one, yields a
//! complete [`CanonicalReport`]. Both renderers consume only this structure,
//! so computed values cannot diverge between the markdown and PDF outputs.

use chrono::{Datelike, NaiveDate};

use crate::report::content::{ObservationBank, ReportContent};
use crate::report::scoring;
use crate::task::models::Survey;

pub const UNKNOWN_FIELD: &str = "—";
pub const NAME_PLACEHOLDER: &str = "[Имя]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildProfile {
    pub name: String,
    pub dob: String,
    pub gender: String,
    /// Age with Russian grammatical agreement, or `—` when unknown.
    pub age_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionScore {
    pub label: String,
    pub points: u32,
    pub max: u32,
}

/// The single renderer-agnostic report structure.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalReport {
    pub child: ChildProfile,
    pub bank: ObservationBank,
    pub scores: Vec<DimensionScore>,
    pub recommendations: Vec<String>,
    pub closing_note: String,
}

/// Builds the canonical report for one survey snapshot.
///
/// `today` is injected rather than read from the system clock so that
/// assembly stays a pure function of its inputs.
pub fn assemble(survey: &Survey, content: &ReportContent, today: NaiveDate) -> CanonicalReport {
    let per_question_max = content.frequency_scale.max_value();

    let scores = scoring::score(
        &survey.answers,
        &content.dimensions,
        &content.frequency_scale,
    )
    .into_iter()
    .zip(&content.dimensions)
    .map(|((label, points), dimension)| DimensionScore {
        label,
        points,
        max: dimension.questions.len() as u32 * per_question_max,
    })
    .collect();

    let child = ChildProfile {
        name: survey
            .child_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(NAME_PLACEHOLDER)
            .to_string(),
        dob: survey
            .child_dob
            .as_deref()
            .filter(|dob| !dob.is_empty())
            .unwrap_or(UNKNOWN_FIELD)
            .to_string(),
        gender: gender_text(survey.child_gender.as_deref()),
        age_text: age_text(survey.child_dob.as_deref(), today),
    };

    CanonicalReport {
        child,
        bank: content.bank.clone(),
        scores,
        recommendations: content.recommendations.clone(),
        closing_note: content.closing_note.clone(),
    }
}

pub fn gender_text(gender: Option<&str>) -> String {
    if gender == Some("male") {
        "Мужской".to_string()
    } else {
        "Женский".to_string()
    }
}

/// Age in whole years with the observed pluralization rule: 1 → «год»,
/// strictly between 1 and 5 → «года», everything else (0 and ≥5) → «лет».
pub fn age_text(dob: Option<&str>, today: NaiveDate) -> String {
    let Some(date) = dob.and_then(parse_dob) else {
        return UNKNOWN_FIELD.to_string();
    };

    let age = age_in_years(date, today);
    match age {
        1 => "1 год".to_string(),
        a if a > 1 && a < 5 => format!("{a} года"),
        a => format!("{a} лет"),
    }
}

fn parse_dob(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d.%m.%Y").ok()
}

fn age_in_years(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    let had_birthday_this_year = (today.month(), today.day()) >= (dob.month(), dob.day());
    if !had_birthday_this_year {
        age -= 1;
    }
    age
}
