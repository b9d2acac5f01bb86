//! Static report content: frequency scale, scored dimensions, the qualitative
//! observation bank and parenting recommendations.
//!
//! Everything here is data, not logic. The renderers receive it through
//! [`ReportContent`], so swapping locale or methodology text never touches
//! renderer code. A JSON file with the same shape can replace the built-in
//! bank via `REPORT_CONTENT_PATH`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Ordinal answer scale: label to integer, higher = more frequent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyScale {
    pub levels: Vec<FrequencyLevel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyLevel {
    pub label: String,
    pub value: u32,
}

impl FrequencyScale {
    /// Integer value of a label; `None` for unrecognized labels.
    pub fn value_of(&self, label: &str) -> Option<u32> {
        self.levels
            .iter()
            .find(|level| level.label == label)
            .map(|level| level.value)
    }

    pub fn max_value(&self) -> u32 {
        self.levels.iter().map(|level| level.value).max().unwrap_or(0)
    }
}

/// One scored psychological scale and the question ids backing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub label: String,
    pub questions: Vec<String>,
}

/// Observation for one element of the home/tree/human triad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingObservation {
    pub label: String,
    pub features: String,
    pub conclusion: String,
}

/// Observation built from itemized notes (animal drawing, self-portrait).
/// Items may carry a «head — tail» structure used by the text renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemizedObservation {
    pub items: Vec<String>,
    pub conclusion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationBank {
    pub home: DrawingObservation,
    pub tree: DrawingObservation,
    pub human: DrawingObservation,
    pub triad_summary: String,
    pub animal: ItemizedObservation,
    pub self_portrait: ItemizedObservation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContent {
    pub frequency_scale: FrequencyScale,
    pub dimensions: Vec<Dimension>,
    pub bank: ObservationBank,
    pub recommendations: Vec<String>,
    pub closing_note: String,
}

impl ReportContent {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = fs::read_to_string(path)?;
        Ok(Self::from_json_str(&raw)?)
    }

    /// The built-in Russian content bank.
    pub fn builtin() -> Self {
        let questions = |prefix: &str, count: usize| -> Vec<String> {
            (1..=count).map(|n| format!("{prefix}_{n}")).collect()
        };

        Self {
            frequency_scale: FrequencyScale {
                levels: vec![
                    FrequencyLevel { label: "Очень редко".into(), value: 1 },
                    FrequencyLevel { label: "Редко".into(), value: 2 },
                    FrequencyLevel { label: "Иногда".into(), value: 3 },
                    FrequencyLevel { label: "Часто".into(), value: 4 },
                    FrequencyLevel { label: "Всегда".into(), value: 5 },
                ],
            },
            dimensions: vec![
                Dimension {
                    label: "Эмоциональная устойчивость".into(),
                    questions: questions("q1", 4),
                },
                Dimension {
                    label: "Социальная адаптация".into(),
                    questions: questions("q2", 4),
                },
                Dimension {
                    label: "Саморегуляция".into(),
                    questions: questions("q3", 4),
                },
                Dimension {
                    label: "Самооценка".into(),
                    questions: questions("q4", 4),
                },
                Dimension {
                    label: "Коммуникативность".into(),
                    questions: questions("q5", 5),
                },
            ],
            bank: ObservationBank {
                home: DrawingObservation {
                    label: "Дом".into(),
                    features: "Уютный, с окнами, дымом, забором".into(),
                    conclusion: "Потребность в безопасности, семья важна".into(),
                },
                tree: DrawingObservation {
                    label: "Дерево".into(),
                    features: "С корнями, пышная крона".into(),
                    conclusion: "Устойчивость, рост, жизненная энергия".into(),
                },
                human: DrawingObservation {
                    label: "Человек".into(),
                    features: "Маленький, руки прижаты, без эмоций".into(),
                    conclusion: "Скромность, неуверенность, сдержанность".into(),
                },
                triad_summary: "Ребёнок чувствует себя в семье защищённо, но может быть сдержан \
                                в выражении эмоций и чувствовать неуверенность в социальной среде."
                    .into(),
                animal: ItemizedObservation {
                    items: vec![
                        "Фантастическое или символическое существо (например, лиса с крыльями)"
                            .into(),
                        "Большие глаза, уши — важность наблюдения, осторожность".into(),
                        "Мирное выражение, сидячая поза — доброжелательность".into(),
                    ],
                    conclusion: "У ребёнка хорошо развито воображение, он склонен к рефлексии и \
                                 наблюдательности. Может сдерживать активные эмоции, предпочитая анализ."
                        .into(),
                },
                self_portrait: ItemizedObservation {
                    items: vec![
                        "Маленький — возможна заниженная самооценка".into(),
                        "Нейтральное или отсутствует — сдержанность".into(),
                        "Нет фона или вторичных образов — неуверенность в социуме".into(),
                    ],
                    conclusion: "Ребёнок ориентирован на внешнюю оценку, нуждается в поддержке, \
                                 особенно эмоциональной и словесной."
                        .into(),
                },
            },
            recommendations: vec![
                "Чаще хвалите ребёнка за конкретные действия, а не только за результат".into(),
                "Помогайте называть чувства: \"Ты расстроился, потому что...\"".into(),
                "Поддерживайте инициативу, даже если ребёнок ошибается".into(),
                "Создавайте спокойную и предсказуемую атмосферу дома".into(),
                "Поощряйте фантазию — сказки, рисунки, игры по ролям".into(),
            ],
            closing_note: "Отчёт составлен на основе проектных методик и наблюдений. Является \
                           ориентиром для мягкой поддержки ребёнка в развитии."
                .into(),
        }
    }
}
