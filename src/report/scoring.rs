//! Answer scoring: questionnaire answers to per-dimension point sums.

use std::collections::HashMap;

use crate::report::content::{Dimension, FrequencyScale};

/// Points for one dimension: the sum of mapped answer values over its backing
/// questions. Unanswered questions and unrecognized labels contribute 0, so
/// partial surveys degrade instead of failing.
pub fn score_dimension(
    answers: &HashMap<String, String>,
    dimension: &Dimension,
    scale: &FrequencyScale,
) -> u32 {
    dimension
        .questions
        .iter()
        .map(|question| {
            answers
                .get(question)
                .and_then(|label| scale.value_of(label))
                .unwrap_or(0)
        })
        .sum()
}

/// Scores every dimension in definition order.
pub fn score(
    answers: &HashMap<String, String>,
    dimensions: &[Dimension],
    scale: &FrequencyScale,
) -> Vec<(String, u32)> {
    dimensions
        .iter()
        .map(|dimension| (dimension.label.clone(), score_dimension(answers, dimension, scale)))
        .collect()
}
