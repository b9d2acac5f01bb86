use child_report_server::report::content::ReportContent;

#[test]
fn test_builtin_bank_shape() {
    let content = ReportContent::builtin();

    let labels: Vec<&str> = content
        .dimensions
        .iter()
        .map(|d| d.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Эмоциональная устойчивость",
            "Социальная адаптация",
            "Саморегуляция",
            "Самооценка",
            "Коммуникативность",
        ]
    );

    let question_counts: Vec<usize> = content
        .dimensions
        .iter()
        .map(|d| d.questions.len())
        .collect();
    assert_eq!(question_counts, vec![4, 4, 4, 4, 5]);

    assert_eq!(content.dimensions[0].questions[0], "q1_1");
    assert_eq!(content.dimensions[4].questions[4], "q5_5");
}

#[test]
fn test_frequency_scale_mapping() {
    let scale = ReportContent::builtin().frequency_scale;
    assert_eq!(scale.value_of("Очень редко"), Some(1));
    assert_eq!(scale.value_of("Редко"), Some(2));
    assert_eq!(scale.value_of("Иногда"), Some(3));
    assert_eq!(scale.value_of("Часто"), Some(4));
    assert_eq!(scale.value_of("Всегда"), Some(5));
    assert_eq!(scale.value_of("Never"), None);
    assert_eq!(scale.max_value(), 5);
}

#[test]
fn test_bank_loadable_from_external_json() {
    // A serialized bank can serve as an external REPORT_CONTENT_PATH file
    // with swapped text, without touching renderer code.
    let mut content = ReportContent::builtin();
    content.bank.home.conclusion = "Custom conclusion".to_string();
    content.recommendations = vec!["One advice".to_string()];

    let json = serde_json::to_string_pretty(&content).unwrap();
    let reloaded = ReportContent::from_json_str(&json).unwrap();

    assert_eq!(reloaded.bank.home.conclusion, "Custom conclusion");
    assert_eq!(reloaded.recommendations, vec!["One advice".to_string()]);
    assert_eq!(reloaded.dimensions.len(), 5);
}
