mod common;

use autochart::analysis::{ClassifierConfig, ColumnClassifier};
use autochart::{classify_columns, normalize, Cell};
use common::{number_cells, raw_table, text_cells};

#[test]
fn test_placeholder_index_is_ignored() {
    let table = normalize(raw_table(vec![
        ("Unnamed: 0", number_cells(&[0.0, 1.0, 2.0])),
        ("Country", text_cells(&["A", "B", "C"])),
        ("GDP", number_cells(&[10.0, 20.0, 30.0])),
    ]));

    let result = classify_columns(&table);
    assert_eq!(result.label.as_deref(), Some("Country"));
    assert_eq!(result.values, vec!["GDP".to_string()]);
    assert!(result.is_chartable());
}

#[test]
fn test_only_sequential_column() {
    let table = normalize(raw_table(vec![(
        "Rank",
        number_cells(&[1.0, 2.0, 3.0, 4.0, 5.0]),
    )]));

    let result = classify_columns(&table);
    assert_eq!(result.label, None);
    assert!(result.values.is_empty());
    assert!(!result.is_chartable());
}

#[test]
fn test_sequential_column_never_takes_a_role() {
    // Numbers stored as text still form an index
    let table = normalize(raw_table(vec![
        ("No.", text_cells(&["1", "2", "3", "4"])),
        ("Name", text_cells(&["w", "x", "y", "z"])),
        ("Score", number_cells(&[3.5, 9.0, 1.0, 4.0])),
    ]));

    let result = classify_columns(&table);
    assert_eq!(result.label.as_deref(), Some("Name"));
    assert_eq!(result.values, vec!["Score".to_string()]);
}

#[test]
fn test_step_other_than_one_is_a_value() {
    let table = normalize(raw_table(vec![
        ("Year", number_cells(&[2000.0, 2005.0, 2010.0])),
        ("City", text_cells(&["a", "b", "c"])),
    ]));

    let result = classify_columns(&table);
    assert_eq!(result.values, vec!["Year".to_string()]);
}

#[test]
fn test_first_label_wins() {
    let table = normalize(raw_table(vec![
        ("Name", text_cells(&["a", "b", "c", "d"])),
        ("Capital", text_cells(&["p", "q", "r", "s"])),
        ("Area", number_cells(&[4.0, 8.0, 3.0, 7.0])),
    ]));

    let result = classify_columns(&table);
    assert_eq!(result.label.as_deref(), Some("Name"));
    assert_eq!(result.values, vec!["Area".to_string()]);
}

#[test]
fn test_low_uniqueness_is_not_a_label() {
    let table = normalize(raw_table(vec![
        ("Continent", text_cells(&["Asia", "Asia", "Asia", "Europe"])),
        ("Area", number_cells(&[4.0, 8.0, 3.0, 7.0])),
    ]));

    let result = classify_columns(&table);
    assert_eq!(result.label, None);
    assert_eq!(result.values, vec!["Area".to_string()]);
}

#[test]
fn test_half_numeric_counts_as_value() {
    let table = normalize(raw_table(vec![
        ("Team", text_cells(&["a", "b", "c", "d"])),
        (
            "Points",
            vec![
                Cell::from("12"),
                Cell::from("—"),
                Cell::Number(30.0),
                Cell::Missing,
            ],
        ),
    ]));

    let result = classify_columns(&table);
    assert_eq!(result.values, vec!["Points".to_string()]);
}

#[test]
fn test_multi_level_headers_are_flattened_first() {
    use autochart::{Column, Header, RawTable};

    let raw = RawTable::new(vec![
        Column::new(
            Header::from(&["Unnamed: 0_level_0", "Unnamed: 0_level_1"][..]),
            number_cells(&[0.0, 1.0]),
        ),
        Column::new(Header::from(&["Country", ""][..]), text_cells(&["A", "B"])),
        Column::new(
            Header::from(&["GDP", "2020"][..]),
            number_cells(&[10.0, 30.0]),
        ),
    ])
    .unwrap();

    let result = classify_columns(&normalize(raw));
    assert_eq!(result.label.as_deref(), Some("Country"));
    assert_eq!(result.values, vec!["GDP 2020".to_string()]);
}

#[test]
fn test_custom_thresholds() {
    let table = normalize(raw_table(vec![
        ("Team", text_cells(&["a", "b", "a", "c"])),
        (
            "Points",
            vec![
                Cell::from("12"),
                Cell::from("—"),
                Cell::Number(30.0),
                Cell::Missing,
            ],
        ),
    ]));

    let strict = ColumnClassifier::new(ClassifierConfig {
        numeric_ratio: 0.75,
        uniqueness_ratio: 0.25,
        ..ClassifierConfig::default()
    });
    let result = strict.classify(&table);

    // "Points" is no longer numeric enough; "Team" (3 of 4 distinct) is the
    // first unique-enough column
    assert!(result.values.is_empty());
    assert_eq!(result.label.as_deref(), Some("Team"));
}

#[test]
fn test_empty_table() {
    let table = normalize(raw_table(vec![("Country", vec![]), ("GDP", vec![])]));
    let result = classify_columns(&table);
    assert_eq!(result.label, None);
    assert!(result.values.is_empty());
}
