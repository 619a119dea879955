use datatable::{ConfigError, DEFAULT_PAGE_SIZE, SortDirection, SortState, TableConfig};

#[test]
fn test_defaults() {
    let config = TableConfig::default();
    assert!(config.sortable);
    assert!(!config.selectable);
    assert!(config.paginated);
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert!(config.rows_per_page_options.is_empty());
    assert_eq!(config.initial_sort, SortState::none());
}

#[test]
fn test_from_json_fills_missing_fields() {
    let config = TableConfig::from_json(r#"{ "selectable": true }"#).unwrap();
    assert!(config.selectable);
    assert!(config.sortable);
    assert_eq!(config.page_size, 10);
}

#[test]
fn test_from_json_full() {
    let config = TableConfig::from_json(
        r#"{
            "sortable": false,
            "paginated": true,
            "page_size": 25,
            "rows_per_page_options": [10, 25, 50],
            "initial_sort": { "order_by": "created_at", "direction": "desc" }
        }"#,
    )
    .unwrap();

    assert!(!config.sortable);
    assert_eq!(config.page_size, 25);
    assert_eq!(config.rows_per_page_options, vec![10, 25, 50]);
    assert_eq!(config.initial_sort.order_by.as_deref(), Some("created_at"));
    assert_eq!(config.initial_sort.direction, SortDirection::Desc);
}

#[test]
fn test_non_positive_page_size_clamps_to_one() {
    for json in [r#"{ "page_size": 0 }"#, r#"{ "page_size": -5 }"#] {
        let config = TableConfig::from_json(json).unwrap();
        assert_eq!(config.page_size, 1, "{}", json);
    }
    assert_eq!(TableConfig::default().with_page_size(0).page_size, 1);
}

#[test]
fn test_invalid_json_is_an_error() {
    let err = TableConfig::from_json(r#"{ "page_size": "lots" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid table config"));
}

#[test]
fn test_round_trips_through_serde() {
    let config = TableConfig::default()
        .with_selectable(true)
        .with_initial_sort(SortState::asc("name"));
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(TableConfig::from_json(&json).unwrap(), config);
}
