mod common;

use datatable::{Selection, SelectionStatus};

use common::{Person, ids, people};

#[test]
fn test_toggle_all_selects_full_set() {
    let rows = people();
    let mut selection = Selection::new();

    selection.toggle_all(true, &rows);
    assert_eq!(selection.status(&rows), SelectionStatus::All);
    assert_eq!(selection.len(), 3);

    selection.toggle_all(false, &rows);
    assert_eq!(selection.status(&rows), SelectionStatus::None);
    assert!(selection.is_empty());
}

#[test]
fn test_deselect_one_after_select_all_is_some() {
    let rows = people();
    let mut selection = Selection::new();

    selection.toggle_all(true, &rows);
    assert!(!selection.toggle_one(rows[0].id.clone()));

    assert_eq!(selection.status(&rows), SelectionStatus::Some);
    assert!(selection.status(&rows).is_indeterminate());
}

#[test]
fn test_toggle_one_twice_restores() {
    let rows = people();
    let mut selection = Selection::new();
    selection.toggle_one("2".to_string());
    let before: Vec<_> = ids(selection.selected_rows(&rows));

    selection.toggle_one("3".to_string());
    selection.toggle_one("3".to_string());

    assert_eq!(ids(selection.selected_rows(&rows)), before);
}

#[test]
fn test_empty_row_set_is_none() {
    let rows: Vec<Person> = Vec::new();
    let mut selection = Selection::new();
    selection.toggle_all(true, &rows);
    assert_eq!(selection.status(&rows), SelectionStatus::None);
}

#[test]
fn test_status_ignores_stale_ids() {
    let rows = people();
    let mut selection = Selection::new();
    selection.toggle_all(true, &rows);

    // Row "3" disappears from the dataset without pruning.
    let remaining = rows[..2].to_vec();
    assert_eq!(selection.len(), 3);
    assert_eq!(selection.status(&remaining), SelectionStatus::All);

    // A stale id alone does not count as a selection.
    let mut stale = Selection::new();
    stale.toggle_one("99".to_string());
    assert_eq!(stale.status(&rows), SelectionStatus::None);
}

#[test]
fn test_prune_drops_missing_ids() {
    let rows = people();
    let mut selection = Selection::new();
    selection.toggle_all(true, &rows);

    let remaining = vec![rows[1].clone(), Person::new("4", "Dee")];
    assert_eq!(selection.prune(&remaining), 2);
    assert_eq!(ids(selection.selected_rows(&remaining)), vec!["2"]);
    assert_eq!(selection.status(&remaining), SelectionStatus::Some);
}

#[test]
fn test_selected_rows_follow_full_set_order() {
    let rows = people();
    let mut selection = Selection::new();
    selection.toggle_one("3".to_string());
    selection.toggle_one("1".to_string());

    assert_eq!(ids(selection.selected_rows(&rows)), vec!["1", "3"]);
}
