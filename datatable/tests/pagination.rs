mod common;

use std::collections::HashSet;

use datatable::Pagination;

use common::{ids, many, people};

#[test]
fn test_second_page_of_three_rows() {
    let rows = people();
    let mut pagination = Pagination::new(2);
    pagination.set_page(1);

    let visible = pagination.visible(&rows);
    assert_eq!(ids(visible), vec!["3"]);
}

#[test]
fn test_pages_cover_every_row_once() {
    for (total, size) in [(0, 3), (1, 1), (10, 3), (12, 4), (25, 10), (7, 50)] {
        let rows = many(total);
        let mut pagination = Pagination::new(size);

        let mut seen = Vec::new();
        for page in 0..pagination.page_count(total) {
            pagination.set_page(page);
            seen.extend(ids(pagination.visible(&rows)));
        }

        assert_eq!(seen, ids(&rows), "total={} size={}", total, size);
        let unique: HashSet<_> = seen.iter().collect();
        assert_eq!(unique.len(), total);
    }
}

#[test]
fn test_page_size_change_resets_index() {
    let mut pagination = Pagination::new(2);
    pagination.set_page(2);

    pagination.set_page_size(5);

    assert_eq!(pagination.page_index(), 0);
    assert_eq!(pagination.page_size(), 5);
}

#[test]
fn test_page_size_change_resets_even_when_unchanged() {
    let mut pagination = Pagination::new(10);
    pagination.set_page(3);
    pagination.set_page_size(10);
    assert_eq!(pagination.page_index(), 0);
}

#[test]
fn test_navigation_stays_in_bounds() {
    let mut pagination = Pagination::new(10);

    assert!(!pagination.previous_page(25));
    assert!(pagination.next_page(25));
    assert!(pagination.next_page(25));
    assert!(!pagination.next_page(25));
    assert_eq!(pagination.page_index(), 2);
    assert!(!pagination.has_next(25));
    assert!(pagination.has_previous());

    pagination.first_page();
    assert_eq!(pagination.page_index(), 0);
    pagination.last_page(25);
    assert_eq!(pagination.page_index(), 2);
}

#[test]
fn test_page_info() {
    let mut pagination = Pagination::new(4);
    pagination.set_page(1);
    let info = pagination.page_info(10);

    assert_eq!(info.page_index, 1);
    assert_eq!(info.page_size, 4);
    assert_eq!(info.total_rows, 10);
    assert_eq!(info.page_count, 3);
}

#[test]
fn test_empty_dataset_has_one_empty_page() {
    let pagination = Pagination::new(10);
    assert_eq!(pagination.page_count(0), 1);
    assert!(pagination.window(0).is_empty());
}
