//! Tests for the paging contract.

use featws_core::pagination::{PAGE_SIZE_OPTIONS, PageSize, Pagination};

#[test]
fn option_set_matches_the_grid_offering() {
    let sizes: Vec<usize> = PAGE_SIZE_OPTIONS.iter().map(PageSize::as_usize).collect();
    assert_eq!(sizes, vec![5, 10, 25, 50, 100]);
    assert_eq!(PageSize::default(), PageSize::Ten);
}

#[test]
fn from_rows_only_accepts_offered_sizes() {
    assert_eq!(PageSize::from_rows(25), Some(PageSize::TwentyFive));
    assert_eq!(PageSize::from_rows(7), None);
}

#[test]
fn window_slices_the_current_page_and_clamps() {
    let mut paging = Pagination::new();
    paging.set_page_size(PageSize::Five);
    assert_eq!(paging.window(11), 0..5);
    paging.next_page();
    assert_eq!(paging.window(11), 5..10);
    paging.next_page();
    assert_eq!(paging.window(11), 10..11);
    paging.next_page();
    // Past the end: an empty window, never a panic.
    assert_eq!(paging.window(11), 11..11);
}

#[test]
fn page_size_change_returns_to_the_first_page() {
    let mut paging = Pagination::new();
    paging.go_to_page(3);
    paging.set_page_size(PageSize::TwentyFive);
    assert_eq!(paging.current_page(), 0);
}

#[test]
fn prev_page_saturates_at_zero() {
    let mut paging = Pagination::new();
    paging.prev_page();
    assert_eq!(paging.current_page(), 0);
}

#[test]
fn page_count_rounds_up_and_never_hits_zero() {
    let paging = Pagination::new();
    assert_eq!(paging.page_count(0), 1);
    assert_eq!(paging.page_count(10), 1);
    assert_eq!(paging.page_count(11), 2);
}
