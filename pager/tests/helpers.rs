#![allow(dead_code)]
use pager::{primitives::*, *};

pub fn page_size(n: u32) -> PageSize {
    PageSize::new(n).unwrap()
}

pub fn paginator(n: u32) -> Paginator {
    let config = PaginatorConfig::builder()
        .page_size(page_size(n))
        .build()
        .unwrap();
    Paginator::new(config).unwrap()
}

pub fn first_page_info() -> PageInfo {
    PageInfo {
        start_cursor: Some(Cursor::from("c1")),
        end_cursor: Some(Cursor::from("c20")),
        has_next_page: true,
        has_previous_page: false,
    }
}

pub fn products(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("product-{i}")).collect()
}
