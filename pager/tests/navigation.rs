mod helpers;

use pager::{primitives::*, store::*, *};

#[test]
fn first_page_then_next() -> anyhow::Result<()> {
    let paginator = helpers::paginator(20);
    let mut store = MemoryRequestStore::default();

    let variables = paginator.resolve_variables(store.current());
    assert_eq!(serde_json::to_value(&variables)?, serde_json::json!({ "first": 20 }));

    let page_info = helpers::first_page_info();
    let navigation = paginator.derive_navigation(Some(&page_info), store.current());
    assert!(navigation.can_go_next);
    assert!(!navigation.can_go_previous);

    assert!(navigation.on_next(&mut store));
    assert_eq!(store.current(), &PaginationRequest::after("c20"));
    assert_eq!(PaginationState::from(store.current()).to_string(), "FORWARD");

    let variables = paginator.resolve_variables(store.current());
    assert_eq!(
        serde_json::to_value(&variables)?,
        serde_json::json!({ "first": 20, "after": "c20" })
    );
    Ok(())
}

#[test]
fn first_page_then_previous() -> anyhow::Result<()> {
    let paginator = helpers::paginator(20);
    let mut store = MemoryRequestStore::default();

    let page_info = helpers::first_page_info();
    let navigation = paginator.derive_navigation(Some(&page_info), store.current());
    assert!(navigation.on_previous(&mut store));
    assert_eq!(store.current(), &PaginationRequest::before("c1"));

    let variables = paginator.resolve_variables(store.current());
    assert_eq!(
        serde_json::to_value(&variables)?,
        serde_json::json!({ "last": 20, "before": "c1" })
    );
    Ok(())
}

#[test]
fn navigation_through_the_url() -> anyhow::Result<()> {
    let paginator = helpers::paginator(20);
    let mut store = QueryStringStore::new("?sort=name&asc=true");

    let page_info = helpers::first_page_info();
    let navigation = paginator.derive_navigation(Some(&page_info), &store.request());
    navigation.on_next(&mut store);
    assert_eq!(store.query(), "sort=name&asc=true&after=c20");

    let page_info = PageInfo {
        start_cursor: Some(Cursor::from("c21")),
        end_cursor: Some(Cursor::from("c40")),
        has_next_page: true,
        has_previous_page: false,
    };
    let navigation = paginator.derive_navigation(Some(&page_info), &store.request());
    assert!(navigation.can_go_previous);
    navigation.on_previous(&mut store);
    assert_eq!(store.query(), "sort=name&asc=true&before=c21");
    assert_eq!(
        paginator.resolve_variables(&store.request()),
        PaginationVariables::Backward {
            last: helpers::page_size(20),
            before: Cursor::from("c21"),
        }
    );
    Ok(())
}

#[test]
fn unloaded_page_info_blocks_navigation() {
    let paginator = helpers::paginator(20);
    let mut store = MemoryRequestStore::new(PaginationRequest::after("c20"));

    let navigation = paginator.derive_navigation(None, store.current());
    assert!(!navigation.can_go_next);
    assert!(!navigation.can_go_previous);
    assert!(!navigation.on_next(&mut store));
    assert_eq!(store.replacements(), 0);
}

#[test]
fn paginator_rejects_invalid_config() {
    let config: PaginatorConfig =
        serde_json::from_str(r#"{ "page_size": 200, "max_page_size": 100 }"#).unwrap();
    assert!(matches!(
        Paginator::new(config),
        Err(PaginatorError::ConfigError(_))
    ));
}
