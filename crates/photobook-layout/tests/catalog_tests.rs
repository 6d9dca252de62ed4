use photobook_layout::*;

const CATALOG_JSON: &str = r#"{
    "single": [
        { "id": "full", "grid": [[[1, 1]]] },
        { "id": "ragged", "grid": [[[1, 1], null], [null]] },
        { "id": "stacked", "grid": [[[1, 1], [1, 1]], [[2, 2], null], [null, null]] }
    ],
    "double": [
        { "id": "overflow", "grid": [[null, [2, 1]]] },
        { "id": "panorama", "grid": [[[2, 1], null]] }
    ]
}"#;

#[test]
fn test_builtin_catalog() {
    let load = LayoutCatalog::builtin();
    assert!(load.failures.is_empty());

    let catalog = load.catalog;
    assert_eq!(catalog.len(), 66);
    assert!(!catalog.is_empty());

    // Single pages come before spreads
    let kinds: Vec<_> = catalog.iter().map(|(kind, _)| kind).collect();
    assert_eq!(kinds[0], PageKind::Single);
    assert_eq!(kinds[58], PageKind::Spread);
}

#[test]
fn test_builtin_example_layout() {
    let catalog = LayoutCatalog::builtin().into_result().unwrap();
    let (kind, entry) = catalog.get("01d3e3eb-d872-498f-9914-732126469d7a").unwrap();

    assert_eq!(kind, PageKind::Single);
    assert_eq!(entry.grid.row_count(), 3);
    assert_eq!(entry.grid.column_count(), 2);
    assert_eq!(
        entry.grid.cell(GridPosition::new(1, 0)),
        Some(&Cell::span(2, 2))
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_json_catalog_reports_each_bad_layout() {
    let load = LayoutCatalog::from_json(CATALOG_JSON).unwrap();

    let ids: Vec<_> = load.catalog.iter().map(|(_, e)| e.id.as_str()).collect();
    assert_eq!(ids, vec!["full", "stacked", "panorama"]);

    let failed: Vec<_> = load.failures.iter().filter_map(|e| e.layout_id()).collect();
    assert_eq!(failed, vec!["ragged", "overflow"]);

    match &load.failures[1] {
        LayoutError::Layout { source, .. } => {
            assert!(matches!(
                **source,
                LayoutError::InvalidSpan { row: 0, col: 1, .. }
            ));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(load.into_result().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_json_catalog_syntax_error() {
    assert!(matches!(
        LayoutCatalog::from_json("{ \"single\": [ }"),
        Err(LayoutError::Json(_))
    ));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    tokio::fs::write(&path, CATALOG_JSON).await.unwrap();

    let load = LayoutCatalog::load(&path).await.unwrap();
    assert_eq!(load.catalog.single.len(), 2);
    assert_eq!(load.catalog.double.len(), 1);
    assert_eq!(load.failures.len(), 2);
}
