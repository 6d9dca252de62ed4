use photobook_layout::template::{OutputPaths, render_page_entry, render_template_pages};
use photobook_layout::*;
use uuid::Uuid;

fn side_by_side() -> LayoutEntry {
    LayoutEntry::new(
        "side-by-side",
        Grid::from_raw(&[&[Some((1, 1)), Some((1, 1))]]).unwrap(),
    )
}

#[test]
fn test_spread_page_doubles_width() {
    let page = PageTemplate::build(
        &BookSize::SmallSquare,
        &side_by_side(),
        PageKind::Spread,
        &Margins::default(),
        &Gutters::default(),
    );

    assert!(page.is_spread());
    assert_eq!(page.page, PageDimensions::new(990.0, 495.0));
    assert_eq!(page.rectangles[1].x, 495.0);
    assert_eq!(page.preview_name(), "side-by-side_preview.png");
    assert_eq!(
        page.page_key("7x7-blurb", "clean"),
        "7x7-blurb_clean_side-by-side"
    );
}

#[test]
fn test_render_page_entry() {
    let page = PageTemplate::build(
        &BookSize::SmallSquare,
        &side_by_side(),
        PageKind::Single,
        &Margins::default(),
        &Gutters::new(0.0, 9.0),
    );
    let text = render_page_entry(&page, "7x7-blurb", "Clean Grid");

    assert!(text.contains("pageKey = \"7x7-blurb_clean-grid_side-by-side\""));
    assert!(text.contains("isSpread = false"));
    assert!(text.contains("pageWidth = 495"));
    assert!(text.contains("photoIndex = 1"));
    assert!(text.contains("photoIndex = 2"));
    assert!(text.contains("rightPad = 4.5"));
    assert!(text.contains("x = 247.5"));
    assert!(text.contains("dynamicCellAutoText = \"{{custom_token}}\""));
    assert!(text.contains("previewName = \"side-by-side_preview.png\""));

    // Slots stay in traversal order
    let first = text.find("photoIndex = 1").unwrap();
    let second = text.find("photoIndex = 2").unwrap();
    assert!(first < second);
}

#[test]
fn test_render_template_pages() {
    let book = BookSize::TradeBook6x9;
    let pages = vec![PageTemplate::build(
        &book,
        &side_by_side(),
        PageKind::Single,
        &Margins::default(),
        &Gutters::default(),
    )];
    let text = render_template_pages(&book, "Clean Grid", &pages, Uuid::nil());

    assert!(text.starts_with("pages = {\n"));
    assert!(text.contains("bookWidth = 441"));
    assert!(text.contains("bookHeight = 666"));
    assert!(text.contains("paperId = \"6x9-blurb\""));
    assert!(text.contains("styleName = \"clean-grid\""));
    assert!(text.contains("paperId = \"00000000-0000-0000-0000-000000000000\""));
    assert!(text.ends_with("}\n"));
}

#[test]
fn test_output_paths() {
    let paths = OutputPaths::new(
        std::path::Path::new("/out"),
        &BookSize::LargeSquare,
        "Clean Grid",
    );
    assert_eq!(
        paths.layout_style,
        std::path::Path::new("/out/13x11-blurb/clean-grid.lrtemplate")
    );
    assert_eq!(
        paths.template_pages,
        std::path::Path::new("/out/13x11-blurb/clean-grid/templatePages.lua")
    );
}

#[tokio::test]
async fn test_generate_builtin_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let options = TemplateOptions {
        book: BookSize::SmallSquare,
        margins: Margins::uniform(18.0),
        gutters: Gutters::uniform(9.0),
        ..Default::default()
    };

    let report = generate(dir.path(), &options, LayoutCatalog::builtin())
        .await
        .unwrap();

    assert!(report.is_success());
    assert!(report.degenerate.is_empty());
    assert_eq!(report.pages.len(), 66);
    assert_eq!(report.style_name, "Margin 18, gutter 9");

    assert!(report.paths.layout_style.is_file());
    assert!(report.paths.template_pages.is_file());
    for id in &report.pages {
        let preview = report.paths.style_dir.join(format!("{id}_preview.png"));
        assert!(preview.is_file(), "missing {}", preview.display());
    }

    let lua = tokio::fs::read_to_string(&report.paths.template_pages)
        .await
        .unwrap();
    assert_eq!(lua.matches("type = \"PDEContainer\"").count(), 66);
    assert_eq!(lua.matches("isSpread = true").count(), 8);

    let preview = image::open(
        report
            .paths
            .style_dir
            .join("cece3329-05d3-4847-8d9d-1966cabd4d1c_preview.png"),
    )
    .unwrap();
    // 990x495 spread scaled by 990 / 185
    assert_eq!(preview.width(), 185);
    assert!((92..=93).contains(&preview.height()));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_generate_keeps_going_past_bad_layouts() {
    let dir = tempfile::tempdir().unwrap();
    let load = LayoutCatalog::from_json(
        r#"{
            "single": [
                { "id": "good", "grid": [[[1, 1]]] },
                { "id": "bad", "grid": [[[3, 1], null]] }
            ]
        }"#,
    )
    .unwrap();

    let report = generate(dir.path(), &TemplateOptions::default(), load)
        .await
        .unwrap();

    assert!(!report.is_success());
    assert_eq!(report.pages, vec!["good".to_string()]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].layout_id(), Some("bad"));
    assert!(report.paths.style_dir.join("good_preview.png").is_file());
}

#[tokio::test]
async fn test_generate_rejects_invalid_options() {
    let dir = tempfile::tempdir().unwrap();
    let options = TemplateOptions {
        gutters: Gutters::new(-1.0, 0.0),
        ..Default::default()
    };

    let result = generate(dir.path(), &options, LayoutCatalog::builtin()).await;
    assert!(matches!(result, Err(LayoutError::Config(_))));
}
