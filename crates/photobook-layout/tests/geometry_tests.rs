use log::{Level, LevelFilter, Log, Metadata, Record};
use photobook_layout::*;
use std::cell::RefCell;
use std::sync::Once;

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

// Records go to a per-thread buffer so parallel tests don't see each other's logs
struct CaptureLogger;

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|captured| {
            captured
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT_LOGGER: Once = Once::new();

/// Run `f` and return the warnings it logged on this thread
fn warnings_from<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    INIT_LOGGER.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURED.with(|captured| captured.borrow_mut().clear());

    let value = f();
    let warnings = CAPTURED.with(|captured| {
        captured
            .borrow_mut()
            .drain(..)
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message)
            .collect()
    });
    (value, warnings)
}

/// Two small images on top, one image across the bottom two rows
fn example_grid() -> Grid {
    Grid::from_raw(&[
        &[Some((1, 1)), Some((1, 1))],
        &[Some((2, 2)), None],
        &[None, None],
    ])
    .unwrap()
}

#[test]
fn test_full_coverage() {
    let grid = Grid::from_raw(&[&[Some((1, 1))]]).unwrap();
    let rects = resolve(
        &grid,
        PageDimensions::new(693.0, 594.0),
        &Margins::default(),
        &Gutters::default(),
    );

    assert_eq!(rects.len(), 1);
    let rect = &rects[0];
    assert_eq!(rect.index, 1);
    assert_eq!((rect.x, rect.y), (0.0, 0.0));
    assert_eq!((rect.width, rect.height), (693.0, 594.0));
    assert_eq!(rect.padding, Padding::default());
}

#[test]
fn test_row_major_anchor_order() {
    let rects = resolve(
        &example_grid(),
        PageDimensions::new(200.0, 300.0),
        &Margins::default(),
        &Gutters::new(10.0, 20.0),
    );

    let anchors: Vec<_> = rects.iter().map(|r| (r.index, r.anchor)).collect();
    assert_eq!(
        anchors,
        vec![
            (1, GridPosition::new(0, 0)),
            (2, GridPosition::new(0, 1)),
            (3, GridPosition::new(1, 0)),
        ]
    );
}

#[test]
fn test_example_geometry() {
    let gutters = Gutters::new(10.0, 20.0);
    let rects = resolve(
        &example_grid(),
        PageDimensions::new(200.0, 300.0),
        &Margins::default(),
        &gutters,
    );
    let cell_height = 280.0 / 3.0;

    // Top left: interior edges on the right and bottom
    let top_left = &rects[0];
    assert_eq!(
        top_left.padding,
        Padding {
            top: 0.0,
            right: 10.0,
            bottom: 5.0,
            left: 0.0,
        }
    );
    assert_eq!(top_left.x, 0.0);
    assert_eq!(top_left.width, 100.0);
    assert_close(top_left.height, cell_height + 5.0);
    assert_close(top_left.top(), 300.0);

    // Top right: starts where the top left ends
    let top_right = &rects[1];
    assert_eq!(top_right.x, 100.0);
    assert_eq!(top_right.width, 100.0);
    assert_eq!(top_right.padding.left, 10.0);
    assert_eq!(top_right.padding.right, 0.0);

    // Bottom span: full width, flush with the bottom edge
    let bottom = &rects[2];
    assert_eq!(bottom.x, 0.0);
    assert_eq!(bottom.width, 200.0);
    assert_eq!(bottom.padding.top, 5.0);
    assert_eq!(bottom.padding.bottom, 0.0);
    assert_close(bottom.height, 2.0 * cell_height + 15.0);
    assert_close(bottom.y, 0.0);
}

#[test]
fn test_shared_gutter_is_split_evenly() {
    let gutters = Gutters::new(12.0, 16.0);
    let rects = resolve(
        &example_grid(),
        PageDimensions::new(500.0, 400.0),
        &Margins::uniform(25.0),
        &gutters,
    );
    let (left, right, bottom) = (&rects[0], &rects[1], &rects[2]);

    // Horizontal neighbours: raw boundaries touch, visual gap is the full gutter
    assert_close(left.right(), right.x);
    let visual_gap = (right.x + right.padding.left) - (left.right() - left.padding.right);
    assert_close(visual_gap, gutters.horizontal);

    // Vertical neighbours
    assert_close(left.y, bottom.top());
    let visual_gap = (left.y + left.padding.bottom) - (bottom.top() - bottom.padding.top);
    assert_close(visual_gap, gutters.vertical);
}

#[test]
fn test_boundary_flush() {
    let margins = Margins::new(10.0, 20.0, 30.0, 40.0);
    let page = PageDimensions::new(600.0, 500.0);
    let grid = Grid::from_raw(&[
        &[Some((3, 2)), None, None, Some((2, 3)), None],
        &[None, None, None, None, None],
        &[Some((2, 3)), None, None, None, None],
        &[None, None, Some((3, 2)), None, None],
        &[None, None, None, None, None],
    ])
    .unwrap();
    let rects = resolve(&grid, page, &margins, &Gutters::uniform(8.0));
    assert_eq!(rects.len(), 4);

    for rect in &rects {
        let span = grid.anchors().find(|a| a.pos == rect.anchor).unwrap();

        if span.pos.row == 0 {
            assert_eq!(rect.padding.top, 0.0);
            assert_close(rect.top(), page.height - margins.top);
        } else {
            assert_eq!(rect.padding.top, 4.0);
        }
        if span.last_row() == grid.row_count() - 1 {
            assert_eq!(rect.padding.bottom, 0.0);
            assert_close(rect.y, margins.bottom);
        } else {
            assert_eq!(rect.padding.bottom, 4.0);
        }
        if span.pos.col == 0 {
            assert_eq!(rect.padding.left, 0.0);
            assert_close(rect.x, margins.left);
        } else {
            assert_eq!(rect.padding.left, 4.0);
        }
        if span.last_col() == grid.column_count() - 1 {
            assert_eq!(rect.padding.right, 0.0);
            assert_close(rect.right(), page.width - margins.right);
        } else {
            assert_eq!(rect.padding.right, 4.0);
        }
    }
}

#[test]
fn test_empty_center_is_skipped() {
    let grid = Grid::from_raw(&[
        &[Some((3, 2)), None, None, Some((2, 3)), None],
        &[None, None, None, None, None],
        &[Some((2, 3)), None, None, None, None],
        &[None, None, Some((3, 2)), None, None],
        &[None, None, None, None, None],
    ])
    .unwrap();

    assert_eq!(grid.slot_count(), 4);
    assert_eq!(grid.occupied_cell_count(), 24);

    let center = GridPosition::new(2, 2);
    assert!(grid.anchors().all(|a| !a.covers(center)));
}

#[test]
fn test_resolve_is_idempotent() {
    let grid = example_grid();
    let page = PageDimensions::new(621.0, 810.0);
    let margins = Margins::new(18.0, 27.0, 36.0, 27.0);
    let gutters = Gutters::new(9.0, 9.0);

    let first = resolve(&grid, page, &margins, &gutters);
    let second = resolve(&grid, page, &margins, &gutters);
    assert_eq!(first, second);
}

#[test]
fn test_negative_geometry_is_not_fatal() {
    let page = PageDimensions::new(100.0, 100.0);
    let margins = Margins::new(70.0, 0.0, 70.0, 0.0);
    let rects = resolve(&example_grid(), page, &margins, &Gutters::uniform(4.0));

    assert_eq!(rects.len(), 3);
    assert!(rects.iter().all(|r| r.height < 0.0));
    assert!(rects.iter().all(PlacedRectangle::is_degenerate));
}

#[test]
fn test_negative_geometry_is_logged() {
    let page = PageDimensions::new(100.0, 100.0);
    let margins = Margins::new(70.0, 0.0, 70.0, 0.0);
    let (rects, warnings) =
        warnings_from(|| resolve(&example_grid(), page, &margins, &Gutters::uniform(4.0)));

    assert_eq!(rects.len(), 3);
    assert!(
        warnings
            .iter()
            .any(|w| w.starts_with("Negative geometry: cell size")),
        "{warnings:?}"
    );
    let slot_warnings = warnings
        .iter()
        .filter(|w| w.starts_with("Negative geometry: slot"))
        .count();
    assert_eq!(slot_warnings, 3, "{warnings:?}");
}

#[test]
fn test_positive_geometry_logs_no_warning() {
    let page = PageDimensions::new(621.0, 810.0);
    let (rects, warnings) = warnings_from(|| {
        resolve(&example_grid(), page, &Margins::uniform(18.0), &Gutters::uniform(9.0))
    });

    assert_eq!(rects.len(), 3);
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn test_covered_cell_gets_no_slot() {
    let grid = Grid::from_raw(&[&[Some((2, 1)), Some((1, 1))]]).unwrap();
    let rects = resolve(
        &grid,
        PageDimensions::new(200.0, 100.0),
        &Margins::default(),
        &Gutters::default(),
    );

    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].index, 1);
    assert_eq!(rects[0].anchor, GridPosition::new(0, 0));
    assert_eq!((rects[0].x, rects[0].width), (0.0, 200.0));
}

#[test]
fn test_covered_cell_does_not_shift_later_indices() {
    let grid = Grid::from_raw(&[
        &[Some((2, 1)), Some((1, 1))],
        &[Some((1, 1)), Some((1, 1))],
    ])
    .unwrap();
    let rects = resolve(
        &grid,
        PageDimensions::new(200.0, 200.0),
        &Margins::default(),
        &Gutters::default(),
    );

    let slots: Vec<_> = rects.iter().map(|r| (r.index, r.anchor)).collect();
    assert_eq!(
        slots,
        vec![
            (1, GridPosition::new(0, 0)),
            (2, GridPosition::new(1, 0)),
            (3, GridPosition::new(1, 1)),
        ]
    );
}

#[test]
fn test_builtin_catalog_partitions_cleanly() {
    let catalog = LayoutCatalog::builtin().into_result().unwrap();

    for (_, entry) in catalog.iter() {
        let grid = &entry.grid;
        let anchors: Vec<_> = grid.anchors().collect();
        let mut claimed = 0;

        for (row, col, _) in grid.cells() {
            let pos = GridPosition::new(row, col);
            let owners = anchors.iter().filter(|a| a.covers(pos)).count();
            assert!(owners <= 1, "layout {} cell {:?} claimed twice", entry.id, pos);
            claimed += owners;
        }

        assert_eq!(claimed, grid.occupied_cell_count(), "layout {}", entry.id);
        assert!(grid.covered_conflicts().is_empty(), "layout {}", entry.id);
    }
}

#[test]
fn test_builtin_catalog_resolves_on_every_book() {
    let catalog = LayoutCatalog::builtin().into_result().unwrap();
    let margins = Margins::uniform(18.0);
    let gutters = Gutters::uniform(9.0);

    for book in BookSize::STANDARD.iter() {
        for (kind, entry) in catalog.iter() {
            let page = PageTemplate::build(book, entry, kind, &margins, &gutters);
            assert_eq!(page.rectangles.len(), entry.grid.slot_count());
            assert!(!page.has_degenerate_slots(), "{} on {:?}", entry.id, book);

            let indices: Vec<_> = page.rectangles.iter().map(|r| r.index).collect();
            let expected: Vec<_> = (1..=entry.grid.slot_count()).collect();
            assert_eq!(indices, expected);
        }
    }
}
