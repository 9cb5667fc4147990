use egui::{Pos2, Vec2};
use gridsketch_core::{sketches, GridAlign, GridView};

#[test]
fn anchors_resolve_through_the_public_api() {
    let mut grid = GridView::new(640.0, 640.0, 10, 10).unwrap();

    let top_left = grid.add_anchor(1, 1, GridAlign::TopLeft, Vec2::ZERO);
    let bottom_right = grid.add_anchor(9, 9, GridAlign::BottomRight, Vec2::new(20.0, 10.0));
    grid.update_anchor_positions();

    assert_eq!(grid.position(top_left), Some(Pos2::new(64.0, 64.0)));
    assert_eq!(grid.position(bottom_right), Some(Pos2::new(556.0, 566.0)));
}

#[test]
fn resize_moves_every_registered_anchor() {
    let mut grid = GridView::new(640.0, 640.0, 10, 10).unwrap();
    let a = grid.add_anchor(5, 5, GridAlign::TopLeft, Vec2::ZERO);
    let b = grid.add_anchor(10, 10, GridAlign::BottomRight, Vec2::new(8.0, 8.0));
    grid.update_anchor_positions();

    grid.set_stage_width(1280.0).unwrap();
    grid.set_stage_height(320.0).unwrap();

    assert_eq!(grid.position(a), Some(Pos2::new(640.0, 160.0)));
    assert_eq!(grid.position(b), Some(Pos2::new(1272.0, 312.0)));
}

#[test]
fn every_dated_sketch_constructs() {
    for date in sketches::AVAILABLE {
        let sketch = sketches::create(date).unwrap();
        assert_eq!(&sketch.context().code, &format!("DESIGN SKETCH {date}"));
    }
}

#[test]
fn unknown_dates_are_rejected() {
    let err = sketches::create("19700101").unwrap_err();
    assert!(matches!(err, sketches::SketchError::UnknownDate(_)));
}
