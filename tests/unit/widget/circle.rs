use super::*;
use crate::widget::{box_widget::BoxWidget, sequence::Sequence};

fn red() -> Rgba8Premul {
    Rgba8Premul::opaque(255, 0, 0)
}

fn green() -> Rgba8Premul {
    Rgba8Premul::opaque(0, 255, 0)
}

#[test]
fn zero_diameter_is_rejected() {
    let err = Circle::new(0, red()).unwrap_err();
    assert!(err.to_string().contains("diameter"));
}

#[test]
fn no_child_bounds_are_the_diameter() {
    for d in [10u32, 20, 30, 50, 100] {
        let c = Circle::new(d, red()).unwrap();
        let fp = c.paint_bounds(Bounds::from_size(200, 200), FrameIndex(0));
        assert_eq!(fp, Bounds::from_size(d as i32, d as i32));
        assert_eq!(c.frame_count(), 1);

        let img = c.paint(Bounds::from_size(d as i32, d as i32), FrameIndex(0));
        assert_eq!(img.size(), (d, d));
    }
}

#[test]
fn bounds_ignore_child_size() {
    let c = Circle::new(30, red())
        .unwrap()
        .with_child(BoxWidget::new(10, 10, green()));
    assert_eq!(
        c.paint_bounds(Bounds::from_size(100, 100), FrameIndex(0)),
        Bounds::from_size(30, 30)
    );
    assert_eq!(c.frame_count(), 1);
}

#[test]
fn bounds_are_clamped_to_available_space() {
    let c = Circle::new(40, red()).unwrap();
    let fp = c.paint_bounds(Bounds::from_size(64, 32), FrameIndex(0));
    assert_eq!(fp, Bounds::from_size(40, 32));
    assert_eq!(c.paint(Bounds::from_size(64, 32), FrameIndex(0)).size(), (40, 32));
}

#[test]
fn frame_count_follows_animated_child() {
    let seq = Sequence::new(vec![
        Box::new(BoxWidget::new(5, 5, red())) as WidgetBox,
        Box::new(BoxWidget::new(5, 5, green())),
        Box::new(BoxWidget::new(5, 5, red())),
    ]);
    let c = Circle::new(20, red()).unwrap().with_child(seq);
    assert_eq!(c.frame_count(), 3);
}

#[test]
fn disc_is_filled_and_corners_are_transparent() {
    let c = Circle::new(20, red()).unwrap();
    let img = c.paint(Bounds::from_size(20, 20), FrameIndex(0));
    assert_eq!(img.pixel(10, 10), Some(red()));
    assert_eq!(img.pixel(0, 10), Some(red()));
    assert_eq!(img.pixel(0, 0), Some(Rgba8Premul::TRANSPARENT));
    assert_eq!(img.pixel(19, 19), Some(Rgba8Premul::TRANSPARENT));
}

#[test]
fn child_is_centered() {
    let c = Circle::new(30, red())
        .unwrap()
        .with_child(BoxWidget::new(10, 10, green()));
    let img = c.paint(Bounds::from_size(30, 30), FrameIndex(0));
    assert_eq!(img.size(), (30, 30));
    assert_eq!(img.pixel(10, 10), Some(green()));
    assert_eq!(img.pixel(19, 19), Some(green()));
    assert_eq!(img.pixel(9, 15), Some(red()));
    assert_eq!(img.pixel(20, 15), Some(red()));
}

#[test]
fn child_is_clipped_to_the_circle() {
    let c = Circle::new(16, red())
        .unwrap()
        .with_child(BoxWidget::new(100, 100, green()));
    let img = c.paint(Bounds::from_size(64, 32), FrameIndex(0));
    assert_eq!(img.pixel(8, 8), Some(green()));
    assert_eq!(img.pixel(0, 0), Some(Rgba8Premul::TRANSPARENT));
    assert_eq!(img.pixel(15, 0), Some(Rgba8Premul::TRANSPARENT));
}

#[test]
fn child_receives_the_circle_frame_index() {
    let seq = Sequence::new(vec![
        Box::new(BoxWidget::new(4, 4, red())) as WidgetBox,
        Box::new(BoxWidget::new(4, 4, green())),
    ]);
    let c = Circle::new(8, Rgba8Premul::TRANSPARENT)
        .unwrap()
        .with_child(seq);
    let avail = Bounds::from_size(8, 8);
    assert_eq!(c.paint(avail, FrameIndex(0)).pixel(4, 4), Some(red()));
    assert_eq!(c.paint(avail, FrameIndex(1)).pixel(4, 4), Some(green()));
}

#[test]
fn huge_diameter_only_paints_the_visible_footprint() {
    let c = Circle::new(100_000, red())
        .unwrap()
        .with_child(BoxWidget::new(100_000, 100_000, green()));
    let img = c.paint(Bounds::from_size(64, 32), FrameIndex(0));
    assert_eq!(img.size(), (64, 32));
    // Top-left corner of an enormous disc lies outside it; the child fills the square.
    assert_eq!(img.pixel(0, 0), Some(Rgba8Premul::TRANSPARENT));
    assert_eq!(img.pixel(63, 31), Some(Rgba8Premul::TRANSPARENT));

    let bare = Circle::new(100_000, red()).unwrap();
    let img = bare.paint(Bounds::from_size(64, 32), FrameIndex(0));
    assert_eq!(img.size(), (64, 32));
    assert!(img.data.iter().all(|&b| b == 0));
}

#[test]
fn clamped_paint_matches_the_top_left_of_the_full_disc() {
    let c = Circle::new(24, red())
        .unwrap()
        .with_child(BoxWidget::new(10, 6, green()));
    let full = c.paint(Bounds::from_size(24, 24), FrameIndex(0));
    let part = c.paint(Bounds::from_size(15, 11), FrameIndex(0));
    assert_eq!(part.size(), (15, 11));
    for y in 0..11 {
        for x in 0..15 {
            assert_eq!(part.pixel(x, y), full.pixel(x, y), "({x}, {y})");
        }
    }
    // The child straddles the clamped edge: (7..17, 9..15) in the full disc.
    assert_eq!(part.pixel(14, 10), Some(green()));
    assert_eq!(part.pixel(6, 10), Some(red()));
}
