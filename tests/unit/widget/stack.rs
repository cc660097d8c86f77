use super::*;
use crate::{
    foundation::core::Rgba8Premul,
    widget::{box_widget::BoxWidget, sequence::Sequence},
};

fn solid(w: u32, h: u32, r: u8, g: u8, b: u8) -> WidgetBox {
    Box::new(BoxWidget::new(w, h, Rgba8Premul::opaque(r, g, b)))
}

fn cycle_of(n: usize) -> Sequence {
    Sequence::new((0..n).map(|_| solid(10, 10, 1, 2, 3)).collect())
}

#[test]
fn empty_stack_is_zero_sized_single_frame() {
    let s = Stack::default();
    assert_eq!(
        s.paint_bounds(Bounds::from_size(100, 100), FrameIndex(0)),
        Bounds::EMPTY
    );
    assert_eq!(s.frame_count(), 1);
    let img = s.paint(Bounds::from_size(100, 100), FrameIndex(0));
    assert_eq!(img.size(), (0, 0));
}

#[test]
fn single_child_bounds_match_child() {
    let s = Stack::new(vec![solid(20, 10, 255, 0, 0)]);
    assert_eq!(
        s.paint_bounds(Bounds::from_size(100, 100), FrameIndex(0)),
        Bounds::from_size(20, 10)
    );
    assert_eq!(s.frame_count(), 1);
}

#[test]
fn bounds_are_componentwise_max() {
    let s = Stack::new(vec![
        solid(50, 25, 145, 17, 17),
        solid(30, 15, 17, 145, 17),
        solid(4, 32, 17, 17, 145),
    ]);
    assert_eq!(
        s.paint_bounds(Bounds::from_size(100, 100), FrameIndex(0)),
        Bounds::from_size(50, 32)
    );
}

#[test]
fn bounds_never_exceed_available_space() {
    let s = Stack::new(vec![solid(200, 150, 255, 0, 0), solid(180, 120, 0, 255, 0)]);
    let fp = s.paint_bounds(Bounds::from_size(100, 80), FrameIndex(0));
    assert!(fp.width <= 100);
    assert!(fp.height <= 80);
    assert_eq!(s.paint(Bounds::from_size(100, 80), FrameIndex(0)).size(), (100, 80));
}

#[test]
fn frame_count_is_lcm_of_children() {
    let s = Stack::new(vec![]).push(cycle_of(2)).push(cycle_of(4));
    assert_eq!(s.frame_count(), 4);

    let s = Stack::new(vec![]).push(cycle_of(2)).push(cycle_of(3));
    assert_eq!(s.frame_count(), 6);
}

#[test]
fn later_children_draw_on_top() {
    let red = Rgba8Premul::opaque(255, 0, 0);
    let green = Rgba8Premul::opaque(0, 255, 0);
    let blue = Rgba8Premul::opaque(0, 0, 255);
    let s = Stack::new(vec![
        solid(30, 30, 255, 0, 0),
        solid(20, 20, 0, 255, 0),
        solid(10, 10, 0, 0, 255),
    ]);
    let img = s.paint(Bounds::from_size(100, 100), FrameIndex(0));
    assert_eq!(img.size(), (30, 30));
    assert_eq!(img.pixel(5, 5), Some(blue));
    assert_eq!(img.pixel(15, 15), Some(green));
    assert_eq!(img.pixel(25, 25), Some(red));
}

#[test]
fn translucent_children_blend_over_earlier_ones() {
    let s = Stack::new(vec![
        solid(2, 2, 0, 0, 255),
        Box::new(BoxWidget::new(
            2,
            2,
            Rgba8Premul::from_straight_rgba(255, 0, 0, 128),
        )),
    ]);
    let px = s
        .paint(Bounds::from_size(4, 4), FrameIndex(0))
        .pixel(0, 0)
        .unwrap();
    assert_eq!(px.a, 255);
    assert_eq!(px.r, 128);
    assert_eq!(px.b, 127);
}

#[test]
fn children_advance_through_their_own_cycles() {
    let red = Rgba8Premul::opaque(255, 0, 0);
    let green = Rgba8Premul::opaque(0, 255, 0);
    let two = Sequence::new(vec![solid(1, 1, 255, 0, 0), solid(1, 1, 0, 255, 0)]);
    let three = Sequence::new(vec![
        solid(1, 2, 255, 0, 0),
        solid(1, 2, 0, 255, 0),
        solid(1, 2, 255, 0, 0),
    ]);
    let s = Stack::new(vec![]).push(three).push(two);
    assert_eq!(s.frame_count(), 6);

    let avail = Bounds::from_size(4, 4);
    let top = |f: i64| s.paint(avail, FrameIndex(f)).pixel(0, 0).unwrap();
    let bottom = |f: i64| s.paint(avail, FrameIndex(f)).pixel(0, 1).unwrap();
    assert_eq!([top(0), top(1), top(2), top(3)], [red, green, red, green]);
    assert_eq!(
        [bottom(0), bottom(1), bottom(2), bottom(3), bottom(4)],
        [red, green, red, red, green]
    );
}
