use super::*;
use crate::foundation::error::PixmatrixError;

const AVAIL: Bounds = Bounds::from_size(64, 32);

#[test]
fn unknown_font_fails_with_name() {
    let err = Text::new("hi", "not-a-font").unwrap_err();
    assert!(matches!(err, PixmatrixError::FontNotFound(_)));
    assert!(err.to_string().contains("not-a-font"));
}

#[test]
fn font_names_are_case_sensitive() {
    assert!(Text::new("hi", "tb-8").is_ok());
    assert!(Text::new("hi", "TB-8").is_err());
}

#[test]
fn bounds_are_cell_width_times_chars() {
    let t = Text::new("Hello", "tb-8").unwrap();
    assert_eq!(
        t.paint_bounds(AVAIL, FrameIndex(0)),
        Bounds::from_size(5 * 6, 8)
    );
    assert_eq!(t.frame_count(), 1);
}

#[test]
fn spacing_is_added_between_cells_only() {
    let t = Text::new("abc", "tom-thumb").unwrap().spacing(2);
    assert_eq!(
        t.paint_bounds(AVAIL, FrameIndex(0)),
        Bounds::from_size(3 * 4 + 2 * 2, 6)
    );
}

#[test]
fn line_height_override_changes_height() {
    let t = Text::new("x", "6x10").unwrap().line_height(12);
    assert_eq!(
        t.paint_bounds(AVAIL, FrameIndex(0)),
        Bounds::from_size(6, 12)
    );
}

#[test]
fn empty_content_has_zero_width() {
    let t = Text::with_default_font("").unwrap();
    let fp = t.paint_bounds(AVAIL, FrameIndex(0));
    assert_eq!(fp.width, 0);
    assert!(t.paint(AVAIL, FrameIndex(0)).is_empty());
}

#[test]
fn long_text_is_clamped_to_available_width() {
    let t = Text::new("this line is far too long", "tb-8").unwrap();
    let frame = t.paint(AVAIL, FrameIndex(0));
    assert_eq!(frame.size(), (64, 8));
}

#[test]
fn paint_draws_glyph_pixels_in_color() {
    let red = Rgba8Premul::opaque(255, 0, 0);
    let t = Text::new("||", "5x8").unwrap().color(red);
    let frame = t.paint(AVAIL, FrameIndex(0));
    assert_eq!(frame.size(), (10, 8));
    // '|' lights column 2 of each 5-pixel cell on rows 0..7.
    assert_eq!(frame.pixel(2, 0), Some(red));
    assert_eq!(frame.pixel(7, 6), Some(red));
    assert_eq!(frame.pixel(2, 7), Some(Rgba8Premul::TRANSPARENT));
    assert_eq!(frame.pixel(0, 0), Some(Rgba8Premul::TRANSPARENT));
}

#[test]
fn offset_shifts_glyphs_down() {
    let t = Text::new("|", "5x8").unwrap().offset(1);
    let frame = t.paint(AVAIL, FrameIndex(0));
    assert_eq!(frame.pixel(2, 0), Some(Rgba8Premul::TRANSPARENT));
    assert_eq!(frame.pixel(2, 7), Some(Rgba8Premul::WHITE));
}
