//! End-to-end rendering tests: clock state machine driving the text surface.

use hand_clock::glyph::{CELLS_PER_DIGIT, Symbol, digit_shape};
use hand_clock::text_surface::TextSurface;
use hand_clock::{Clock, ClockSurface, ClockTime, DigitPosition, Field, ManualTimeSource};

fn started_clock(time: ClockTime) -> (Clock<ManualTimeSource>, ManualTimeSource, TextSurface) {
    let source = ManualTimeSource::new(time);
    let mut clock = Clock::new(source.clone());
    let mut surface = TextSurface::new();
    clock.start(&mut surface);
    (clock, source, surface)
}

fn assert_shows_digit(surface: &TextSurface, field: Field, position: DigitPosition, digit: char) {
    let shape = digit_shape(digit).expect("decimal digit");
    for cell in 0..CELLS_PER_DIGIT {
        assert_eq!(
            surface.cell(field, position, cell),
            shape[cell].box_char(),
            "digit {digit} cell {cell}"
        );
    }
}

#[test]
fn test_start_renders_construction_time() {
    let (_, _, surface) = started_clock(ClockTime::from_hms(23, 45, 16));
    assert!(surface.is_built());
    assert_shows_digit(&surface, Field::Hours, DigitPosition::Tens, '2');
    assert_shows_digit(&surface, Field::Hours, DigitPosition::Units, '3');
    assert_shows_digit(&surface, Field::Minutes, DigitPosition::Tens, '4');
    assert_shows_digit(&surface, Field::Minutes, DigitPosition::Units, '5');
    assert_shows_digit(&surface, Field::Seconds, DigitPosition::Tens, '1');
    assert_shows_digit(&surface, Field::Seconds, DigitPosition::Units, '6');
}

#[test]
fn test_every_digit_renders_through_the_clock() {
    for digit in 0..10 {
        let time = ClockTime::from_hms(digit, digit * 5, digit);
        let (_, _, surface) = started_clock(time.clone());
        for field in Field::ALL {
            for position in DigitPosition::ALL {
                let expected = time.digit(field, position).expect("two digits");
                assert_shows_digit(&surface, field, position, expected);
            }
        }
    }
}

#[test]
fn test_seconds_rollover_updates_face() {
    let (mut clock, source, mut surface) = started_clock(ClockTime::from_hms(9, 59, 59));
    source.set(ClockTime::from_hms(10, 0, 0));
    assert!(clock.tick(&mut surface));
    assert_shows_digit(&surface, Field::Hours, DigitPosition::Tens, '1');
    assert_shows_digit(&surface, Field::Minutes, DigitPosition::Units, '0');
    assert_shows_digit(&surface, Field::Seconds, DigitPosition::Units, '0');
}

#[test]
fn test_paused_clock_keeps_face_until_resume() {
    let (mut clock, source, mut surface) = started_clock(ClockTime::from_hms(7, 30, 0));
    let frozen = surface.clone();

    clock.pause();
    for second in 1..=5 {
        source.set(ClockTime::from_hms(7, 30, second));
        assert!(!clock.tick(&mut surface));
    }
    assert_eq!(surface, frozen);

    assert!(clock.resume(&mut surface));
    assert_eq!(clock.current_time(), &ClockTime::from_hms(7, 30, 5));
    assert_shows_digit(&surface, Field::Seconds, DigitPosition::Units, '5');
}

#[test]
fn test_malformed_field_renders_blank_cells() {
    let (mut clock, source, mut surface) = started_clock(ClockTime::from_hms(1, 2, 3));
    source.set(ClockTime::new("1", "02", "03"));
    assert!(clock.tick(&mut surface));
    assert_shows_digit(&surface, Field::Hours, DigitPosition::Tens, '1');
    for cell in 0..CELLS_PER_DIGIT {
        assert_eq!(
            surface.cell(Field::Hours, DigitPosition::Units, cell),
            Symbol::Blank.box_char()
        );
    }
}

#[test]
fn test_rebuild_then_render_matches_fresh_surface() {
    let (_, _, mut surface) = started_clock(ClockTime::from_hms(12, 34, 56));
    let (_, _, fresh) = started_clock(ClockTime::from_hms(12, 34, 56));
    surface.build();
    hand_clock::surface::render_time(&mut surface, &ClockTime::from_hms(12, 34, 56));
    assert_eq!(surface, fresh);
}
