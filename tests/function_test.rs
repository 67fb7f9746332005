mod common;
use common::*;
use screen::display::Adapter;

#[test]
fn test_locate_statement() {
    let mut s = text_screen(80, Adapter::Ega);
    s.locate_(Some(10), Some(20), None, None, None).unwrap();
    assert_eq!((s.current_row(), s.current_col()), (10, 20));
    let err = s.locate_(Some(0), None, None, None, None).unwrap_err();
    assert_eq!(err.to_string(), "ILLEGAL FUNCTION CALL");
    // the failed call leaves the position alone
    assert_eq!((s.current_row(), s.current_col()), (10, 20));
}

#[test]
fn test_csrlin_and_pos() {
    let mut s = text_screen(80, Adapter::Ega);
    type_str(&mut s, "ABC");
    assert_eq!(s.csrlin_(), 1);
    assert_eq!(s.pos_(), 4);
    type_str(&mut s, &"D".repeat(77));
    // at the last column the pending wrap location is reported
    assert_eq!(s.csrlin_(), 2);
    assert_eq!(s.pos_(), 1);
}

#[test]
fn test_screen_function() {
    let mut s = text_screen(80, Adapter::Ega);
    type_str(&mut s, "OK");
    assert_eq!(s.screen_fn_(1, 1, None).unwrap(), 79);
    assert_eq!(s.screen_fn_(1, 2, None).unwrap(), 75);
    assert_eq!(s.screen_fn_(1, 3, None).unwrap(), 32);
    assert_eq!(s.screen_fn_(1, 1, Some(1)).unwrap(), 7);
    let err = s.screen_fn_(26, 1, None).unwrap_err();
    assert_eq!(err.to_string(), "ILLEGAL FUNCTION CALL");
}

#[test]
fn test_view_print_statement() {
    let mut s = text_screen(80, Adapter::Ega);
    s.view_print_(Some((10, 20))).unwrap();
    assert_eq!((s.current_row(), s.current_col()), (10, 1));
    s.set_pos(20, 80, false);
    s.write_char('A', false);
    s.write_char('B', false);
    // the wrap at the viewport bottom scrolls inside the viewport only
    assert_eq!((s.current_row(), s.current_col()), (20, 2));
    assert!(row_text(&s, 19).ends_with('A'));
    assert_eq!(&row_text(&s, 20)[..1], "B");
    assert_eq!(row_text(&s, 9).trim(), "");
    s.view_print_(None).unwrap();
    assert!(!s.scroll_area().active());
}

#[test]
fn test_key_bar_in_40_columns() {
    let mut s = text_screen(40, Adapter::Ega);
    s.update_bar(&["list", "run", "load\"", "save\"", "cont"]);
    s.show_bar(true).unwrap();
    // 40 columns show the first five key cells in full
    assert_eq!(s.page(0).get_char(25, 2), '1');
    assert_eq!(s.page(0).get_char(25, 3), 'l');
    assert_eq!(s.page(0).get_char(25, 34), '5');
    assert_eq!(s.page(0).get_char(25, 35), 'c');
    assert_eq!(s.row_length(25), 40);
}
