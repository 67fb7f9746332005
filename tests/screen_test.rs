mod common;
use common::*;
use screen::display::Adapter;

#[test]
fn test_wrapped_logical_line() {
    let mut s = text_screen(80, Adapter::Ega);
    type_str(&mut s, &"X".repeat(85));
    assert!(s.wraps(1));
    assert_eq!(s.row_length(2), 5);
    assert_eq!(s.find_start_of_line(2), 1);
    assert_eq!(s.get_logical_line(2).len(), 85);
    // deleting at the wrap point pulls the continuation leftward
    s.set_pos(1, 80, true);
    s.delete_fullchar();
    assert_eq!(s.row_length(2), 4);
    assert_eq!(s.get_logical_line(1).len(), 84);
}

#[test]
fn test_editing_session() {
    let mut s = text_screen(80, Adapter::Ega);
    type_str(&mut s, "10 PRINT \"HELLO\"");
    s.set_pos(1, 4, true);
    s.insert_fullchars("LET A=1: ");
    assert_eq!(&row_text(&s, 1)[..25], "10 LET A=1: PRINT \"HELLO\"");
    // ESC clears the whole logical line
    s.clear_line(1, 1);
    assert_eq!(row_text(&s, 1).trim(), "");
    assert_eq!(s.row_length(1), 0);
}

#[test]
fn test_insert_grows_into_second_row() {
    let mut s = text_screen(80, Adapter::Ega);
    type_str(&mut s, &"A".repeat(79));
    s.set_pos(1, 1, true);
    s.insert_fullchars("BC");
    assert!(s.wraps(1));
    assert_eq!(row_text(&s, 2).trim(), "A");
    assert_eq!(s.get_logical_line(1).len(), 81);
    assert_eq!((s.current_row(), s.current_col()), (1, 3));
}

#[test]
fn test_scroll_preserves_bottom_bar() {
    let mut s = text_screen(80, Adapter::Ega);
    s.update_bar(&["LIST"]);
    s.show_bar(true).unwrap();
    for row in 1..=24 {
        s.set_pos(row, 1, true);
        type_str(&mut s, &format!("{}", row));
    }
    s.scroll(None);
    assert_eq!(row_text(&s, 1).trim(), "2");
    assert_eq!(row_text(&s, 23).trim(), "24");
    // the key bar row is outside the scroll area
    assert_eq!(s.page(0).get_char(25, 2), '1');
    assert_eq!(s.page(0).get_char(25, 3), 'L');
}

#[test]
fn test_word_wrap_carries_the_cursor() {
    let mut s = text_screen(40, Adapter::Ega);
    type_str(&mut s, &"Z".repeat(40));
    assert!(s.overflow());
    assert_eq!((s.current_row(), s.current_col()), (1, 40));
    type_str(&mut s, "!");
    assert!(!s.overflow());
    assert_eq!((s.current_row(), s.current_col()), (2, 2));
    assert_eq!(&row_text(&s, 2)[..1], "!");
}
