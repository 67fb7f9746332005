use screen::display::{Adapter, Cursor, Event, EventSink, ScreenMode, TextScreen};

pub struct NullCursor;

impl Cursor for NullCursor {
    fn move_to(&mut self, _row: i32, _col: i32, _attr: Option<u8>, _width: Option<i32>) {}
    fn set_visibility(&mut self, _visible: bool) {}
    fn set_shape(&mut self, _from_line: i32, _to_line: i32) {}
    fn rebuild(&mut self) {}
}

pub struct NullSink;

impl EventSink for NullSink {
    fn submit(&mut self, _event: Event) {}
}

pub fn text_screen(width: i32, adapter: Adapter) -> TextScreen {
    TextScreen::new(
        ScreenMode::text(width),
        adapter,
        Box::new(NullCursor),
        Box::new(NullSink),
    )
}

pub fn type_str(screen: &mut TextScreen, text: &str) {
    for ch in text.chars() {
        screen.write_char(ch, false);
    }
}

pub fn row_text(screen: &TextScreen, row: i32) -> String {
    let page = screen.page(screen.apagenum());
    (1..=screen.mode().width)
        .map(|col| page.get_char(row, col))
        .collect()
}
