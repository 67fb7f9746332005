use super::{Adapter, BottomBar, Cursor, Event, EventSink, ScreenMode, ScrollArea, TextPage};
use crate::error;
use crate::lang::{range_check, throw_if, Error};
use log::trace;

type Result<T> = std::result::Result<T, Error>;

/// The text screen state machine.
///
/// Owns the cursor position, the overflow (deferred wrap) flag, the
/// scroll area and bottom bar, and the text pages; every cursor
/// movement, wrap, scroll, insert and delete algorithm lives here.
/// Character storage is delegated to the active [`TextPage`], cursor
/// rendering and clipboard events to the injected collaborators.
pub struct TextScreen {
    mode: ScreenMode,
    tandy_text: bool,
    cursor: Box<dyn Cursor>,
    events: Box<dyn EventSink>,
    current_row: i32,
    current_col: i32,
    /// True when logically at column width+1 but not yet wrapped.
    overflow: bool,
    scroll_area: ScrollArea,
    /// One-shot escape permitting writes on the last physical row.
    bottom_row_allowed: bool,
    bottom_bar: BottomBar,
    attr: u8,
    vpagenum: usize,
    apagenum: usize,
    pages: Vec<TextPage>,
}

impl TextScreen {
    /// A text screen with a single page in the given mode.
    pub fn new(
        mode: ScreenMode,
        adapter: Adapter,
        cursor: Box<dyn Cursor>,
        events: Box<dyn EventSink>,
    ) -> TextScreen {
        let mut screen = TextScreen {
            mode,
            tandy_text: adapter.tandy_text(),
            cursor,
            events,
            current_row: 1,
            current_col: 1,
            overflow: false,
            scroll_area: ScrollArea::new(&mode),
            bottom_row_allowed: false,
            bottom_bar: BottomBar::new(),
            attr: 7,
            vpagenum: 0,
            apagenum: 0,
            pages: Vec::new(),
        };
        let page = TextPage::new(mode.width, mode.height);
        screen.init_mode(mode, vec![page], 7, 0, 0);
        screen
    }

    /// Reset the text screen for a new video mode.
    pub fn init_mode(
        &mut self,
        mode: ScreenMode,
        pages: Vec<TextPage>,
        attr: u8,
        vpagenum: usize,
        apagenum: usize,
    ) {
        trace!("init mode {}x{}, {} pages", mode.width, mode.height, pages.len());
        debug_assert!(!pages.is_empty());
        debug_assert!(vpagenum < pages.len() && apagenum < pages.len());
        self.mode = mode;
        self.attr = attr;
        self.vpagenum = vpagenum;
        self.apagenum = apagenum;
        self.pages = pages;
        self.overflow = false;
        self.bottom_row_allowed = false;
        self.redraw_bar();
        self.scroll_area.init_mode(&self.mode);
        let top = self.scroll_area.top();
        self.set_pos(top, 1, true);
    }

    /// Set visible and active page.
    pub fn set_page(&mut self, vpagenum: usize, apagenum: usize) -> Result<()> {
        if vpagenum >= self.pages.len() || apagenum >= self.pages.len() {
            return Err(error!(IllegalFunctionCall; "PAGE NUMBER"));
        }
        self.vpagenum = vpagenum;
        self.apagenum = apagenum;
        Ok(())
    }

    pub fn set_attr(&mut self, attr: u8) {
        self.attr = attr;
    }

    pub fn attr(&self) -> u8 {
        self.attr
    }

    pub fn mode(&self) -> &ScreenMode {
        &self.mode
    }

    pub fn current_row(&self) -> i32 {
        self.current_row
    }

    pub fn current_col(&self) -> i32 {
        self.current_col
    }

    pub fn overflow(&self) -> bool {
        self.overflow
    }

    pub fn scroll_area(&self) -> &ScrollArea {
        &self.scroll_area
    }

    pub fn bottom_bar(&self) -> &BottomBar {
        &self.bottom_bar
    }

    pub fn apagenum(&self) -> usize {
        self.apagenum
    }

    pub fn vpagenum(&self) -> usize {
        self.vpagenum
    }

    pub fn page(&self, pagenum: usize) -> &TextPage {
        &self.pages[pagenum]
    }

    fn apage(&self) -> &TextPage {
        &self.pages[self.apagenum]
    }

    fn apage_mut(&mut self) -> &mut TextPage {
        &mut self.pages[self.apagenum]
    }

    /// Resubmit cursor state to the interface after a rebuild.
    pub fn rebuild(&mut self) {
        self.cursor.rebuild();
    }

    ///////////////////////////////////////////////////////////////////
    // basic text buffer operations

    /// Put one character at the current position.
    pub fn write_char(&mut self, ch: char, do_scroll_down: bool) {
        // a pending overflow advances the cursor without a redraw
        if self.overflow {
            self.current_col += 1;
            self.overflow = false;
        }
        self.check_wrap(do_scroll_down);
        self.check_pos(true);
        let (row, col, attr) = (self.current_row, self.current_col, self.attr);
        self.apage_mut().put_char_attr(row, col, ch, attr, true);
        // on the last column, only move the cursor to the next row
        // once a further character is printed
        if self.current_col < self.mode.width {
            self.current_col += 1;
        } else {
            self.overflow = true;
        }
        self.check_pos(true);
    }

    fn check_wrap(&mut self, do_scroll_down: bool) {
        if self.current_col > self.mode.width {
            if self.current_row < self.mode.height {
                if do_scroll_down && self.current_row < self.scroll_area.bottom() {
                    // make space by shifting the next rows down
                    self.scroll_down(self.current_row + 1);
                }
                self.set_wrap(self.current_row, true);
                self.move_cursor(self.current_row + 1, 1);
            } else {
                self.current_col = self.mode.width;
            }
        }
    }

    /// Connect or disconnect rows on the active page by line wrap.
    pub fn set_wrap(&mut self, row: i32, wrap: bool) {
        self.apage_mut().set_wrap(row, wrap);
    }

    /// The given row is connected by line wrap.
    pub fn wraps(&self, row: i32) -> bool {
        self.apage().wraps(row)
    }

    pub fn set_row_length(&mut self, row: i32, length: i32) {
        self.apage_mut().set_row_length(row, length);
    }

    pub fn row_length(&self, row: i32) -> i32 {
        self.apage().row_length(row)
    }

    ///////////////////////////////////////////////////////////////////
    // cursor position

    /// Advance the position by one character width.
    pub fn incr_pos(&mut self) {
        // on a trail cell, step just one to the right
        let step = self.apage().get_charwidth(self.current_row, self.current_col).max(1);
        self.set_pos(self.current_row, self.current_col + step, false);
    }

    /// Retreat the position by one character width.
    pub fn decr_pos(&mut self) {
        // previous cell a trail: two to the left; a lead: three
        let step = match self.apage().get_charwidth(self.current_row, self.current_col - 1) {
            0 => 2,
            2 => 3,
            _ => 1,
        };
        self.set_pos(self.current_row, self.current_col - step, false);
    }

    /// Jump to the end of the logical line, following wraps (END).
    pub fn move_to_end(&mut self) {
        let row = self.apage().find_end_of_line(self.current_row);
        let length = self.row_length(row);
        if length == self.mode.width {
            self.set_pos(row, length, true);
            self.overflow = true;
        } else {
            self.set_pos(row, length + 1, true);
        }
    }

    /// Set the current position; boundary corrections may move it.
    pub fn set_pos(&mut self, to_row: i32, to_col: i32, scroll_ok: bool) {
        self.overflow = false;
        self.current_row = to_row;
        self.current_col = to_col;
        self.check_pos(scroll_ok);
    }

    /// Pull the position back on screen after a mutation; wraps the
    /// column first so a carry takes part in the row clamp or scroll
    /// that follows. Returns whether the position survived unchanged.
    pub fn check_pos(&mut self, scroll_ok: bool) -> bool {
        let (oldrow, oldcol) = (self.current_row, self.current_col);
        if self.bottom_row_allowed {
            if self.current_row == self.mode.height {
                self.current_col = self.current_col.min(self.mode.width);
                if self.current_col < 1 {
                    self.current_col += 1;
                }
                let (row, col) = (self.current_row, self.current_col);
                self.move_cursor(row, col);
                return self.current_col == oldcol;
            } else {
                // one-shot: the escape ends the first time the cursor
                // is checked while off the bottom row
                self.bottom_row_allowed = false;
            }
        }
        // move to the next row?
        if self.current_col > self.mode.width {
            if self.current_row < self.scroll_area.bottom() || scroll_ok {
                self.current_col -= self.mode.width;
                self.current_row += 1;
            } else {
                // can't scroll, so stop at the right border
                self.current_col = self.mode.width;
            }
        } else if self.current_col < 1 {
            if self.current_row > self.scroll_area.top() {
                self.current_col += self.mode.width;
                self.current_row -= 1;
            } else {
                self.current_col = 1;
            }
        }
        // scroll?
        if self.current_row > self.scroll_area.bottom() {
            if scroll_ok {
                self.scroll(None);
            }
            self.current_row = self.scroll_area.bottom();
        } else if self.current_row < self.scroll_area.top() {
            self.current_row = self.scroll_area.top();
        }
        let (row, col) = (self.current_row, self.current_col);
        self.move_cursor(row, col);
        self.current_row == oldrow && self.current_col == oldcol
    }

    fn move_cursor(&mut self, row: i32, col: i32) {
        self.current_row = row;
        self.current_col = col;
        if self.mode.is_text_mode {
            // adopt the width and attribute of the new location
            let width = self.apage().get_charwidth(row, col);
            let attr = self.apage().get_attr(row, col);
            self.cursor.move_to(row, col, Some(attr), Some(width));
        } else {
            self.cursor.move_to(row, col, None, None);
        }
    }

    ///////////////////////////////////////////////////////////////////
    // clearing the screen

    /// Clear the scroll area.
    pub fn clear_view(&mut self) {
        let (top, bottom) = self.scroll_area.bounds();
        self.clear_area(top, bottom);
    }

    /// Clear the whole screen.
    pub fn clear(&mut self) {
        let height = self.mode.height;
        self.clear_area(1, height);
    }

    fn clear_area(&mut self, top: i32, bottom: i32) {
        let attr_save = self.attr;
        if !self.tandy_text {
            // keep the background, set the foreground to 7
            self.attr = attr_save & 0x70 | 0x7;
        }
        let attr = self.attr;
        self.apage_mut().clear_rows(top, bottom, attr);
        self.set_pos(top, 1, true);
        self.attr = attr_save;
    }

    ///////////////////////////////////////////////////////////////////
    // scrolling

    /// Scroll the scroll region up by one row, starting at `from_row`.
    pub fn scroll(&mut self, from_row: Option<i32>) {
        let from_row = match from_row {
            Some(row) => row,
            None => self.scroll_area.top(),
        };
        trace!("scroll up from row {}", from_row);
        let (bottom, attr) = (self.scroll_area.bottom(), self.attr);
        self.apage_mut().scroll_up(from_row, bottom, attr);
        if self.current_row > from_row {
            let (row, col) = (self.current_row - 1, self.current_col);
            self.move_cursor(row, col);
        }
    }

    /// Scroll the scroll region down by one row, starting at `from_row`.
    pub fn scroll_down(&mut self, from_row: i32) {
        trace!("scroll down from row {}", from_row);
        let (bottom, attr) = (self.scroll_area.bottom(), self.attr);
        self.apage_mut().scroll_down(from_row, bottom, attr);
        if self.current_row >= from_row {
            let (row, col) = (self.current_row + 1, self.current_col);
            self.move_cursor(row, col);
        }
    }

    ///////////////////////////////////////////////////////////////////
    // console operations

    /// First row of the logical line that includes the given row.
    pub fn find_start_of_line(&self, row: i32) -> i32 {
        self.apage().find_start_of_line(row)
    }

    /// Contents of the logical line, as bytes.
    pub fn get_logical_line(&self, from_row: i32) -> Vec<u8> {
        let start_row = self.apage().find_start_of_line(from_row);
        let stop_row = self.apage().find_end_of_line(from_row);
        self.apage().get_text_bytes(start_row, stop_row).concat()
    }

    // delete

    /// Delete the half- or fullwidth character at the current position.
    pub fn delete_fullchar(&mut self) {
        let width = self.apage().get_charwidth(self.current_row, self.current_col);
        // halfwidth: delete once; lead cell: twice; trail cell: nothing
        if width > 0 {
            self.delete_at(self.current_row, self.current_col, false);
        }
        if width == 2 {
            self.delete_at(self.current_row, self.current_col, false);
        }
    }

    // Delete one halfwidth cell, reflowing the rest of the logical
    // line leftward. One row is handled per iteration, so the loop is
    // bounded by the screen height; the nested call in the soft-return
    // case cannot reach the nested branch again.
    fn delete_at(&mut self, row: i32, col: i32, remove_depleted: bool) {
        let mut row = row;
        let mut col = col;
        let mut remove_depleted = remove_depleted;
        loop {
            let attr = self.attr;
            if !self.wraps(row) {
                // plain row: nothing to do past the logical end
                if col > self.row_length(row) {
                    return;
                }
                self.apage_mut().delete_char_attr(row, col, attr, None);
                // drop a depleted row and scroll up from below
                if remove_depleted && self.row_length(row) == 0 {
                    self.scroll(Some(row));
                }
                return;
            } else if self.row_length(row) == self.mode.width {
                // fully packed wrapping row: pull the first character
                // of the next row into the vacated tail cell
                let wrap_char_attr = if self.row_length(row + 1) == 0 {
                    None
                } else {
                    Some((self.apage().get_char(row + 1, 1), self.apage().get_attr(row + 1, 1)))
                };
                self.apage_mut().delete_char_attr(row, col, attr, wrap_char_attr);
                row += 1;
                col = 1;
                remove_depleted = true;
            } else if col < self.row_length(row) {
                // soft-return row, inside the logical length
                self.apage_mut().delete_char_attr(row, col, attr, None);
                return;
            } else if remove_depleted && col == self.row_length(row) {
                // deleting the last cell; the row itself only goes
                // away once it is empty and DEL is pressed again
                self.apage_mut().delete_char_attr(row, col, attr, None);
                return;
            } else if remove_depleted && self.row_length(row) == 0 {
                self.scroll(Some(row));
                return;
            } else {
                // soft-return row, at or past its end: pull the next
                // row's cells leftward one at a time until it empties
                for newcol in col..=self.mode.width {
                    if self.row_length(row + 1) == 0 {
                        break;
                    }
                    let wrap_char = self.apage().get_char(row + 1, 1);
                    self.apage_mut().put_char_attr(row, newcol, wrap_char, attr, true);
                    self.delete_at(row + 1, 1, true);
                }
                return;
            }
        }
    }

    // insert

    /// Insert characters at the cursor, advancing it and reflowing the
    /// logical line.
    pub fn insert_fullchars(&mut self, chars: &str) {
        // one cell at a time, so the position logic deals with
        // scrolling as the line grows
        for ch in chars.chars() {
            let (row, col, attr) = (self.current_row, self.current_col, self.attr);
            if self.insert_at(row, col, ch, attr) {
                self.incr_pos();
            }
        }
    }

    // Insert one halfwidth cell, pushing overflow down the logical
    // line. One row per iteration, bounded by the screen height.
    fn insert_at(&mut self, row: i32, col: i32, ch: char, attr: u8) -> bool {
        let mut row = row;
        let mut col = col;
        let mut ch = ch;
        loop {
            if self.row_length(row) < self.mode.width {
                // spare capacity: insert, drop what falls off the end
                self.apage_mut().insert_char_attr(row, col, ch, attr);
                if self.wraps(row) && self.row_length(row) == self.mode.width {
                    // a soft-return row that just filled up becomes
                    // wrap-connected; open a row below for the rest of
                    // the logical line
                    self.scroll_down(row + 1);
                }
                return true;
            }
            // row full: wrap-connect it and push the popped cell on
            if !self.wraps(row) && row < self.scroll_area.bottom() {
                self.scroll_down(row + 1);
                self.set_wrap(row, true);
            }
            if row >= self.scroll_area.bottom() {
                // the line end hit the bottom: scroll the line start
                // up, or drop the character if there is no room left
                let start = self.apage().find_start_of_line(self.current_row);
                if start <= self.scroll_area.top() {
                    return false;
                }
                self.scroll(None);
                row -= 1;
            }
            let popped = self.apage_mut().insert_char_attr(row, col, ch, attr);
            row += 1;
            col = 1;
            ch = popped;
        }
    }

    /// Clear from the given position to the end of the logical line
    /// (CTRL+END).
    pub fn clear_from(&mut self, srow: i32, scol: i32) {
        let end_row = self.apage().find_end_of_line(srow);
        let attr = self.attr;
        self.apage_mut().clear_row_from(srow, scol, attr);
        // the rest of the logical line scrolls away
        let mut row = end_row;
        while row > srow {
            self.scroll(Some(row));
            row -= 1;
        }
        self.set_pos(srow, scol, true);
    }

    // line feed

    /// Move the remainder of the line to the next row and wrap (LF).
    pub fn line_feed(&mut self) {
        if self.current_col < self.row_length(self.current_row) {
            // insert blanks through the end of the row, preserving the
            // cursor position
            let (row, col) = (self.current_row, self.current_col);
            let pad = (self.mode.width - col + 1) as usize;
            self.insert_fullchars(&" ".repeat(pad));
            self.set_pos(row, col, false);
            // LF connects lines like word wrap
            let (row, col) = (self.current_row, self.current_col);
            self.set_row_length(row, col - 1);
            self.set_wrap(row, true);
            // the cursor stays in place
        } else {
            let end = self.apage().find_end_of_line(self.current_row);
            // when the logical line hits the bottom, scroll up to make
            // space, until it also hits the top
            if end >= self.scroll_area.bottom() {
                let start = self.apage().find_start_of_line(self.current_row);
                if start > self.scroll_area.top() {
                    self.scroll(None);
                } else {
                    return;
                }
            }
            if self.current_row < self.mode.height {
                let row = self.current_row;
                self.scroll_down(row + 1);
            }
            let row = self.current_row;
            self.set_wrap(row, true);
            self.set_pos(row + 1, 1, true);
        }
    }

    // console calls

    /// Clear the whole logical line (ESC), leaving any prompt.
    pub fn clear_line(&mut self, the_row: i32, from_col: i32) {
        let start = self.apage().find_start_of_line(the_row);
        self.clear_from(start, from_col);
    }

    /// Delete the character to the left (BACKSPACE).
    pub fn backspace(&mut self, prompt_row: i32, furthest_left: i32) {
        let (row, col) = (self.current_row, self.current_col);
        let start_row = self.apage().find_start_of_line(row);
        // don't backspace through the prompt or the start of the
        // logical line
        if (col != furthest_left || row != prompt_row) && (col > 1 || row > start_row) {
            self.decr_pos();
        }
        self.delete_fullchar();
    }

    /// Jump to the next 8-position tab stop (TAB).
    pub fn tab(&mut self, overwrite: bool) {
        let newcol = 9 + 8 * ((self.current_col - 1) / 8);
        if overwrite {
            let row = self.current_row;
            self.set_pos(row, newcol, false);
        } else {
            let pad = (newcol - self.current_col) as usize;
            self.insert_fullchars(&" ".repeat(pad));
        }
    }

    /// Skip one word to the right (CTRL+RIGHT).
    pub fn skip_word_right(&mut self) {
        let (mut crow, mut ccol) = (self.current_row, self.current_col);
        // skip the rest of the current word
        loop {
            if !self.apage().get_char(crow, ccol).is_ascii_alphanumeric() {
                break;
            }
            ccol += 1;
            if ccol > self.mode.width {
                if crow >= self.scroll_area.bottom() {
                    // nothing found
                    return;
                }
                crow += 1;
                ccol = 1;
            }
        }
        // find the start of the next one
        loop {
            if self.apage().get_char(crow, ccol).is_ascii_alphanumeric() {
                break;
            }
            ccol += 1;
            if ccol > self.mode.width {
                if crow >= self.scroll_area.bottom() {
                    return;
                }
                crow += 1;
                ccol = 1;
            }
        }
        self.set_pos(crow, ccol, true);
    }

    /// Skip one word to the left (CTRL+LEFT).
    pub fn skip_word_left(&mut self) {
        let (mut crow, mut ccol) = (self.current_row, self.current_col);
        // find the end of the previous word
        loop {
            ccol -= 1;
            if ccol < 1 {
                if crow <= self.scroll_area.top() {
                    // nothing found
                    return;
                }
                crow -= 1;
                ccol = self.mode.width;
            }
            if self.apage().get_char(crow, ccol).is_ascii_alphanumeric() {
                break;
            }
        }
        // then its start
        let mut last_row;
        let mut last_col;
        loop {
            last_row = crow;
            last_col = ccol;
            ccol -= 1;
            if ccol < 1 {
                if crow <= self.scroll_area.top() {
                    break;
                }
                crow -= 1;
                ccol = self.mode.width;
            }
            if !self.apage().get_char(crow, ccol).is_ascii_alphanumeric() {
                break;
            }
        }
        self.set_pos(last_row, last_col, true);
    }

    ///////////////////////////////////////////////////////////////////
    // bottom bar

    /// Update the key descriptions in the bottom bar.
    pub fn update_bar(&mut self, descriptions: &[&str]) {
        self.bottom_bar.clear();
        for (i, text) in descriptions.iter().enumerate() {
            let kcol = 1 + 8 * i;
            // key number's last digit, then the label in reverse video
            let digit = [b'0' + ((i as u8 + 1) % 10)];
            self.bottom_bar.write(&digit, kcol, false);
            self.bottom_bar.write(text.as_bytes(), kcol + 1, true);
        }
    }

    /// Switch bottom bar visibility (KEY ON / KEY OFF).
    pub fn show_bar(&mut self, on: bool) -> Result<()> {
        // Tandy can have VIEW PRINT over all 25 rows; no room then
        throw_if(on && self.scroll_area.bottom() == self.mode.height)?;
        let was_visible = self.bottom_bar.visible;
        self.bottom_bar.visible = on;
        if on != was_visible {
            self.redraw_bar();
        }
        Ok(())
    }

    /// Redraw the bottom bar if visible, clear the bottom row if not.
    pub fn redraw_bar(&mut self) {
        let key_row = self.mode.height;
        let attr = self.attr;
        self.apage_mut().clear_rows(key_row, key_row, attr);
        let reverse_attr = if !self.mode.is_text_mode {
            self.attr
        } else if (self.attr >> 4) & 0x7 == 0 {
            0x70
        } else {
            0x07
        };
        if self.bottom_bar.visible {
            // only whole 8-column key cells are shown; this matters in
            // the 20- and 40-column modes
            for col in 0..(self.mode.width / 8) * 8 {
                let (byte, reverse) = self.bottom_bar.get_char_reverse(col as usize);
                let cell_attr = if reverse { reverse_attr } else { self.attr };
                self.apage_mut()
                    .put_char_attr(key_row, col + 1, byte as char, cell_attr, false);
            }
            let width = self.mode.width;
            self.set_row_length(key_row, width);
        }
    }

    ///////////////////////////////////////////////////////////////////
    // visible page text retrieval

    /// Copy the selected screen area to the clipboard.
    pub fn copy_clipboard(&mut self, start_row: i32, start_col: i32, stop_row: i32, stop_col: i32) {
        let vpage = &self.pages[self.vpagenum];
        // all marked text, clipped to the selection
        let mut text = vpage.get_text_unicode(start_row, stop_row);
        if let Some(first) = text.first_mut() {
            let skip = ((start_col - 1).max(0) as usize).min(first.len());
            first.drain(..skip);
        }
        if let Some(last) = text.last_mut() {
            last.truncate(stop_col.max(0) as usize);
        }
        let clip = text
            .iter()
            .map(|chars| chars.iter().filter(|&&ch| ch != '\0').collect::<String>())
            .collect::<Vec<String>>()
            .join("\n");
        self.events.submit(Event::SetClipboard(clip));
    }

    ///////////////////////////////////////////////////////////////////
    // text screen callbacks

    /// LOCATE: set cursor position, shape and visibility.
    pub fn locate_(
        &mut self,
        row: Option<i32>,
        col: Option<i32>,
        cursor: Option<i32>,
        start: Option<i32>,
        stop: Option<i32>,
    ) -> Result<()> {
        let row = row.unwrap_or(self.current_row);
        let col = col.unwrap_or(self.current_col);
        throw_if(row == self.mode.height && self.bottom_bar.visible)?;
        if self.scroll_area.active() {
            range_check(self.scroll_area.top(), self.scroll_area.bottom(), row)?;
        } else {
            range_check(1, self.mode.height, row)?;
        }
        range_check(1, self.mode.width, col)?;
        if row == self.mode.height {
            // temporarily allow writing on the last row
            self.bottom_row_allowed = true;
        }
        self.set_pos(row, col, false);
        if let Some(cursor) = cursor {
            range_check(0, if self.tandy_text { 255 } else { 1 }, cursor)?;
            // sets the flag in graphics mode too, with no effect there
            self.cursor.set_visibility(cursor != 0);
        }
        throw_if(start.is_none() && stop.is_some())?;
        if let Some(start) = start {
            let stop = stop.unwrap_or(start);
            range_check(0, 31, start)?;
            range_check(0, 31, stop)?;
            // shape only has an effect in text mode
            if self.mode.is_text_mode {
                self.cursor.set_shape(start, stop);
            }
        }
        Ok(())
    }

    /// CSRLIN: the current screen row.
    pub fn csrlin_(&self) -> i32 {
        if self.overflow
            && self.current_col == self.mode.width
            && self.current_row < self.scroll_area.bottom()
        {
            // in overflow position, report row+1 except on the last row
            self.current_row + 1
        } else {
            self.current_row
        }
    }

    /// POS: the current screen column.
    pub fn pos_(&self) -> i32 {
        if self.current_col == self.mode.width && self.overflow {
            // in overflow position, report column 1
            1
        } else {
            self.current_col
        }
    }

    /// SCREEN function: the character or attribute at a location.
    pub fn screen_fn_(&self, row: i32, col: i32, want_attr: Option<i32>) -> Result<i32> {
        if let Some(want_attr) = want_attr {
            range_check(0, 255, want_attr)?;
        }
        range_check(0, self.mode.height, row)?;
        range_check(0, self.mode.width, col)?;
        throw_if(row == 0 && col == 0)?;
        let row = if row == 0 { 1 } else { row };
        let col = if col == 0 { 1 } else { col };
        if self.scroll_area.active() {
            range_check(self.scroll_area.top(), self.scroll_area.bottom(), row)?;
        }
        let apage = &self.pages[self.apagenum];
        let result = match want_attr {
            Some(want_attr) if want_attr != 0 => {
                if self.mode.is_text_mode {
                    i32::from(apage.get_attr(row, col))
                } else {
                    0
                }
            }
            _ => i32::from(apage.get_byte(row, col)),
        };
        Ok(result)
    }

    /// VIEW PRINT: set or reset the scroll region.
    pub fn view_print_(&mut self, bounds: Option<(i32, i32)>) -> Result<()> {
        match bounds {
            None => {
                self.scroll_area.unset();
            }
            Some((start, stop)) => {
                let max_line = if self.tandy_text && !self.bottom_bar.visible {
                    self.mode.height
                } else {
                    self.mode.height - 1
                };
                range_check(1, max_line, start)?;
                range_check(1, max_line, stop)?;
                throw_if(stop < start)?;
                self.scroll_area.set(start, stop);
                self.overflow = false;
                self.move_cursor(start, 1);
            }
        }
        Ok(())
    }
}
