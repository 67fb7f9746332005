use unicode_width::UnicodeWidthChar;

/// Cells a character occupies on screen. DBCS codepages are out of
/// scope here; a character claims a cell pair exactly when it renders
/// fullwidth.
fn char_width(ch: char) -> i32 {
    match UnicodeWidthChar::width(ch) {
        Some(2) => 2,
        _ => 1,
    }
}

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    attr: u8,
    /// Second half of a fullwidth character.
    trail: bool,
}

impl Cell {
    fn blank(attr: u8) -> Cell {
        Cell {
            ch: ' ',
            attr,
            trail: false,
        }
    }
}

struct TextRow {
    cells: Vec<Cell>,
    /// Joined to the next row's start as one logical line.
    wrap: bool,
    /// Logical length; cells beyond it are display padding.
    length: i32,
}

impl TextRow {
    fn blank(width: i32, attr: u8) -> TextRow {
        TextRow {
            cells: vec![Cell::blank(attr); width as usize],
            wrap: false,
            length: 0,
        }
    }
}

/// Character and attribute storage for one text page.
///
/// Rows and columns are 1-based and inclusive, like everything the
/// interpreter exposes. Reads outside the grid return blanks and
/// writes outside it are dropped; the screen state machine keeps the
/// cursor in range, but transient positions during scrolls may probe
/// one row past an edge.
pub struct TextPage {
    rows: Vec<TextRow>,
    width: i32,
    height: i32,
}

impl TextPage {
    pub fn new(width: i32, height: i32) -> TextPage {
        TextPage {
            rows: (0..height).map(|_| TextRow::blank(width, 0)).collect(),
            width,
            height,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn row(&self, row: i32) -> Option<&TextRow> {
        if row >= 1 && row <= self.height {
            Some(&self.rows[row as usize - 1])
        } else {
            None
        }
    }

    fn row_mut(&mut self, row: i32) -> Option<&mut TextRow> {
        if row >= 1 && row <= self.height {
            Some(&mut self.rows[row as usize - 1])
        } else {
            None
        }
    }

    fn cell(&self, row: i32, col: i32) -> Option<&Cell> {
        if col >= 1 && col <= self.width {
            self.row(row).map(|r| &r.cells[col as usize - 1])
        } else {
            None
        }
    }

    /// Write a character cell. A fullwidth character claims the next
    /// cell as its trail half. `adjust_end` grows the logical row
    /// length to cover the write.
    pub fn put_char_attr(&mut self, row: i32, col: i32, ch: char, attr: u8, adjust_end: bool) {
        let width = self.width;
        let fullwidth = char_width(ch) == 2;
        let therow = match self.row_mut(row) {
            Some(therow) => therow,
            None => return,
        };
        if col < 1 || col > width {
            return;
        }
        therow.cells[col as usize - 1] = Cell {
            ch,
            attr,
            trail: false,
        };
        let mut end = col;
        if fullwidth && col < width {
            therow.cells[col as usize] = Cell {
                ch: ' ',
                attr,
                trail: true,
            };
            end = col + 1;
        }
        if adjust_end && therow.length < end {
            therow.length = end;
        }
    }

    /// Remove a cell and shift the row tail left. The vacated last
    /// cell takes the wrap char pulled in from the next row, or a
    /// blank in the given attribute.
    pub fn delete_char_attr(
        &mut self,
        row: i32,
        col: i32,
        attr: u8,
        wrap_char_attr: Option<(char, u8)>,
    ) {
        let width = self.width;
        let therow = match self.row_mut(row) {
            Some(therow) => therow,
            None => return,
        };
        if col < 1 || col > width {
            return;
        }
        therow.cells.remove(col as usize - 1);
        match wrap_char_attr {
            Some((ch, wrap_attr)) => {
                therow.cells.push(Cell {
                    ch,
                    attr: wrap_attr,
                    trail: false,
                });
                // the row keeps feeding from the next; still full
                therow.length = width;
            }
            None => {
                therow.cells.push(Cell::blank(attr));
                if col <= therow.length {
                    therow.length -= 1;
                }
            }
        }
    }

    /// Insert a cell, shifting the tail right; returns the character
    /// pushed off the end of the row.
    pub fn insert_char_attr(&mut self, row: i32, col: i32, ch: char, attr: u8) -> char {
        let width = self.width;
        let therow = match self.row_mut(row) {
            Some(therow) => therow,
            None => return ' ',
        };
        if col < 1 || col > width {
            return ' ';
        }
        therow.cells.insert(
            col as usize - 1,
            Cell {
                ch,
                attr,
                trail: false,
            },
        );
        let popped = match therow.cells.pop() {
            Some(cell) => cell.ch,
            None => ' ',
        };
        if col > therow.length {
            therow.length = col.min(width);
        } else {
            therow.length = (therow.length + 1).min(width);
        }
        popped
    }

    /// Blank out the inclusive row range in the given attribute.
    pub fn clear_rows(&mut self, start: i32, stop: i32, attr: u8) {
        for row in start..=stop {
            if let Some(therow) = self.row_mut(row) {
                for cell in therow.cells.iter_mut() {
                    *cell = Cell::blank(attr);
                }
                therow.length = 0;
                therow.wrap = false;
            }
        }
    }

    /// Blank out a row from the given column to its right edge.
    pub fn clear_row_from(&mut self, row: i32, col: i32, attr: u8) {
        if col <= 1 {
            self.clear_rows(row, row, attr);
            return;
        }
        let width = self.width;
        let therow = match self.row_mut(row) {
            Some(therow) => therow,
            None => return,
        };
        if col > width {
            return;
        }
        for cell in therow.cells[col as usize - 1..].iter_mut() {
            *cell = Cell::blank(attr);
        }
        if therow.length >= col {
            therow.length = col - 1;
        }
        therow.wrap = false;
    }

    /// Shift rows `from..=to` up one; the vacated bottom row is blank.
    pub fn scroll_up(&mut self, from: i32, to: i32, attr: u8) {
        if from < 1 || to > self.height || from > to {
            return;
        }
        let width = self.width;
        self.rows.remove(from as usize - 1);
        self.rows.insert(to as usize - 1, TextRow::blank(width, attr));
    }

    /// Shift rows `from..=to` down one. The new blank row at `from`
    /// stays wrap-connected when it splits a wrapped logical line.
    pub fn scroll_down(&mut self, from: i32, to: i32, attr: u8) {
        if from < 1 || to > self.height || from > to {
            return;
        }
        let width = self.width;
        let wrap = from >= 2 && self.rows[from as usize - 2].wrap;
        let mut blank = TextRow::blank(width, attr);
        blank.wrap = wrap;
        self.rows.insert(from as usize - 1, blank);
        self.rows.remove(to as usize);
    }

    /// Connect or disconnect a row from the next by line wrap.
    pub fn set_wrap(&mut self, row: i32, wrap: bool) {
        if let Some(therow) = self.row_mut(row) {
            therow.wrap = wrap;
        }
    }

    /// The given row is connected to the next by line wrap.
    pub fn wraps(&self, row: i32) -> bool {
        match self.row(row) {
            Some(therow) => therow.wrap,
            None => false,
        }
    }

    pub fn set_row_length(&mut self, row: i32, length: i32) {
        let width = self.width;
        if let Some(therow) = self.row_mut(row) {
            therow.length = length.max(0).min(width);
        }
    }

    pub fn row_length(&self, row: i32) -> i32 {
        match self.row(row) {
            Some(therow) => therow.length,
            None => 0,
        }
    }

    pub fn get_char(&self, row: i32, col: i32) -> char {
        match self.cell(row, col) {
            Some(cell) => cell.ch,
            None => ' ',
        }
    }

    pub fn get_attr(&self, row: i32, col: i32) -> u8 {
        match self.cell(row, col) {
            Some(cell) => cell.attr,
            None => 0,
        }
    }

    /// 2 on a fullwidth lead cell, 0 on its trail cell, 1 otherwise.
    pub fn get_charwidth(&self, row: i32, col: i32) -> i32 {
        match self.cell(row, col) {
            Some(cell) if cell.trail => 0,
            Some(cell) => char_width(cell.ch),
            None => 1,
        }
    }

    /// Character byte as stored; cells outside the ASCII range read 0.
    pub fn get_byte(&self, row: i32, col: i32) -> u8 {
        let ch = self.get_char(row, col);
        if ch.is_ascii() {
            ch as u8
        } else {
            0
        }
    }

    /// First row of the logical line that includes the given row.
    pub fn find_start_of_line(&self, row: i32) -> i32 {
        let mut row = row.max(1);
        while row > 1 && self.wraps(row - 1) {
            row -= 1;
        }
        row
    }

    /// Last row of the logical line that includes the given row.
    pub fn find_end_of_line(&self, row: i32) -> i32 {
        let mut row = row.min(self.height);
        while row < self.height && self.wraps(row) {
            row += 1;
        }
        row
    }

    /// Logical text of rows `start..=stop`, one byte string per row.
    pub fn get_text_bytes(&self, start: i32, stop: i32) -> Vec<Vec<u8>> {
        (start..=stop)
            .map(|row| {
                (1..=self.row_length(row))
                    .map(|col| {
                        let ch = self.get_char(row, col);
                        if ch.is_ascii() {
                            ch as u8
                        } else {
                            b'?'
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Full-width character rows `start..=stop`; trail cells yield NUL
    /// so column clipping still counts cells.
    pub fn get_text_unicode(&self, start: i32, stop: i32) -> Vec<Vec<char>> {
        (start..=stop)
            .map(|row| {
                (1..=self.width)
                    .map(|col| match self.cell(row, col) {
                        Some(cell) if cell.trail => '\0',
                        Some(cell) => cell.ch,
                        None => ' ',
                    })
                    .collect()
            })
            .collect()
    }

    /// Every row as blank-padded characters.
    pub fn get_chars(&self) -> Vec<Vec<char>> {
        (1..=self.height)
            .map(|row| (1..=self.width).map(|col| self.get_char(row, col)).collect())
            .collect()
    }
}

impl std::fmt::Debug for TextPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for therow in &self.rows {
            let text: String = therow.cells.iter().map(|cell| cell.ch).collect();
            writeln!(
                f,
                "|{}|{}{}",
                text,
                if therow.wrap { '\\' } else { ' ' },
                therow.length
            )?;
        }
        Ok(())
    }
}
