use log::warn;

const BAR_WIDTH: usize = 80;

/// Function key guide on the bottom line.
///
/// Backed by a fixed 80-cell strip independent of the screen width;
/// the screen renders only as much of it as fits in whole 8-column key
/// cells. Visibility persists across mode changes.
pub struct BottomBar {
    contents: [(u8, bool); BAR_WIDTH],
    pub visible: bool,
}

impl BottomBar {
    pub fn new() -> BottomBar {
        BottomBar {
            contents: [(b' ', false); BAR_WIDTH],
            visible: false,
        }
    }

    pub fn clear(&mut self) {
        self.contents = [(b' ', false); BAR_WIDTH];
    }

    /// Overlay text at a cell offset into the backing strip.
    pub fn write(&mut self, text: &[u8], col: usize, reverse: bool) {
        for (i, &byte) in text.iter().enumerate() {
            match self.contents.get_mut(col + i) {
                Some(cell) => *cell = (byte, reverse),
                None => {
                    warn!("bottom bar text spills past cell {}", BAR_WIDTH);
                    return;
                }
            }
        }
    }

    /// Character byte and reverse flag of one cell.
    pub fn get_char_reverse(&self, col: usize) -> (u8, bool) {
        self.contents[col]
    }
}

impl Default for BottomBar {
    fn default() -> BottomBar {
        BottomBar::new()
    }
}
