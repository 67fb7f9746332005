/// Pixel write verbs for `PUT` and the other sprite operations.
///
/// Each variant carries a pure combine function between the destination
/// and source pixel, always reduced under the page mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    /// Overwrite.
    Pset,
    /// Complement of the source under the mask.
    Preset,
    And,
    Or,
    Xor,
}

impl DrawOp {
    pub fn combine(self, dest: u8, src: u8, mask: u8) -> u8 {
        match self {
            DrawOp::Pset => src & mask,
            DrawOp::Preset => (src ^ mask) & mask,
            DrawOp::And => dest & src & mask,
            DrawOp::Or => (dest | src) & mask,
            DrawOp::Xor => (dest ^ src) & mask,
        }
    }
}

/// Graphics buffers for all screen pages.
pub struct PixelBuffer {
    pub pages: Vec<PixelPage>,
    pub width: i32,
    pub height: i32,
}

impl PixelBuffer {
    pub fn new(width: i32, height: i32, pages: usize, bits_per_pixel: u32) -> PixelBuffer {
        PixelBuffer {
            pages: (0..pages)
                .map(|_| PixelPage::new(width, height, bits_per_pixel))
                .collect(),
            width,
            height,
        }
    }
}

/// Pixel grid for one screen page.
///
/// Every stored value fits the mask derived from the bit depth.
/// Out-of-range reads yield 0 and out-of-range writes are silently
/// dropped, like the hardware clipping raster writes at the edges.
pub struct PixelPage {
    buffer: Vec<Vec<u8>>,
    pub width: i32,
    pub height: i32,
    mask: u8,
}

impl PixelPage {
    pub fn new(width: i32, height: i32, bits_per_pixel: u32) -> PixelPage {
        debug_assert!(bits_per_pixel >= 1 && bits_per_pixel <= 8);
        PixelPage {
            buffer: vec![vec![0; width as usize]; height as usize],
            width,
            height,
            mask: (((1u16) << bits_per_pixel) - 1) as u8,
        }
    }

    pub fn mask(&self) -> u8 {
        self.mask
    }

    pub fn copy_from(&mut self, src: &PixelPage) {
        debug_assert!(self.width == src.width && self.height == src.height);
        self.buffer.clone_from(&src.buffer);
    }

    fn in_range(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    pub fn put_pixel(&mut self, x: i32, y: i32, attr: u8) {
        if self.in_range(x, y) {
            self.buffer[y as usize][x as usize] = attr & self.mask;
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> u8 {
        if self.in_range(x, y) {
            self.buffer[y as usize][x as usize]
        } else {
            0
        }
    }

    /// Fill the inclusive interval `[x0, x1]` on a scanline.
    pub fn fill_interval(&mut self, x0: i32, x1: i32, y: i32, attr: u8) {
        if y < 0 || y >= self.height {
            return;
        }
        let start = x0.max(0);
        let stop = x1.min(self.width - 1);
        let attr = attr & self.mask;
        for x in start..=stop {
            self.buffer[y as usize][x as usize] = attr;
        }
    }

    /// Attributes of a scanline interval of the given length.
    pub fn get_interval(&self, x: i32, y: i32, length: usize) -> Vec<u8> {
        (0..length as i32).map(|i| self.get_pixel(x + i, y)).collect()
    }

    /// Merge attributes into a scanline under a mutation mask: masked
    /// source bits replace masked destination bits, the rest survive.
    pub fn put_interval(&mut self, x: i32, y: i32, attrs: &[u8], mask: u8) {
        for (i, &attr) in attrs.iter().enumerate() {
            let x = x + i as i32;
            let dest = self.get_pixel(x, y);
            self.put_pixel(x, y, (attr & mask) | (dest & !mask));
        }
    }

    /// Apply a solid attribute to the inclusive rectangle.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, attr: u8) {
        for y in y0..=y1 {
            self.fill_interval(x0, x1, y, attr);
        }
    }

    /// Attributes of the inclusive rectangle, row by row.
    pub fn get_rect(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Vec<u8>> {
        (y0..=y1)
            .map(|y| self.get_interval(x0, y, (x1 - x0 + 1).max(0) as usize))
            .collect()
    }

    /// Combine a same-shaped source grid into the inclusive rectangle
    /// with the given drawing verb.
    pub fn put_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, src: &[Vec<u8>], op: DrawOp) {
        for (dy, src_row) in (y0..=y1).zip(src.iter()) {
            for (dx, &src_attr) in (x0..=x1).zip(src_row.iter()) {
                if self.in_range(dx, dy) {
                    let dest = self.buffer[dy as usize][dx as usize];
                    self.buffer[dy as usize][dx as usize] = op.combine(dest, src_attr, self.mask);
                }
            }
        }
    }

    /// Move the inclusive source rectangle to a new position, leaving
    /// attribute 0 behind.
    pub fn move_rect(&mut self, sx0: i32, sy0: i32, sx1: i32, sy1: i32, tx0: i32, ty0: i32) {
        let clip = self.get_rect(sx0, sy0, sx1, sy1);
        self.fill_rect(sx0, sy0, sx1, sy1, 0);
        let width = sx1 - sx0 + 1;
        let height = sy1 - sy0 + 1;
        self.put_rect(tx0, ty0, tx0 + width - 1, ty0 + height - 1, &clip, DrawOp::Pset);
    }

    /// Scan a row from `x0` toward `x1` (exclusive), collecting
    /// attributes until one of the stop values is hit. Used by flood
    /// fill to find boundary runs; the scan may go either direction.
    pub fn get_until(&self, x0: i32, x1: i32, y: i32, stop: &[u8]) -> Vec<u8> {
        let mut run = Vec::new();
        if x1 >= x0 {
            for x in x0..x1 {
                let attr = self.get_pixel(x, y);
                if stop.contains(&attr) {
                    break;
                }
                run.push(attr);
            }
        } else {
            for x in ((x1 + 1)..=x0).rev() {
                let attr = self.get_pixel(x, y);
                if stop.contains(&attr) {
                    break;
                }
                run.push(attr);
            }
        }
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PixelPage {
        PixelPage::new(16, 8, 2)
    }

    #[test]
    fn test_put_get_masked() {
        let mut p = page();
        p.put_pixel(3, 2, 0xff);
        assert_eq!(p.get_pixel(3, 2), 0x03);
        p.put_pixel(3, 2, 2);
        assert_eq!(p.get_pixel(3, 2), 2);
    }

    #[test]
    fn test_out_of_range_is_silent() {
        let mut p = page();
        p.put_pixel(-1, 0, 3);
        p.put_pixel(16, 0, 3);
        p.put_pixel(0, 8, 3);
        assert_eq!(p.get_pixel(-1, 0), 0);
        assert_eq!(p.get_pixel(16, 0), 0);
        assert_eq!(p.get_pixel(0, 8), 0);
        for y in 0..8 {
            for x in 0..16 {
                assert_eq!(p.get_pixel(x, y), 0);
            }
        }
    }

    #[test]
    fn test_fill_and_get_rect() {
        let mut p = page();
        p.fill_rect(1, 1, 3, 2, 3);
        assert_eq!(p.get_rect(1, 1, 3, 2), vec![vec![3, 3, 3], vec![3, 3, 3]]);
        assert_eq!(p.get_pixel(0, 1), 0);
        assert_eq!(p.get_pixel(4, 1), 0);
    }

    #[test]
    fn test_put_rect_xor_involution() {
        let mut p = page();
        p.fill_rect(0, 0, 3, 1, 1);
        let before = p.get_rect(0, 0, 3, 1);
        let sprite = vec![vec![2, 3, 0, 1], vec![1, 0, 3, 2]];
        p.put_rect(0, 0, 3, 1, &sprite, DrawOp::Xor);
        assert_ne!(p.get_rect(0, 0, 3, 1), before);
        p.put_rect(0, 0, 3, 1, &sprite, DrawOp::Xor);
        assert_eq!(p.get_rect(0, 0, 3, 1), before);
    }

    #[test]
    fn test_put_rect_preset_complements() {
        let mut p = page();
        let sprite = vec![vec![0, 1, 2, 3]];
        p.put_rect(0, 0, 3, 0, &sprite, DrawOp::Preset);
        assert_eq!(p.get_interval(0, 0, 4), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_put_rect_clips() {
        let mut p = page();
        let sprite = vec![vec![3, 3], vec![3, 3]];
        p.put_rect(15, 7, 16, 8, &sprite, DrawOp::Pset);
        assert_eq!(p.get_pixel(15, 7), 3);
        assert_eq!(p.get_pixel(16, 8), 0);
    }

    #[test]
    fn test_put_interval_respects_mask() {
        let mut p = page();
        p.fill_interval(0, 3, 0, 2);
        p.put_interval(0, 0, &[1, 1, 1, 1], 0x01);
        // bit 0 comes from the source, bit 1 from the destination
        assert_eq!(p.get_interval(0, 0, 4), vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_move_rect_zero_fills_source() {
        let mut p = page();
        p.fill_rect(0, 0, 1, 1, 3);
        p.move_rect(0, 0, 1, 1, 4, 4);
        assert_eq!(p.get_rect(0, 0, 1, 1), vec![vec![0, 0], vec![0, 0]]);
        assert_eq!(p.get_rect(4, 4, 5, 5), vec![vec![3, 3], vec![3, 3]]);
    }

    #[test]
    fn test_get_until() {
        let mut p = page();
        p.fill_interval(0, 7, 3, 1);
        p.put_pixel(5, 3, 2);
        assert_eq!(p.get_until(0, 16, 3, &[2]), vec![1, 1, 1, 1, 1]);
        // leftward scan stops at the same boundary
        assert_eq!(p.get_until(7, -1, 3, &[2]), vec![1, 1]);
        // no boundary: bounded by the interval
        assert_eq!(p.get_until(0, 4, 3, &[3]), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_buffer_pages() {
        let mut buffer = PixelBuffer::new(320, 200, 2, 2);
        assert_eq!(buffer.pages.len(), 2);
        buffer.pages[0].put_pixel(10, 10, 3);
        let (first, rest) = buffer.pages.split_at_mut(1);
        rest[0].copy_from(&first[0]);
        assert_eq!(buffer.pages[1].get_pixel(10, 10), 3);
    }
}
