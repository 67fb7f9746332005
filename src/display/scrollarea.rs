use super::ScreenMode;

/// Text viewport. Scrolling and line wrap stay inside the inclusive
/// row range `top..=bottom`, which normally excludes the bottom bar
/// row.
pub struct ScrollArea {
    height: i32,
    top: i32,
    bottom: i32,
    active: bool,
}

impl ScrollArea {
    pub fn new(mode: &ScreenMode) -> ScrollArea {
        let mut area = ScrollArea {
            height: mode.height,
            top: 1,
            bottom: 1,
            active: false,
        };
        area.unset();
        area
    }

    /// Re-derive bounds for a new screen mode. A viewport covering the
    /// full screen survives the change (Tandy and PCjr keep VIEW PRINT
    /// over all 25 rows across modes); anything else resets.
    pub fn init_mode(&mut self, mode: &ScreenMode) {
        self.height = mode.height;
        if self.bottom == self.height {
            self.set(1, self.height);
        } else {
            self.unset();
        }
    }

    /// A viewport has been set.
    pub fn active(&self) -> bool {
        self.active
    }

    pub fn bounds(&self) -> (i32, i32) {
        (self.top, self.bottom)
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    /// Set the scroll area. Bounds are inclusive and count rows from 1.
    pub fn set(&mut self, start: i32, stop: i32) {
        debug_assert!(1 <= start && start <= stop && stop <= self.height);
        self.active = true;
        self.top = start;
        self.bottom = stop;
    }

    /// Revert to the default area. There is only one VIEW PRINT
    /// setting across all pages.
    pub fn unset(&mut self) {
        self.set(1, self.height - 1);
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_unset() {
        let mut area = ScrollArea::new(&ScreenMode::text(80));
        assert_eq!(area.bounds(), (1, 24));
        assert!(!area.active());
        area.set(5, 10);
        assert!(area.active());
        assert_eq!((area.top(), area.bottom()), (5, 10));
        area.unset();
        assert_eq!(area.bounds(), (1, 24));
        assert!(!area.active());
    }

    #[test]
    fn test_init_mode_resets() {
        let mut area = ScrollArea::new(&ScreenMode::text(80));
        area.set(5, 10);
        area.init_mode(&ScreenMode::text(40));
        assert_eq!(area.bounds(), (1, 24));
        assert!(!area.active());
    }

    #[test]
    fn test_init_mode_preserves_full_height() {
        let mut area = ScrollArea::new(&ScreenMode::text(80));
        area.set(1, 25);
        area.init_mode(&ScreenMode::text(40));
        assert_eq!(area.bounds(), (1, 25));
        assert!(area.active());
    }
}
