/// Geometry of a video mode as seen by the text and pixel buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenMode {
    /// Text columns.
    pub width: i32,
    /// Text rows, including the bottom bar row.
    pub height: i32,
    pub is_text_mode: bool,
}

impl ScreenMode {
    /// Text mode with the standard 25 rows.
    pub fn text(width: i32) -> ScreenMode {
        ScreenMode {
            width,
            height: 25,
            is_text_mode: true,
        }
    }

    /// Graphics mode with the given text-cell geometry.
    pub fn graphics(width: i32, height: i32) -> ScreenMode {
        ScreenMode {
            width,
            height,
            is_text_mode: false,
        }
    }
}

/// Display adapter family.
///
/// The Tandy 1000 and PCjr text hardware behaves differently in a few
/// places: VIEW PRINT may cover all 25 rows, LOCATE accepts the full
/// 0-255 cursor argument range, and CLS keeps the current foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adapter {
    Mda,
    Cga,
    Ega,
    Vga,
    Pcjr,
    Tandy,
}

impl Adapter {
    pub fn tandy_text(self) -> bool {
        match self {
            Adapter::Pcjr | Adapter::Tandy => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tandy_text() {
        assert!(Adapter::Tandy.tandy_text());
        assert!(Adapter::Pcjr.tandy_text());
        assert!(!Adapter::Ega.tandy_text());
    }

    #[test]
    fn test_mode_presets() {
        let mode = ScreenMode::text(40);
        assert_eq!((mode.width, mode.height), (40, 25));
        assert!(mode.is_text_mode);
        assert!(!ScreenMode::graphics(80, 25).is_text_mode);
    }
}
