/// Hardware cursor contract, implemented by the video front end.
///
/// The text screen drives position, shape and visibility through this
/// trait. In text mode a move also carries the attribute and character
/// width of the destination cell so the front end can render a half- or
/// fullwidth cursor in the right colour.
pub trait Cursor {
    fn move_to(&mut self, row: i32, col: i32, attr: Option<u8>, width: Option<i32>);
    fn set_visibility(&mut self, visible: bool);
    /// Set the scanline range of the cursor glyph.
    fn set_shape(&mut self, from_line: i32, to_line: i32);
    /// Resubmit the full cursor state after a mode change.
    fn rebuild(&mut self);
}
