/*!
## Rust Display Module

This Rust module maintains the logical text and graphics screen state
for BASIC: per-page character buffers, the cursor and viewport state
machine, the function key bar, and the masked pixel grids.

*/

mod bar;
mod cursor;
mod mode;
mod pixels;
mod scrollarea;
mod signals;
mod textpage;
mod textscreen;

pub use bar::BottomBar;
pub use cursor::Cursor;
pub use mode::Adapter;
pub use mode::ScreenMode;
pub use pixels::DrawOp;
pub use pixels::PixelBuffer;
pub use pixels::PixelPage;
pub use scrollarea::ScrollArea;
pub use signals::Event;
pub use signals::EventSink;
pub use textpage::TextPage;
pub use textscreen::TextScreen;
