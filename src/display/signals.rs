/// Events emitted by the screen toward the video front end.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Hand selected text to the system clipboard.
    SetClipboard(String),
}

/// Sink for events produced by the screen.
pub trait EventSink {
    fn submit(&mut self, event: Event);
}
