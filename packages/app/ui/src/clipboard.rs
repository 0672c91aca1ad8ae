/// Destination for the "Copy link" action.
///
/// Writes are fire-and-forget: the component never waits on or inspects the
/// outcome.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

/// In-process clipboard that remembers the most recent write.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub const fn new() -> Self {
        Self { contents: None }
    }

    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) {
        log::trace!("write_text: {text}");
        self.contents = Some(text.to_string());
    }
}

impl<T: Clipboard + ?Sized> Clipboard for &mut T {
    fn write_text(&mut self, text: &str) {
        (**self).write_text(text);
    }
}
