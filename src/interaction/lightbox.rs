/// Where a click inside an open lightbox landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// The dimmed overlay itself.
    Backdrop,
    /// The close control.
    CloseControl,
    /// Anything within the content panel, including the player.
    Content,
}

impl ClickOrigin {
    /// Classifies a click by whether its target is the backdrop element.
    /// Clicks on the close control are reported by its own handler.
    pub fn from_target(target_is_backdrop: bool) -> Self {
        if target_is_backdrop {
            ClickOrigin::Backdrop
        } else {
            ClickOrigin::Content
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    open: bool,
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the next state, or `None` when nothing changes.
    pub fn opened(self) -> Option<Self> {
        (!self.open).then_some(Self { open: true })
    }

    /// Returns the next state, or `None` when the click leaves it as is.
    pub fn clicked(self, origin: ClickOrigin) -> Option<Self> {
        match origin {
            ClickOrigin::Backdrop | ClickOrigin::CloseControl if self.open => Some(Self { open: false }),
            _ => None,
        }
    }
}
