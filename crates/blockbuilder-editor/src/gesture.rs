//! Pointer button tracking for edit gestures.

/// Phase of the edit button across pointer events.
///
/// Each pick is dispatched while the phase still reflects the event that
/// produced it, then [`settle`](Self::settle) moves it on:
/// ```text
/// Up ─press()─> JustPressed ─settle()─> Held
///  ^                                      │
///  │                                  release()
///  │                                      v
///  └──────────settle()──────────── JustReleased
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonPhase {
    /// Pressed by the event being dispatched.
    JustPressed,
    /// Held down since an earlier event.
    Held,
    /// Released by the event being dispatched.
    JustReleased,
    /// Not pressed.
    #[default]
    Up,
}

impl ButtonPhase {
    /// Returns `true` while the button is down, including the press event.
    #[inline]
    #[must_use]
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::JustPressed | Self::Held)
    }

    /// Returns `true` only for the release event.
    #[inline]
    #[must_use]
    pub const fn is_just_released(self) -> bool {
        matches!(self, Self::JustReleased)
    }

    #[inline]
    pub fn press(&mut self) {
        if !self.is_pressed() {
            *self = Self::JustPressed;
        }
    }

    #[inline]
    pub fn release(&mut self) {
        if self.is_pressed() {
            *self = Self::JustReleased;
        }
    }

    /// Leave the transient phases once the event has been handled.
    #[inline]
    pub fn settle(&mut self) {
        match *self {
            Self::JustPressed => *self = Self::Held,
            Self::JustReleased => *self = Self::Up,
            _ => {}
        }
    }
}
