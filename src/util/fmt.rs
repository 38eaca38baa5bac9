use std::fmt::{self, Debug, Display, Formatter};

/// Adapts a [`Display`] value into a [`Debug`] one without quoting or escaping, for feeding
/// pre-rendered text into the `debug_*` formatter builders.
pub struct DebugRaw<D: Display>(pub D);

impl<D: Display> Debug for DebugRaw<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
