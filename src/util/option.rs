use std::hint;

pub(crate) trait OptionExtension<T> {
    /// Unwraps an [`Option`] which the surrounding logic guarantees is [`Some`]: dev builds panic
    /// if the guarantee is wrong, release builds invoke
    /// [`unreachable_unchecked`](hint::unreachable_unchecked).
    ///
    /// Calling this states that [`None`] is impossible at the call site, so no panic docs are
    /// attached; the same goes for safety docs.
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    unsafe fn unreachable(self) -> T {
        debug_assert!(self.is_some(), "value declared unreachable was None");
        match self {
            Some(val) => val,
            // SAFETY: The caller guarantees None is impossible here.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
