use std::error::Error;

pub(crate) trait ResultExtension<T> {
    /// Like [`Result::unwrap`], but restricted to [`Error`] types and panicking with the error's
    /// own message instead of its [`Debug`](std::fmt::Debug) view.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    fn throw(self) -> T {
        self.unwrap_or_else(|error| panic!("{error}"))
    }
}
