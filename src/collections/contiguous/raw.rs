use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

const MAX_BYTES: usize = isize::MAX as usize;

/// A raw, runtime-sized allocation of uninitialized `T` slots. This is the piece of unsafe
/// plumbing underneath every contiguous collection in the crate: it owns the memory and nothing
/// else. Callers track which slots are initialized and must drop their contents themselves;
/// `RawBuf` only allocates, reallocates and deallocates.
///
/// Zero-sized types never allocate. The capacity is still tracked so that collections built on top
/// can do their bookkeeping without special cases.
pub(crate) struct RawBuf<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// A buffer with no allocation behind it. The pointer dangles until the first realloc.
    pub const fn dangling() -> RawBuf<T> {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a buffer with `cap` uninitialized slots.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn with_cap(cap: usize) -> RawBuf<T> {
        let mut buf = RawBuf::dangling();
        buf.realloc(cap);
        buf
    }

    /// Reallocates the buffer to hold exactly `new_cap` slots. Slots beyond the old capacity are
    /// uninitialized; slots below it keep their bytes. The caller is responsible for having
    /// dropped the contents of any slots this frees.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn realloc(&mut self, new_cap: usize) {
        if size_of::<T>() == 0 || new_cap == self.cap {
            // Zero-sized types get no allocation at all; only the recorded capacity changes.
            self.cap = new_cap;
            return;
        }

        let new_ptr = match (self.cap, new_cap) {
            (0, _) => {
                let layout = Self::make_layout(new_cap);
                // SAFETY: The layout has non-zero size because T isn't zero-sized and
                // new_cap != self.cap = 0.
                let raw: *mut T = unsafe { alloc::alloc(layout).cast() };
                NonNull::new(raw).unwrap_or_else(|| alloc::handle_alloc_error(layout))
            },
            (_, 0) => {
                // SAFETY: The pointer was allocated in the global allocator with this layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.cap)) }
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.cap);
                assert!(new_cap * size_of::<T>() <= MAX_BYTES, "Capacity overflow!");

                // SAFETY: The pointer was allocated in the global allocator with old_layout, and
                // the new size is non-zero and no greater than isize::MAX.
                let raw: *mut T = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        old_layout,
                        new_cap * size_of::<T>()
                    ).cast()
                };
                NonNull::new(raw).unwrap_or_else(
                    || alloc::handle_alloc_error(Self::make_layout(new_cap))
                )
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Computes the [`Layout`] for `cap` slots of `T`.
    ///
    /// # Panics
    /// Panics if the layout size would exceed [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).expect("Capacity overflow!")
    }

    /// Moves the buffer out from behind a mutable reference, leaving an unallocated one in its
    /// place. Used when a collection is decomposed in a method that can't take `self` by value.
    pub const fn take(&mut self) -> RawBuf<T> {
        mem::replace(self, RawBuf::dangling())
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap != 0 && size_of::<T>() != 0 {
            // SAFETY: The pointer was allocated in the global allocator with exactly this layout.
            // Contents are the caller's problem; only the memory is released here.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.cap));
            }
        }
    }
}

// SAFETY: RawBuf is an owning pointer; it is safe to send to another thread when T is Send.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: RawBuf hands out no shared mutability of its own; &RawBuf allows no access to T at all.
unsafe impl<T: Sync> Sync for RawBuf<T> {}
