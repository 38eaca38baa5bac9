#![warn(missing_docs)]

pub mod error;
pub mod fmt;
pub mod hash;
pub mod option;
pub mod random;
pub mod result;
