#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod template;

pub use error::ErrorBody;
pub use template::Template;
