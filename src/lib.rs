#![cfg_attr(not(feature = "std"), no_std)]

#[cfg_attr(test, macro_use)]
extern crate alloc;

pub mod common;
pub mod layered;
pub mod linked;
