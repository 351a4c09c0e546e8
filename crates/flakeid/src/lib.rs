#![doc = include_str!("../README.md")]

mod config;
mod error;
mod generator;
mod id;
pub mod rand;
#[cfg(feature = "serde")]
mod serde;
pub mod time;

pub use crate::config::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::{RandSource, SeededRandom, ThreadRandom};
pub use crate::time::{DEFAULT_EPOCH, SystemClock, TimeSource};
