#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod billing;
pub mod catalog;
pub mod comparison;
pub mod config;
pub mod error;
pub mod quantity;
pub mod tariff;
pub mod usage;

pub use self::error::{Error, Result};

pub const HOURS_PER_DAY: usize = 24;

/// Last hour of the day, segment bounds are inclusive.
pub const LAST_HOUR: u8 = 23;
