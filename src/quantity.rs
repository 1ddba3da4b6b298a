#[macro_use]
mod macros;

pub mod cost;
pub mod energy;
pub mod ratios;
pub mod rate;

pub use self::{
    cost::{Cents, Dollars},
    energy::KilowattHours,
    rate::CentsPerKilowattHour,
    ratios::Percentage,
};
