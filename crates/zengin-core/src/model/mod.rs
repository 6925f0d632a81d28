pub mod bank;
pub mod branch;

pub use bank::Bank;
pub use branch::Branch;
