pub mod day_store;

pub use day_store::DayStore;
