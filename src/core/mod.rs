pub mod catalog;
pub mod classify;
pub mod directory;
pub mod grid;
pub mod overrides;
pub mod reconcile;
pub mod schedule;
pub mod session;
pub mod time_convert;
