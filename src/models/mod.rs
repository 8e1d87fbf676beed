pub mod catalog;
pub mod employee;
pub mod grid;
pub mod line;
pub mod task;
pub mod template;
