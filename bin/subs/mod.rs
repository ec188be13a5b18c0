pub mod analyze;
pub mod runnable;
