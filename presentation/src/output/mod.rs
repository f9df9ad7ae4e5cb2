//! Output formatting

pub mod columns;
pub mod console;
