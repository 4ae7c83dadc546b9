// The macros in common must be declared before the modules that use them
#[macro_use]
pub mod common;

pub mod ocarina;
