pub mod arith;
pub mod console;
