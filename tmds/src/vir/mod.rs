//! Verilog IR.

mod ir;

pub use ir::*;
