//! Small games implementing `GameState`, used by the tests, benches and demo.

pub mod subtract_square;
pub mod tippy;

pub use subtract_square::{Subtract, SubtractSquare};
pub use tippy::{Place, Tippy};
