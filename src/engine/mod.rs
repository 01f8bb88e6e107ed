pub mod buffer;
pub mod calculator;
pub mod display;
pub mod error;
pub mod reduce;
pub mod token;

pub use buffer::{Folded, InputBuffer};
pub use calculator::Calculator;
pub use display::{DisplaySink, ScreenText};
pub use error::CalcError;
pub use token::{Op, Token};
