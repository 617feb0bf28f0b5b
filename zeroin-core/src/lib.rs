mod function;

pub use function::{Fallible, UnivariateFn};
