pub mod brent;
