pub mod changed;
pub mod print;
pub mod roundtrip;
pub mod set;
pub mod show;
pub mod tree;
pub mod util;

#[cfg(test)]
mod test_support;
