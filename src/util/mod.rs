//! Shared helpers for tests.

#[cfg(test)]
pub mod test;
