//! # Reading solver reports from disk
#[allow(missing_docs)]
mod test;
