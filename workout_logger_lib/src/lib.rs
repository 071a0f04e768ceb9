pub mod app;
pub mod config;
pub mod coordinate;
pub mod entry;
pub mod form;
pub mod id;
pub mod ports;
pub mod workout;

#[cfg(test)]
pub(crate) mod test_util;
