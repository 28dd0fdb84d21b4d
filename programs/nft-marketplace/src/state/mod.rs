
pub mod custody;
pub mod listing;
pub mod marketplace_config;

pub use custody::*;
pub use listing::*;
pub use marketplace_config::*;

#[cfg(test)]
mod tests;
