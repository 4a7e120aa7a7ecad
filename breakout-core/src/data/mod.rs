//! Data retrieval and normalization.

pub mod normalize;
pub mod provider;
pub mod yahoo;

pub use normalize::normalize;
pub use provider::{CsvProvider, DataError, DataProvider};
pub use yahoo::YahooProvider;
