pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod frequency;
pub mod lookup;
pub mod position;
pub mod proximity;
pub mod report;
pub mod set;
pub mod token;
pub mod tokenize;
pub mod tracing;

pub use config::Config;
pub use frequency::{FrequencyRecord, FrequencyTable};
pub use position::PositionIndex;
pub use proximity::ProximityResult;
pub use report::Report;
pub use set::BucketSet;
pub use token::Token;
