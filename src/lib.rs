pub mod annotate;
pub mod cache;
pub mod context;
pub mod corpus;
pub mod emoji;
pub mod error;
pub mod lang;
pub mod prepare;
pub mod report;
pub mod sink;
pub mod stats;
