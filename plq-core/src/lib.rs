pub mod config;
pub mod dates;
pub mod field;
pub mod filter;
pub mod form;
pub mod keys;
pub mod keywords;
pub mod normalize;
pub mod range;
pub mod sink;

pub use config::Config;
pub use field::{FieldValue, TimeUnit, TimeValidity};
pub use filter::{Attribute, FilterPayload};
pub use form::{FormValidity, QueryForm};
pub use range::Boundary;
pub use sink::{JsonSink, QuerySink};
