mod aggregation;
mod error;
mod record;
mod rect;
mod rule;
mod ruleset;
mod scalar;
mod span;

pub use aggregation::Aggregation;
pub(crate) use aggregation::{AddressFirst, Orientation, PortFirst, trimmed};
pub use error::BuildError;
pub use record::RuleRecord;
pub use rect::Rect;
pub use rule::{Exceptions, Rule, Trim};
pub use ruleset::{Resolution, RuleBuilder, RuleSet, RuleSetBuilder};
pub use scalar::Scalar;
pub use span::Span;
