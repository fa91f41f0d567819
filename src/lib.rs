mod coalesce;
mod error;
mod overlay;
pub mod parse;
mod render;
mod resolve;
#[cfg(feature = "serde")]
mod serial;
mod types;

pub use error::Error;
pub use render::RenderOptions;
pub use resolve::{coalesce, overlay, prune, resolve};
pub use types::{
    Aggregation, BuildError, Exceptions, Rect, Resolution, Rule, RuleBuilder, RuleRecord, RuleSet,
    RuleSetBuilder, Scalar, Span, Trim,
};
