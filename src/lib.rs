//! Lazy, pull-based sequence pipelines.
//!
//! Build a pipeline from a source adapter on [`Downstream`], chain
//! intermediate operations, then run exactly one terminal operation:
//!
//! ```
//! use downstream::{BaseStream, Collectors, Downstream};
//!
//! let rows = vec![vec![1, 2, 3], vec![], vec![4, 5]];
//! let flat = Downstream::of(rows)
//!     .flat_map(|row| row)?
//!     .limit(4)?
//!     .collect(Collectors::to_vec())?;
//! assert_eq!(flat, vec![1, 2, 3, 4]);
//! # Ok::<(), downstream::StreamError>(())
//! ```

pub mod base_stream;
pub mod collectors;
pub mod config;
pub mod error;
pub mod lambdas;
pub mod number;
pub mod optional;
pub mod pipeline;
pub mod stage;
pub mod stream;

pub use base_stream::BaseStream;
pub use collectors::{Collector, Collectors};
pub use config::StreamConfig;
pub use error::{StreamError, StreamResult};
pub use number::Number;
pub use optional::Optional;
pub use pipeline::{Drain, IntoIter, Pipeline};
pub use stream::{Downstream, NumberStream, Stream};
