//! Declaration schema for period lists.
//!
//! A declaration is `{ "periods": [ ... ] }` where every entry carries a
//! `type` tag (`weekly`, `daily`, `once`, `never`, `always`), a `name`, a
//! `description` and, for bounded kinds, `from`/`to` edge objects.
//!
//! Decoding is two-pass: the [`PeriodEnvelope`] reads only the tag, the tag
//! is parsed into a [`PeriodKind`], and the raw entry is then decoded into the
//! matching concrete period. JSON and YAML share the same pipeline.

mod declaration;
mod envelope;
mod error;
mod kind;


pub use declaration::*;
pub use envelope::*;
pub use error::*;
pub use kind::*;
