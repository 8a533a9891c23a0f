//! Cross-reference chain recording and resolution.
//!
//! An incrementally updated file accumulates one cross-reference section per
//! revision. The types here record those sections as a scanner discovers
//! them and reconcile them into the single object-location table and trailer
//! an application should see.

pub mod index;
pub mod resolver;
pub mod section;

pub use index::*;
pub use resolver::*;
pub use section::*;
