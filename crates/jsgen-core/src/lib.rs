/*! JavaScript IR for compiler backends.
 *
 * A backend that emits JavaScript needs one closed model of every construct it can produce, so
 * that unrelated passes can build, rewrite and inspect trees without agreeing on anything but the
 * node type. This crate provides that model, the operator vocabulary, and the generic walks that
 * every pass goes through.
 *
 * Nothing here validates that a tree is legal JavaScript. Construction, traversal and equality are
 * total; a `continue` outside a loop is the producer's problem and only shows up once the emitted
 * text is run.
 */

pub mod node;
pub mod ops;
pub mod persist;
pub mod traversal;

pub use node::{Js, ObjectProperty};
pub use ops::{BinaryOperator, UnaryOperator};
pub use persist::{from_json, to_json};
pub use traversal::{All, Any, Monoid};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Malformed IR: {0}")]
    Json(#[from] serde_json::Error),
}
