/*! JavaScript IR and pretty printer for compiler backends.
 *
 * Single import for everything a backend needs: build `Js` trees, run them through rewrite and
 * fold passes, and print the result as JavaScript source.
 */

pub use jsgen_core as core;
pub use jsgen_emit as emit;

pub use jsgen_core::{
    node::{Js, ObjectProperty},
    ops::{BinaryOperator, UnaryOperator},
    traversal::{All, Any, Monoid},
};

pub use jsgen_emit::{print_js, print_program, EmitterConfig, IndentStyle, JsEmitter, JsPrinter};
