/*! Turn `Js` trees into JavaScript source text.
 *
 * The printer is the only consumer of the whole node model: every variant, however a pass built
 * it, has to come out as syntactically valid, deterministically formatted text. Formatting knobs
 * live in `EmitterConfig`; writing to files or sockets goes through the `Emitter` trait.
 */

pub mod config;
pub mod emitter;
pub mod literal;
pub mod precedence;
pub mod printer;

pub use config::{EmitterConfig, IndentStyle};
pub use emitter::{EmitContext, EmitResult, Emittable, Emitter};
pub use precedence::Precedence;
pub use printer::{print_js, print_program, JsEmitter, JsPrinter};
