//! Symbol detection and overlay drawing.
//!
//! `Decoder` is the capability "give me the symbols in this frame"; `QrDecoder`
//! provides it through `rqrr`. The rest of the crate turns a symbol's boundary
//! into a drawable polygon and strokes it onto a packed color frame.

mod decoder;
pub use decoder::*;

mod draw;
pub use draw::*;

mod hull;
pub use hull::*;

mod symbol;
pub use symbol::*;
