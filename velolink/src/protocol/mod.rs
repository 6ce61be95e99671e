//! Binary display command protocol.
//!
//! Defines the drawing primitives understood by the remote display and
//! their fixed wire encoding. The link is slow and lossy, so commands are
//! compact: one unsigned 8-bit opcode, little-endian signed 16-bit
//! coordinates, and colors reduced to packed 16-bit RGB565.
//!
//! A frame is an ordered sequence of primitives; order is significant
//! (later primitives draw over earlier ones) and is preserved end-to-end.
//! No framing or length prefix is added here; chunking for the transport
//! is the transport's concern.

mod color;
mod encoder;
mod primitive;

pub use color::Rgb;
pub use encoder::{encode_frame, encode_primitive, encoded_len};
pub use primitive::{DrawPrimitive, PixelPoint, MAX_PIXEL_COORD, MIN_PIXEL_COORD};
