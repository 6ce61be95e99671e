//! Wire encoding of drawing primitives.
//!
//! Stateless, pure functions mapping one primitive to its bytes. Each
//! command is an unsigned 8-bit opcode followed by its fixed payload:
//!
//! | Opcode | Name          | Payload                               |
//! |--------|---------------|---------------------------------------|
//! | 1      | new-frame     | color (2B)                            |
//! | 2      | show-frame    | none                                  |
//! | 3      | draw-line     | x0,y0,x1,y1 (8B), color (2B), width (1B) |
//! | 4      | draw-circle   | cx,cy (4B), radius (1B), color (2B)   |
//! | 5      | fill-circle   | cx,cy (4B), radius (1B), color (2B)   |
//! | 6      | fill-triangle | x1..y3 (12B), color (2B)              |
//!
//! Multi-byte fields are little-endian; coordinates are signed 16-bit and
//! colors packed RGB565.

use bytes::{BufMut, Bytes, BytesMut};

use super::{DrawPrimitive, PixelPoint, Rgb};

const OP_NEW_FRAME: u8 = 1;
const OP_SHOW_FRAME: u8 = 2;
const OP_DRAW_LINE: u8 = 3;
const OP_DRAW_CIRCLE: u8 = 4;
const OP_FILL_CIRCLE: u8 = 5;
const OP_FILL_TRIANGLE: u8 = 6;

/// Encoded size of a primitive in bytes, opcode included.
pub fn encoded_len(primitive: &DrawPrimitive) -> usize {
    match primitive {
        DrawPrimitive::Clear(_) => 3,
        DrawPrimitive::Present => 1,
        DrawPrimitive::Line { .. } => 12,
        DrawPrimitive::Circle { .. } | DrawPrimitive::Disc { .. } => 8,
        DrawPrimitive::Triangle { .. } => 15,
    }
}

/// Append the wire bytes of one primitive to `out`.
pub fn encode_primitive(primitive: &DrawPrimitive, out: &mut BytesMut) {
    match *primitive {
        DrawPrimitive::Clear(color) => {
            out.put_u8(OP_NEW_FRAME);
            put_color(out, color);
        }
        DrawPrimitive::Present => {
            out.put_u8(OP_SHOW_FRAME);
        }
        DrawPrimitive::Line {
            from,
            to,
            color,
            width,
        } => {
            out.put_u8(OP_DRAW_LINE);
            put_point(out, from);
            put_point(out, to);
            put_color(out, color);
            out.put_u8(width);
        }
        DrawPrimitive::Circle {
            center,
            radius,
            color,
        } => {
            out.put_u8(OP_DRAW_CIRCLE);
            put_point(out, center);
            out.put_u8(radius);
            put_color(out, color);
        }
        DrawPrimitive::Disc {
            center,
            radius,
            color,
        } => {
            out.put_u8(OP_FILL_CIRCLE);
            put_point(out, center);
            out.put_u8(radius);
            put_color(out, color);
        }
        DrawPrimitive::Triangle { p1, p2, p3, color } => {
            out.put_u8(OP_FILL_TRIANGLE);
            put_point(out, p1);
            put_point(out, p2);
            put_point(out, p3);
            put_color(out, color);
        }
    }
}

/// Encode a whole frame: the concatenation of its primitives in order.
///
/// No framing or length prefix is added; the result is handed to the
/// transport as-is.
pub fn encode_frame(primitives: &[DrawPrimitive]) -> Bytes {
    let total: usize = primitives.iter().map(encoded_len).sum();
    let mut out = BytesMut::with_capacity(total);
    for primitive in primitives {
        encode_primitive(primitive, &mut out);
    }
    out.freeze()
}

fn put_point(out: &mut BytesMut, point: PixelPoint) {
    out.put_i16_le(point.x);
    out.put_i16_le(point.y);
}

fn put_color(out: &mut BytesMut, color: Rgb) {
    out.put_u16_le(color.packed565());
}
