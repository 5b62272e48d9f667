use bytes::{BufMut, BytesMut};

/// Frame delimiter.
pub const END: u8 = 0xC0;

/// Escape introducer.
pub const ESC: u8 = 0xDB;

/// Escaped literal END (`ESC ESC_END` on the wire).
pub const ESC_END: u8 = 0xDC;

/// Escaped literal ESC (`ESC ESC_ESC` on the wire).
pub const ESC_ESC: u8 = 0xDD;

/// Encode a frame (tag + payload) into SLIP wire bytes.
///
/// Emits a leading END to flush any line noise on the receiver, then the
/// frame with reserved bytes stuffed, then the closing END:
///
/// ```text
/// ┌─────┬──────────────────────────────────┬─────┐
/// │ END │ frame bytes, END→ESC ESC_END,    │ END │
/// │     │ ESC→ESC ESC_ESC                  │     │
/// └─────┴──────────────────────────────────┴─────┘
/// ```
pub fn encode(frame: &[u8], dst: &mut BytesMut) {
    dst.reserve(frame.len() + 2);
    dst.put_u8(END);
    for &byte in frame {
        match byte {
            END => {
                dst.put_u8(ESC);
                dst.put_u8(ESC_END);
            }
            ESC => {
                dst.put_u8(ESC);
                dst.put_u8(ESC_ESC);
            }
            other => dst.put_u8(other),
        }
    }
    dst.put_u8(END);
}
