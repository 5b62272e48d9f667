use bytes::{BufMut, Bytes, BytesMut};
use tracing::{debug, trace};

use crate::slip::{END, ESC, ESC_END, ESC_ESC};

const INITIAL_BUFFER_CAPACITY: usize = 1024;

/// Incremental SLIP decoder.
///
/// Reassembles discrete frames from an arbitrarily chunked serial byte
/// stream, undoing byte-stuffing and stripping leading idle padding (zero
/// bytes a device may emit on the line before its first real frame after
/// reset). One instance per serial channel; the accumulation buffer only
/// ever holds bytes belonging to the frame currently being assembled.
///
/// Decoding is infallible. An ESC followed by neither ESC_END nor ESC_ESC
/// passes the byte through unescaped, matching SLIP's lenient spirit.
#[derive(Debug, Default)]
pub struct Decoder {
    buf: BytesMut,
    escaped: bool,
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            escaped: false,
        }
    }

    /// Consume one byte from the wire.
    ///
    /// Returns the completed frame when `byte` is a frame delimiter,
    /// otherwise `None`. The escape flag applies to exactly one following
    /// byte and clears after any consumed byte that was not itself ESC.
    pub fn feed(&mut self, byte: u8) -> Option<Bytes> {
        if byte == ESC {
            self.escaped = true;
            return None;
        }

        if byte == END {
            self.escaped = false;
            return Some(self.take_frame());
        }

        let decoded = match byte {
            ESC_END if self.escaped => END,
            ESC_ESC if self.escaped => ESC,
            other => other,
        };
        self.escaped = false;
        self.buf.put_u8(decoded);
        None
    }

    /// Feed an input chunk byte by byte, collecting completed frames.
    ///
    /// Purely a fold over [`Decoder::feed`]: splitting the input at any
    /// byte boundary yields the identical frame sequence.
    pub fn process(&mut self, chunk: &[u8]) -> Vec<Bytes> {
        let mut frames = Vec::new();
        for &byte in chunk {
            if let Some(frame) = self.feed(byte) {
                frames.push(frame);
            }
        }
        frames
    }

    /// Emit the accumulated frame and reset for the next one.
    fn take_frame(&mut self) -> Bytes {
        let raw = self.buf.split().freeze();
        let padding = raw.iter().take_while(|&&b| b == 0x00).count();
        if padding > 0 {
            trace!(padding, "stripped leading idle padding");
        }
        let frame = raw.slice(padding..);
        debug!(len = frame.len(), "frame boundary");
        frame
    }
}
