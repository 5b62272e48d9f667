//! SLIP/slipmux wire format for serial links.
//!
//! This is the core value-add layer of slipbridge. Frames are delimited by
//! a reserved END byte with standard SLIP byte-stuffing, and the first byte
//! of every frame is a type tag multiplexing several payload kinds over one
//! serial channel:
//! - Diagnostic frames (0x0A): UTF-8 console text
//! - IPv4 tunnel frames (0x45-0x4F)
//! - IPv6 tunnel frames (0x60-0x6F)
//! - CoAP configuration frames (0xA9)
//!
//! The [`Decoder`] reassembles frames incrementally from arbitrarily
//! chunked input. No partial-frame handling in user code.

pub mod decoder;
pub mod error;
pub mod frame;
pub mod slip;

pub use decoder::Decoder;
pub use error::{FrameError, Result};
pub use frame::{Frame, FrameKind, COAP, DIAGNOSTIC, IPV4_END, IPV4_START, IPV6_END, IPV6_START};
pub use slip::{encode, END, ESC, ESC_END, ESC_ESC};
