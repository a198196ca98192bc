// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustkeyhash
// File: src/rkh/mac/mod.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
//
// Keyed-hash engine and tag verification.

pub mod hmac;
pub mod verify;

pub use hmac::Hmac;
pub use verify::equal;
