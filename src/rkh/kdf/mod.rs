// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustkeyhash
// File: src/rkh/kdf/mod.rs
// Author: rustkeyhash maintainers
//
// HMAC-based key derivation.

pub mod hkdf;
pub mod pbkdf2;

pub use hkdf::HkdfError;
