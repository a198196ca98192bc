// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustkeyhash
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! HMAC, HKDF and PBKDF2 over any RustCrypto digest, with a pool that
//! recycles MAC state between calls.
//!
//! ```
//! use rustkeyhash::rkh::hash::Algorithm;
//! use rustkeyhash::rkh::pool::Pool;
//!
//! let pool = Pool::new(Algorithm::Sha256);
//! let tag = pool.mac(b"key", ["hello ", "world"]);
//! assert!(rustkeyhash::rkh::mac::equal(&tag, &pool.mac(b"key", [b"hello world"])));
//!
//! let mut okm = [0u8; 64];
//! pool.expand(&mut okm, b"input keying material", b"salt", b"context")
//!     .expect("64 bytes fits in 255 blocks");
//! ```

pub mod rkh {
	pub mod hash;
	pub mod kdf;
	pub mod mac;
	pub mod pool;
}

pub use rkh::hash::{Algorithm, DigestAlgorithm, HashAlgorithm, Hasher};
pub use rkh::kdf::HkdfError;
pub use rkh::mac::Hmac;
pub use rkh::pool::{Pool, PooledHmac};
