// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustkeyhash
// File: hkdf.rs
// Author: rustkeyhash maintainers

//! HKDF (RFC 5869) with extract and expand fused into one pass over a
//! single re-keyable [`Hmac`].

use std::fmt;

use tracing::debug;
use zeroize::Zeroizing;

use crate::rkh::hash::HashAlgorithm;
use crate::rkh::mac::Hmac;

/// The expand counter is one byte and starts at 1.
pub const MAX_BLOCKS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HkdfError {
	CapacityExceeded { requested: usize, max: usize },
}

impl fmt::Display for HkdfError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CapacityExceeded { requested, max } => {
				write!(
					f,
					"requested HKDF length {} exceeds maximum {}",
					requested, max
				)
			}
		}
	}
}

impl std::error::Error for HkdfError {}

/// Largest output HKDF can produce with a digest of `output_size` bytes.
pub fn max_length(output_size: usize) -> usize {
	MAX_BLOCKS * output_size
}

/// Fills `out` with keying material derived from `secret`, `salt` and
/// `info`, returning the number of bytes written.
///
/// ```
/// use rustkeyhash::rkh::hash::Algorithm;
/// use rustkeyhash::rkh::kdf::hkdf;
///
/// let mut okm = [0u8; 42];
/// let n = hkdf::expand(&Algorithm::Sha256, &mut okm, b"ikm", b"salt", b"info")
///     .expect("42 bytes is within the SHA-256 limit");
/// assert_eq!(n, 42);
/// ```
pub fn expand(
	algorithm: &dyn HashAlgorithm,
	out: &mut [u8],
	secret: &[u8],
	salt: &[u8],
	info: &[u8],
) -> Result<usize, HkdfError> {
	let mut mac = Hmac::new(algorithm, salt);
	expand_with(&mut mac, out, secret, info)
}

/// Same as [`expand`] but drives an engine already keyed with the salt.
/// On return the engine is keyed with the pseudorandom key; callers that
/// keep the engine around should clear or re-key it.
pub fn expand_with(
	mac: &mut Hmac,
	out: &mut [u8],
	secret: &[u8],
	info: &[u8],
) -> Result<usize, HkdfError> {
	let len = out.len();
	if len == 0 {
		return Ok(0);
	}
	let size = mac.size();
	let max = max_length(size);
	if len > max {
		debug!(requested = len, max, "hkdf output too long");
		return Err(HkdfError::CapacityExceeded { requested: len, max });
	}

	// A trailing partial block needs a full digest worth of room that
	// `out` cannot give; exact multiples run without extra allocation.
	let rem = len % size;
	let mut scratch = Zeroizing::new(if rem == 0 {
		Vec::new()
	} else {
		vec![0u8; size]
	});
	// blocks before `tail` are chained through `out` itself
	let tail = if rem == 0 { len - size } else { len - rem };

	mac.write(secret);
	{
		let prk = if rem == 0 {
			&mut out[..size]
		} else {
			&mut scratch[..]
		};
		mac.sum_into(prk);
		mac.set_key(prk);
	}
	mac.write(info);
	let mut counter = 1u8;
	mac.write(&[counter]);

	let mut i = 0;
	while i < tail {
		let block = &mut out[i..i + size];
		mac.sum_into(block);
		mac.reset();
		mac.write(block);
		mac.write(info);
		counter += 1;
		mac.write(&[counter]);
		i += size;
	}

	if rem == 0 {
		mac.sum_into(&mut out[i..]);
	} else {
		mac.sum_into(&mut scratch[..]);
		out[i..].copy_from_slice(&scratch[..rem]);
	}
	Ok(len)
}
