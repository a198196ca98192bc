// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustkeyhash
// File: pbkdf2.rs
// Author: rustkeyhash maintainers

//! PBKDF2 (RFC 8018) driven through a reusable [`Hmac`].

use zeroize::Zeroizing;

use crate::rkh::hash::HashAlgorithm;
use crate::rkh::mac::Hmac;

/// Fills `out` with a key stretched from `password` and `salt`.
///
/// `iterations` of 0 is treated like 1: every block costs at least one
/// HMAC evaluation. Returns the number of bytes written.
///
/// ```
/// use rustkeyhash::rkh::hash::Algorithm;
/// use rustkeyhash::rkh::kdf::pbkdf2;
///
/// let mut dk = [0u8; 20];
/// pbkdf2::derive(&Algorithm::Sha1, &mut dk, b"password", b"salt", 1);
/// assert_eq!(dk[..4], [0x0cu8, 0x60, 0xc8, 0x0f]);
/// ```
pub fn derive(
	algorithm: &dyn HashAlgorithm,
	out: &mut [u8],
	password: &[u8],
	salt: &[u8],
	iterations: u32,
) -> usize {
	let mut mac = Hmac::new(algorithm, password);
	derive_with(&mut mac, out, salt, iterations)
}

/// Same as [`derive`] but drives an engine already keyed with the
/// password. The key is left in place.
pub fn derive_with(
	mac: &mut Hmac,
	out: &mut [u8],
	salt: &[u8],
	iterations: u32,
) -> usize {
	let size = mac.size();
	let mut u = Zeroizing::new(vec![0u8; size]);
	let mut block = 0u32;

	for chunk in out.chunks_mut(size) {
		block = block.wrapping_add(1);
		mac.reset();
		mac.write(salt);
		mac.write(&block.to_be_bytes());
		mac.sum_into(&mut u);

		// the last chunk may be short; only its prefix is accumulated
		let n = chunk.len();
		chunk.copy_from_slice(&u[..n]);
		for _ in 1..iterations {
			mac.reset();
			mac.write(&u);
			mac.sum_into(&mut u);
			chunk
				.iter_mut()
				.zip(u.iter())
				.for_each(|(acc, x)| *acc ^= x);
		}
	}
	out.len()
}
