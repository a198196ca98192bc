// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustkeyhash
// File: hmac.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Re-keyable HMAC engine (RFC 2104) over any [`HashAlgorithm`].
//!
//! Unlike a consuming `finalize`, [`Hmac::sum_into`] peeks at the running
//! inner state, so the same engine can emit a tag, keep absorbing, and be
//! re-keyed in place. HKDF, PBKDF2 and the pool all rely on this.

use std::fmt;
use std::io;

use zeroize::Zeroize;

use super::verify;
use crate::rkh::hash::{HashAlgorithm, Hasher};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

pub struct Hmac {
	inner: Box<dyn Hasher>,
	outer: Box<dyn Hasher>,
	// [ ipad | opad | scratch ], scratch holds the inner digest only
	// between `sum_into` writing it and the outer hasher absorbing it.
	pads: Vec<u8>,
	block_size: usize,
	output_size: usize,
}

impl Hmac {
	/// Builds an engine keyed with `key`. Any key length is accepted.
	pub fn new(algorithm: &dyn HashAlgorithm, key: &[u8]) -> Self {
		let inner = algorithm.new_hasher();
		let outer = algorithm.new_hasher();
		let block_size = inner.block_size();
		let output_size = inner.output_size();
		debug_assert!(
			output_size <= block_size,
			"{} digest is wider than its block",
			algorithm.identifier()
		);
		let mut mac = Self {
			inner,
			outer,
			pads: vec![0u8; 2 * block_size + output_size],
			block_size,
			output_size,
		};
		mac.set_key(key);
		mac
	}

	/// One-shot MAC over the concatenation of `parts`.
	pub fn mac<I>(
		algorithm: &dyn HashAlgorithm,
		key: &[u8],
		parts: I,
	) -> Vec<u8>
	where
		I: IntoIterator,
		I::Item: AsRef<[u8]>,
	{
		let mut mac = Self::new(algorithm, key);
		for part in parts {
			mac.write(part.as_ref());
		}
		mac.sum_to_vec()
	}

	/// Digest length in bytes.
	pub fn size(&self) -> usize {
		self.output_size
	}

	pub fn block_size(&self) -> usize {
		self.block_size
	}

	/// Re-derives both pads from `key` and re-primes the inner hasher.
	/// Previous pad contents are fully overwritten.
	pub fn set_key(&mut self, key: &[u8]) {
		let bs = self.block_size;
		let (ipad, rest) = self.pads.split_at_mut(bs);
		let opad = &mut rest[..bs];

		ipad.zeroize();
		self.inner.reset();
		if key.len() > bs {
			self.inner.write(key);
			self.inner.sum_into(&mut ipad[..self.output_size]);
			self.inner.reset();
		} else {
			ipad[..key.len()].copy_from_slice(key);
		}
		opad.copy_from_slice(ipad);
		ipad.iter_mut().for_each(|b| *b ^= IPAD);
		opad.iter_mut().for_each(|b| *b ^= OPAD);
		self.inner.write(ipad);
	}

	/// Zeroes both pads and resets both hashers. The engine computes
	/// nothing useful until the next [`Hmac::set_key`].
	pub fn clear_key(&mut self) {
		self.pads.as_mut_slice().zeroize();
		self.inner.reset();
		self.outer.reset();
	}

	/// Discards the message absorbed since the last key change or reset.
	pub fn reset(&mut self) {
		self.inner.reset();
		self.inner.write(&self.pads[..self.block_size]);
	}

	pub fn write(&mut self, data: &[u8]) {
		self.inner.write(data);
	}

	/// Writes the tag for everything written so far into `out`.
	///
	/// The inner accumulation is left untouched, so calling this again
	/// without an intervening write yields the same tag.
	///
	/// # Panics
	///
	/// If `out` is not exactly [`Hmac::size`] bytes long.
	pub fn sum_into(&mut self, out: &mut [u8]) {
		assert_eq!(
			out.len(),
			self.output_size,
			"hmac output buffer must match digest size"
		);
		let bs = self.block_size;
		let tail = &mut self.pads[bs..];
		self.inner.sum_into(&mut tail[bs..]);
		self.outer.reset();
		self.outer.write(tail);
		self.outer.sum_into(out);
		tail[bs..].zeroize();
	}

	/// Appends the tag to `out`.
	pub fn sum(&mut self, out: &mut Vec<u8>) {
		let start = out.len();
		out.resize(start + self.output_size, 0);
		self.sum_into(&mut out[start..]);
	}

	pub fn sum_to_vec(&mut self) -> Vec<u8> {
		let mut out = Vec::with_capacity(self.output_size);
		self.sum(&mut out);
		out
	}

	/// Compares the current tag against `expected` in constant time.
	pub fn verify(&mut self, expected: &[u8]) -> bool {
		let tag = self.sum_to_vec();
		verify::equal(&tag, expected)
	}

	#[cfg(test)]
	pub(crate) fn pads(&self) -> &[u8] {
		&self.pads[..2 * self.block_size]
	}
}

impl io::Write for Hmac {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.inner.write(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl Drop for Hmac {
	fn drop(&mut self) {
		self.pads.as_mut_slice().zeroize();
	}
}

impl fmt::Debug for Hmac {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Hmac")
			.field("block_size", &self.block_size)
			.field("output_size", &self.output_size)
			.finish_non_exhaustive()
	}
}
