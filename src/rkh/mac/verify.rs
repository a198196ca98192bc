// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustkeyhash
// File: verify.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Tag comparison for MAC verification.

use subtle::ConstantTimeEq;

/// Compares two MACs without leaking where they differ.
///
/// Length is not treated as secret: tags of different lengths come from
/// different algorithms, so a mismatch returns early.
pub fn equal(mac1: &[u8], mac2: &[u8]) -> bool {
	if mac1.len() != mac2.len() {
		return false;
	}
	mac1.ct_eq(mac2).into()
}

#[cfg(test)]
mod tests {
	use super::equal;

	#[test]
	fn compares_content_and_length() {
		assert!(equal(b"", b""));
		assert!(equal(b"tag", b"tag"));
		assert!(!equal(b"tag", b"tah"));
		assert!(!equal(b"tag", b"tag\0"));
	}
}
