// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustkeyhash

/// Invokes `$check!(algorithm, digest_type)` for every built-in digest.
macro_rules! for_each_digest {
	($check:ident) => {
		$check!(Algorithm::Md5, md5::Md5);
		$check!(Algorithm::Sha1, sha1::Sha1);
		$check!(Algorithm::Sha224, sha2::Sha224);
		$check!(Algorithm::Sha256, sha2::Sha256);
		$check!(Algorithm::Sha384, sha2::Sha384);
		$check!(Algorithm::Sha512, sha2::Sha512);
		$check!(Algorithm::Sha512_256, sha2::Sha512_256);
		$check!(Algorithm::Sha3_224, sha3::Sha3_224);
		$check!(Algorithm::Sha3_256, sha3::Sha3_256);
		$check!(Algorithm::Sha3_384, sha3::Sha3_384);
		$check!(Algorithm::Sha3_512, sha3::Sha3_512);
		$check!(Algorithm::Blake2b, blake2::Blake2b512);
		$check!(Algorithm::Blake2s, blake2::Blake2s256);
		$check!(Algorithm::Ripemd160, ripemd::Ripemd160);
		$check!(Algorithm::Sm3, sm3::Sm3);
		$check!(Algorithm::Streebog256, streebog::Streebog256);
		$check!(Algorithm::Streebog512, streebog::Streebog512);
		$check!(Algorithm::Whirlpool, whirlpool::Whirlpool);
	};
}

/// Keys around the interesting block-size boundaries.
pub fn keys(block_size: usize) -> Vec<Vec<u8>> {
	vec![
		Vec::new(),
		b"k".to_vec(),
		(0..block_size as u8).collect(),
		vec![0xa5; block_size + 1],
		vec![0x3c; 3 * block_size],
	]
}

pub const MESSAGES: &[&[u8]] = &[
	b"",
	b"Hi There",
	b"what do ya want for nothing?",
	&[0xdd; 200],
];
