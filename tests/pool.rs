// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustkeyhash

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use hex_literal::hex;
use rustkeyhash::{Algorithm, HashAlgorithm, Hmac, Pool};

struct Vector {
	algorithm: Algorithm,
	key: &'static [u8],
	input: &'static [u8],
	size: usize,
	block_size: usize,
	expected: &'static [u8],
}

const VECTORS: &[Vector] = &[
	Vector {
		algorithm: Algorithm::Sha1,
		key: b"Jefe",
		input: b"what do ya want for nothing?",
		size: 20,
		block_size: 64,
		expected: &hex!("effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"),
	},
	Vector {
		algorithm: Algorithm::Sha256,
		key: &[0x0b; 20],
		input: b"Hi There",
		size: 32,
		block_size: 64,
		expected: &hex!("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"),
	},
	Vector {
		algorithm: Algorithm::Sha256,
		key: b"Jefe",
		input: b"what do ya want for nothing?",
		size: 32,
		block_size: 64,
		expected: &hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"),
	},
	Vector {
		algorithm: Algorithm::Sha1,
		key: &[0x0b; 20],
		input: b"Hi There",
		size: 20,
		block_size: 64,
		expected: &hex!("b617318655057264e28bc0b6fb378c8ef146be00"),
	},
];

#[test]
fn pooled_engines_reproduce_vectors() {
	let mut pools: HashMap<Algorithm, Pool> = HashMap::new();

	for (i, tt) in VECTORS.iter().enumerate() {
		let pool = pools
			.entry(tt.algorithm)
			.or_insert_with(|| Pool::new(tt.algorithm));
		let mut mac = pool.checkout(tt.key);
		assert_eq!(mac.size(), tt.size);
		assert_eq!(mac.block_size(), tt.block_size);

		for j in 0..2 {
			mac.write(tt.input);
			// repeated sums must agree
			for k in 0..2 {
				assert_eq!(
					mac.sum_to_vec(),
					tt.expected,
					"vector {}.{}.{}",
					i,
					j,
					k
				);
			}
			mac.reset();
		}
	}

	assert_eq!(pools[&Algorithm::Sha1].idle(), 1);
	assert_eq!(pools[&Algorithm::Sha256].idle(), 1);
}

#[test]
fn concurrent_callers_never_see_another_key() {
	let pool = Pool::new(Algorithm::Sha256);
	let workers = 16;
	let rounds = 200;

	thread::scope(|scope| {
		for worker in 0..workers {
			let pool = &pool;
			scope.spawn(move || {
				let key = format!("worker-{worker}-key").into_bytes();
				for round in 0..rounds {
					let msg = format!("round {round}");
					let expected =
						Hmac::mac(&Algorithm::Sha256, &key, [&msg]);
					assert_eq!(pool.mac(&key, [&msg]), expected);

					let mut mac = pool.checkout(&key);
					mac.write(msg.as_bytes());
					thread::yield_now();
					assert!(mac.verify(&expected));
				}
			});
		}
	});

	assert!(pool.idle() >= 1);
	assert!(pool.idle() <= workers);
}

#[test]
fn pool_can_share_a_selector() {
	let selector: Arc<dyn HashAlgorithm> = Arc::new(Algorithm::Sha512);
	let first = Pool::with_algorithm(Arc::clone(&selector));
	let second = Pool::with_algorithm(selector);
	assert_eq!(first.algorithm().identifier(), "sha512");
	assert_eq!(first.mac(b"k", [b"m"]), second.mac(b"k", [b"m"]));
}

#[test]
fn pooled_hkdf_fills_aligned_and_awkward_sizes() {
	let pool = Pool::new(Algorithm::Sha256);
	let secret = [0u8; 32];
	let salt = [0u8; 32];
	let info = [0u8; 32];

	let mut aligned = [0u8; 3 * 32];
	let mut awkward = [0u8; 3 * 32 - 1];
	assert_eq!(pool.expand(&mut aligned, &secret, &salt, &info), Ok(96));
	assert_eq!(pool.expand(&mut awkward, &secret, &salt, &info), Ok(95));
	assert_eq!(aligned[..95], awkward[..]);
}

#[test]
fn pooled_pbkdf2_rfc6070() {
	let pool = Pool::new(Algorithm::Sha1);
	let mut dk = [0u8; 20];
	assert_eq!(pool.derive(&mut dk, b"password", b"salt", 2), 20);
	assert_eq!(dk, hex!("ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957"));
}
