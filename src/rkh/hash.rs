// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustkeyhash
// File: hash.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Hash capability and algorithm selectors the keyed constructions are
//! built on. Any RustCrypto digest that can be reset, cloned and reports
//! its block size plugs in through the blanket [`Hasher`] impl.

use std::fmt;
use std::marker::PhantomData;

use digest::core_api::BlockSizeUser;
use digest::{Digest, Output, Reset};
use strum::{EnumIter, IntoStaticStr};

/// Incremental hash state driven by the keyed constructions.
pub trait Hasher: Send {
	/// Drops everything absorbed so far.
	fn reset(&mut self);

	/// Absorbs `data` into the running state.
	fn write(&mut self, data: &[u8]);

	/// Writes the digest of everything absorbed so far into `out`
	/// without disturbing the running state. `out` must be exactly
	/// [`Hasher::output_size`] bytes long.
	fn sum_into(&self, out: &mut [u8]);

	fn output_size(&self) -> usize;

	fn block_size(&self) -> usize;
}

impl<D> Hasher for D
where
	D: Digest + Reset + BlockSizeUser + Clone + Send,
{
	fn reset(&mut self) {
		Reset::reset(self);
	}

	fn write(&mut self, data: &[u8]) {
		Digest::update(self, data);
	}

	fn sum_into(&self, out: &mut [u8]) {
		// finalizing a copy leaves our own state untouched
		Digest::finalize_into(
			self.clone(),
			<Output<D>>::from_mut_slice(out),
		);
	}

	fn output_size(&self) -> usize {
		<D as Digest>::output_size()
	}

	fn block_size(&self) -> usize {
		<D as BlockSizeUser>::block_size()
	}
}

/// Factory for fresh, independent [`Hasher`] instances of one algorithm.
///
/// Every hasher produced by one selector reports the same block and
/// output size.
pub trait HashAlgorithm: Send + Sync {
	fn new_hasher(&self) -> Box<dyn Hasher>;

	/// Stable lowercase name, e.g. `sha256`.
	fn identifier(&self) -> &str;
}

/// Digest cores shipped with the crate.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr,
)]
pub enum Algorithm {
	#[strum(serialize = "md5")]
	Md5,
	#[strum(serialize = "sha1")]
	Sha1,
	#[strum(serialize = "sha224")]
	Sha224,
	#[strum(serialize = "sha256")]
	Sha256,
	#[strum(serialize = "sha384")]
	Sha384,
	#[strum(serialize = "sha512")]
	Sha512,
	#[strum(serialize = "sha512-256")]
	Sha512_256,
	#[strum(serialize = "sha3-224")]
	Sha3_224,
	#[strum(serialize = "sha3-256")]
	Sha3_256,
	#[strum(serialize = "sha3-384")]
	Sha3_384,
	#[strum(serialize = "sha3-512")]
	Sha3_512,
	#[strum(serialize = "blake2b")]
	Blake2b,
	#[strum(serialize = "blake2s")]
	Blake2s,
	#[strum(serialize = "ripemd160")]
	Ripemd160,
	#[strum(serialize = "sm3")]
	Sm3,
	#[strum(serialize = "streebog256")]
	Streebog256,
	#[strum(serialize = "streebog512")]
	Streebog512,
	#[strum(serialize = "whirlpool")]
	Whirlpool,
}

impl Algorithm {
	pub fn identifier(self) -> &'static str {
		self.into()
	}

	/// Legacy digests are still accepted (RFC 6070 vectors use SHA-1)
	/// but callers may want to warn about them.
	pub fn is_legacy(self) -> bool {
		matches!(self, Self::Md5 | Self::Sha1 | Self::Ripemd160)
	}

	pub fn output_size(self) -> usize {
		self.new_hasher().output_size()
	}

	pub fn block_size(self) -> usize {
		self.new_hasher().block_size()
	}
}

impl HashAlgorithm for Algorithm {
	fn new_hasher(&self) -> Box<dyn Hasher> {
		match self {
			Self::Md5 => Box::new(md5::Md5::new()),
			Self::Sha1 => Box::new(sha1::Sha1::new()),
			Self::Sha224 => Box::new(sha2::Sha224::new()),
			Self::Sha256 => Box::new(sha2::Sha256::new()),
			Self::Sha384 => Box::new(sha2::Sha384::new()),
			Self::Sha512 => Box::new(sha2::Sha512::new()),
			Self::Sha512_256 => Box::new(sha2::Sha512_256::new()),
			Self::Sha3_224 => Box::new(sha3::Sha3_224::new()),
			Self::Sha3_256 => Box::new(sha3::Sha3_256::new()),
			Self::Sha3_384 => Box::new(sha3::Sha3_384::new()),
			Self::Sha3_512 => Box::new(sha3::Sha3_512::new()),
			Self::Blake2b => Box::new(blake2::Blake2b512::new()),
			Self::Blake2s => Box::new(blake2::Blake2s256::new()),
			Self::Ripemd160 => Box::new(ripemd::Ripemd160::new()),
			Self::Sm3 => Box::new(sm3::Sm3::new()),
			Self::Streebog256 => {
				Box::new(streebog::Streebog256::new())
			}
			Self::Streebog512 => {
				Box::new(streebog::Streebog512::new())
			}
			Self::Whirlpool => Box::new(whirlpool::Whirlpool::new()),
		}
	}

	fn identifier(&self) -> &str {
		Algorithm::identifier(*self)
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.identifier())
	}
}

/// Returned when an identifier names no known digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unsupported hash algorithm `{}`", self.0)
	}
}

impl std::error::Error for UnknownAlgorithm {}

impl std::str::FromStr for Algorithm {
	type Err = UnknownAlgorithm;

	/// Accepts the bare digest name as well as `hmac-`, `hkdf-` and
	/// `pbkdf2-` prefixed forms, case-insensitively.
	fn from_str(value: &str) -> Result<Self, Self::Err> {
		use strum::IntoEnumIterator;

		let lowered = value.to_ascii_lowercase();
		let name = ["hmac-", "hkdf-", "pbkdf2-"]
			.iter()
			.find_map(|prefix| lowered.strip_prefix(prefix))
			.unwrap_or(lowered.as_str());
		Self::iter()
			.find(|alg| alg.identifier() == name)
			.ok_or_else(|| UnknownAlgorithm(value.to_string()))
	}
}

/// Selector for any digest type outside the built-in catalog.
///
/// ```
/// use rustkeyhash::rkh::hash::DigestAlgorithm;
/// use rustkeyhash::rkh::mac::hmac::Hmac;
///
/// let alg = DigestAlgorithm::<sha2::Sha256>::new("sha256");
/// let mac = Hmac::mac(&alg, b"key", &[b"message"]);
/// assert_eq!(mac.len(), 32);
/// ```
pub struct DigestAlgorithm<D> {
	identifier: &'static str,
	_digest: PhantomData<fn() -> D>,
}

impl<D> DigestAlgorithm<D> {
	pub const fn new(identifier: &'static str) -> Self {
		Self {
			identifier,
			_digest: PhantomData,
		}
	}
}

impl<D> Clone for DigestAlgorithm<D> {
	fn clone(&self) -> Self {
		Self::new(self.identifier)
	}
}

impl<D> fmt::Debug for DigestAlgorithm<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("DigestAlgorithm")
			.field(&self.identifier)
			.finish()
	}
}

impl<D> HashAlgorithm for DigestAlgorithm<D>
where
	D: Digest + Reset + BlockSizeUser + Clone + Send + 'static,
{
	fn new_hasher(&self) -> Box<dyn Hasher> {
		Box::new(D::new())
	}

	fn identifier(&self) -> &str {
		self.identifier
	}
}
