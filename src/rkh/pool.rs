// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustkeyhash
// File: pool.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Recycling pool of [`Hmac`] engines bound to one hash algorithm.
//!
//! Engines are re-keyed on checkout and scrubbed with
//! [`Hmac::clear_key`] when the [`PooledHmac`] guard goes out of scope,
//! so a later checkout never sees a previous caller's key. The pool is
//! unbounded and never waits: an empty free list means a fresh engine.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::trace;

use crate::rkh::hash::HashAlgorithm;
use crate::rkh::kdf::hkdf::{self, HkdfError};
use crate::rkh::kdf::pbkdf2;
use crate::rkh::mac::Hmac;

pub struct Pool {
	algorithm: Arc<dyn HashAlgorithm>,
	idle: Mutex<Vec<Hmac>>,
}

impl Pool {
	pub fn new<A>(algorithm: A) -> Self
	where
		A: HashAlgorithm + 'static,
	{
		Self::with_algorithm(Arc::new(algorithm))
	}

	/// Builds a pool around a selector that is shared elsewhere.
	pub fn with_algorithm(algorithm: Arc<dyn HashAlgorithm>) -> Self {
		Self {
			algorithm,
			idle: Mutex::new(Vec::new()),
		}
	}

	pub fn algorithm(&self) -> &dyn HashAlgorithm {
		&*self.algorithm
	}

	/// Number of engines currently waiting for reuse.
	pub fn idle(&self) -> usize {
		self.free_list().len()
	}

	/// Hands out an engine keyed with `key`, reusing an idle one when
	/// available. The engine returns to the pool when the guard drops.
	pub fn checkout(&self, key: &[u8]) -> PooledHmac<'_> {
		let cached = self.free_list().pop();
		let mac = match cached {
			Some(mut mac) => {
				trace!(
					algorithm = self.algorithm.identifier(),
					"reusing pooled hmac"
				);
				mac.set_key(key);
				mac
			}
			None => {
				trace!(
					algorithm = self.algorithm.identifier(),
					"allocating hmac"
				);
				Hmac::new(&*self.algorithm, key)
			}
		};
		PooledHmac {
			pool: self,
			mac: Some(mac),
		}
	}

	/// HMAC of the concatenated `parts` under `key`.
	pub fn mac<I>(&self, key: &[u8], parts: I) -> Vec<u8>
	where
		I: IntoIterator,
		I::Item: AsRef<[u8]>,
	{
		let mut out = Vec::new();
		self.mac_into(&mut out, key, parts);
		out
	}

	/// Like [`Pool::mac`] but appends the tag to `out`.
	pub fn mac_into<I>(&self, out: &mut Vec<u8>, key: &[u8], parts: I)
	where
		I: IntoIterator,
		I::Item: AsRef<[u8]>,
	{
		let mut mac = self.checkout(key);
		for part in parts {
			mac.write(part.as_ref());
		}
		mac.sum(out);
	}

	/// HKDF into `out`, see [`hkdf::expand`].
	pub fn expand(
		&self,
		out: &mut [u8],
		secret: &[u8],
		salt: &[u8],
		info: &[u8],
	) -> Result<usize, HkdfError> {
		let mut mac = self.checkout(salt);
		hkdf::expand_with(&mut mac, out, secret, info)
	}

	/// PBKDF2 into `out`, see [`pbkdf2::derive`].
	pub fn derive(
		&self,
		out: &mut [u8],
		password: &[u8],
		salt: &[u8],
		iterations: u32,
	) -> usize {
		let mut mac = self.checkout(password);
		pbkdf2::derive_with(&mut mac, out, salt, iterations)
	}

	fn put(&self, mut mac: Hmac) {
		mac.clear_key();
		self.free_list().push(mac);
		trace!(
			algorithm = self.algorithm.identifier(),
			"returned hmac to pool"
		);
	}

	// Only cleared engines are ever stored, so a poisoned list is still
	// safe to use.
	fn free_list(&self) -> MutexGuard<'_, Vec<Hmac>> {
		self.idle.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

impl fmt::Debug for Pool {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Pool")
			.field("algorithm", &self.algorithm.identifier())
			.field("idle", &self.idle())
			.finish()
	}
}

/// Exclusive loan of a pooled [`Hmac`]. Dereferences to the engine.
pub struct PooledHmac<'a> {
	pool: &'a Pool,
	// Some until dropped or released
	mac: Option<Hmac>,
}

impl PooledHmac<'_> {
	/// Returns the engine to the pool now instead of at scope end.
	pub fn release(self) {}
}

impl Deref for PooledHmac<'_> {
	type Target = Hmac;

	fn deref(&self) -> &Hmac {
		self.mac.as_ref().expect("pooled hmac used after release")
	}
}

impl DerefMut for PooledHmac<'_> {
	fn deref_mut(&mut self) -> &mut Hmac {
		self.mac.as_mut().expect("pooled hmac used after release")
	}
}

impl Drop for PooledHmac<'_> {
	fn drop(&mut self) {
		if let Some(mac) = self.mac.take() {
			self.pool.put(mac);
		}
	}
}

impl fmt::Debug for PooledHmac<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("PooledHmac").field(&self.mac).finish()
	}
}
