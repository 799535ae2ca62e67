//! Randomness configured at group construction.
//!
//! A [RandomSource] either pulls from the operating system on every use or hands out
//! handles onto one injected stream. The second mode makes every draw a group performs
//! reproducible, which is what test vectors and protocol-mandated derivations need.

use crate::xof::xof;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use std::{
    fmt::{Debug, Formatter},
    sync::{Arc, Mutex, MutexGuard},
};
use tracing::debug;

type Shared = Arc<Mutex<dyn RngCore + Send + 'static>>;

#[derive(Clone)]
enum Source {
    Secure,
    Stream(Shared),
}

/// Where a group draws its randomness from.
///
/// Either the operating system's secure source (fresh per use) or one stream shared by
/// every handle and every clone. A shared stream can only be installed through
/// [RandomSource::from_stream] or [RandomSource::from_seed], so it is always a
/// [CryptoRng]:
///
/// ```compile_fail
/// use commonware_algebra::RandomSource;
/// use rand::rngs::mock::StepRng;
/// use std::sync::{Arc, Mutex};
///
/// let source = RandomSource::Stream(Arc::new(Mutex::new(StepRng::new(0, 0))));
/// ```
#[derive(Clone)]
pub struct RandomSource(Source);

impl RandomSource {
    /// Returns a source backed by the operating system.
    pub fn default_secure() -> Self {
        Self(Source::Secure)
    }

    /// Returns a source that serves every draw from `rng`.
    ///
    /// Handles returned by [RandomSource::stream] advance the same underlying stream, so
    /// two consecutive handles never replay the same bytes.
    pub fn from_stream<R: RngCore + CryptoRng + Send + 'static>(rng: R) -> Self {
        debug!("configured deterministic random stream");
        Self(Source::Stream(Arc::new(Mutex::new(rng))))
    }

    /// Returns a source that serves every draw from [xof] of `seed`.
    pub fn from_seed(seed: &[u8]) -> Self {
        Self::from_stream(xof(seed))
    }

    /// Returns whether draws from this source are reproducible.
    pub fn is_deterministic(&self) -> bool {
        matches!(self.0, Source::Stream(_))
    }

    /// Returns a handle to draw bytes from.
    pub fn stream(&self) -> RandomStream {
        match &self.0 {
            Source::Secure => RandomStream(Handle::Secure(OsRng)),
            Source::Stream(shared) => RandomStream(Handle::Shared(shared.clone())),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::default_secure()
    }
}

impl Debug for RandomSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Source::Secure => f.write_str("RandomSource::Secure"),
            Source::Stream(_) => f.write_str("RandomSource::Stream"),
        }
    }
}

enum Handle {
    Secure(OsRng),
    Shared(Shared),
}

/// A handle returned by [RandomSource::stream].
pub struct RandomStream(Handle);

/// Locks the shared stream for a single draw.
///
/// A panic while the lock was held cannot leave an RNG in a state that matters here, so
/// poisoning is ignored.
fn lock(shared: &Shared) -> MutexGuard<'_, dyn RngCore + Send + 'static> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl RngCore for RandomStream {
    fn next_u32(&mut self) -> u32 {
        match &mut self.0 {
            Handle::Secure(rng) => rng.next_u32(),
            Handle::Shared(shared) => lock(shared).next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match &mut self.0 {
            Handle::Secure(rng) => rng.next_u64(),
            Handle::Shared(shared) => lock(shared).next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match &mut self.0 {
            Handle::Secure(rng) => rng.fill_bytes(dest),
            Handle::Shared(shared) => lock(shared).fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match &mut self.0 {
            Handle::Secure(rng) => rng.try_fill_bytes(dest),
            Handle::Shared(shared) => lock(shared).try_fill_bytes(dest),
        }
    }
}

// `Shared` is private and only filled by `RandomSource::from_stream`, which requires `CryptoRng`.
impl CryptoRng for RandomStream {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_secure_is_not_deterministic() {
        let source = RandomSource::default_secure();
        assert!(!source.is_deterministic());
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        source.stream().fill_bytes(&mut a);
        source.stream().fill_bytes(&mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_stream_handles_share_state() {
        let source = RandomSource::from_stream(StdRng::seed_from_u64(0));
        assert!(source.is_deterministic());
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        source.stream().fill_bytes(&mut a);
        source.stream().fill_bytes(&mut b);
        assert_ne!(a, b);

        // A fresh stream from the same seed replays both draws in order
        let mut expected = [0u8; 64];
        StdRng::seed_from_u64(0).fill_bytes(&mut expected);
        assert_eq!(&expected[..32], &a);
        assert_eq!(&expected[32..], &b);
    }

    #[test]
    fn test_clones_share_stream() {
        let source = RandomSource::from_seed(b"shared");
        let clone = source.clone();
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        source.stream().fill_bytes(&mut a);
        clone.stream().fill_bytes(&mut b);

        let mut expected = [0u8; 32];
        xof(b"shared").fill(&mut expected);
        assert_eq!(&expected[..16], &a);
        assert_eq!(&expected[16..], &b);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = [0u8; 48];
        let mut b = [0u8; 48];
        RandomSource::from_seed(b"seed").stream().fill_bytes(&mut a);
        RandomSource::from_seed(b"seed").stream().fill_bytes(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_only_constructors_pick_the_mode() {
        assert!(!RandomSource::default().is_deterministic());
        assert!(!RandomSource::default_secure().is_deterministic());
        assert!(RandomSource::from_seed(b"seed").is_deterministic());
        assert!(RandomSource::from_stream(StdRng::seed_from_u64(1)).is_deterministic());
        assert_eq!(
            format!("{:?}", RandomSource::from_seed(b"seed")),
            "RandomSource::Stream"
        );
    }

    #[test]
    fn test_poisoned_stream_still_draws() {
        let source = RandomSource::from_seed(b"poison");
        let shared = match &source.0 {
            Source::Stream(shared) => shared.clone(),
            Source::Secure => unreachable!(),
        };
        let _ = std::thread::spawn(move || {
            let _guard = shared.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        let mut bytes = [0u8; 8];
        source.stream().fill_bytes(&mut bytes);
    }
}
