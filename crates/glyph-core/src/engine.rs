//! The sign engine: key generation, the concurrent rejection-sampling
//! signer, and verification.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

use glyph_crypto::{challenge, ephemeral_sample, is_degenerate_ternary, ternary_sample};
use glyph_crypto::{BitStream, GlyphError};
use glyph_ring::ntt;
use glyph_ring::pointwise;
use glyph_ring::sparse::{self, SparseTerm};
use glyph_ring::{abs, sub as field_sub, ParamSet, Params, TwiddleTables};

use crate::compression::{compress, k_floor};
use crate::state::SignState;
use crate::types::{PublicKey, Signature, SigningKey, SparsePolynomial};

/// Wall-clock deadline for `sign`: if no worker produces a signature within
/// this window, signing fails with [`GlyphError::Timeout`].
const SIGN_DEADLINE: Duration = Duration::from_secs(60);

/// Process-wide immutable state for one parameter set: its twiddle tables
/// and its derived public constant `a`.
struct ParamContext {
    params: Params,
    twiddle: TwiddleTables,
    a: Vec<u16>,
}

fn build_context(set: ParamSet) -> ParamContext {
    let params = set.params();
    let twiddle = TwiddleTables::build(&params);
    let a = glyph_crypto::derive_public_a(&params);
    ParamContext { params, twiddle, a }
}

fn context(set: ParamSet) -> &'static ParamContext {
    static GLYPH1024_Q12289: OnceLock<ParamContext> = OnceLock::new();
    static GLYPH1024_Q59393_WIDE: OnceLock<ParamContext> = OnceLock::new();
    match set {
        ParamSet::Glyph1024Q12289 => GLYPH1024_Q12289.get_or_init(|| build_context(set)),
        ParamSet::Glyph1024Q59393Wide => GLYPH1024_Q59393_WIDE.get_or_init(|| build_context(set)),
    }
}

/// `a*x + y`, evaluated by transforming `x` and `y` into the NTT domain and
/// back. `a_hat` is the already-transformed public constant.
fn eval_a_times_plus(a_hat: &[u16], x: &[u16], y: &[u16], ctx: &ParamContext) -> Vec<u16> {
    let mut x_hat = x.to_vec();
    let mut y_hat = y.to_vec();
    ntt::forward(&mut x_hat, &ctx.params, &ctx.twiddle);
    ntt::forward(&mut y_hat, &ctx.params, &ctx.twiddle);
    let mut result = pointwise::mul_add(a_hat, &x_hat, &y_hat, ctx.params.q);
    ntt::inverse(&mut result, &ctx.params, &ctx.twiddle);
    result
}

/// Key generation, signing, and verification for one parameter set.
pub struct SignEngine {
    set: ParamSet,
}

impl SignEngine {
    /// Build an engine bound to one parameter set.
    #[must_use]
    pub const fn new(set: ParamSet) -> Self {
        Self { set }
    }

    fn ctx(&self) -> &'static ParamContext {
        context(self.set)
    }

    /// Generate a fresh key pair, retrying on the degenerate ternary secret.
    ///
    /// # Errors
    /// Returns [`GlyphError::EntropyUnavailable`] if the OS RNG fails.
    pub fn keygen(&self) -> Result<(SigningKey, PublicKey), GlyphError> {
        let ctx = self.ctx();
        let mut a_hat = ctx.a.clone();
        ntt::forward(&mut a_hat, &ctx.params, &ctx.twiddle);

        loop {
            let mut stream = BitStream::from_os_entropy()?;
            let s1 = ternary_sample(ctx.params.n, ctx.params.q, &mut stream);
            let s2 = ternary_sample(ctx.params.n, ctx.params.q, &mut stream);
            if is_degenerate_ternary(&s1) || is_degenerate_ternary(&s2) {
                tracing::debug!("keygen: degenerate secret sampled, retrying");
                continue;
            }

            let t = eval_a_times_plus(&a_hat, &s1, &s2, ctx);

            let sk = SigningKey::new(s1, s2, self.set)?;
            let pk = PublicKey::new(t, self.set)?;
            tracing::info!("keygen succeeded");
            return Ok((sk, pk));
        }
    }

    /// Sign `message` under `sk`, racing worker threads until one succeeds
    /// or the deadline elapses.
    ///
    /// # Errors
    /// Returns [`GlyphError::Timeout`] if no worker succeeds within the
    /// deadline.
    pub fn sign(&self, sk: &SigningKey, message: &[u8]) -> Result<Signature, GlyphError> {
        let workers = thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        let shutdown = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel();
        let deadline = Instant::now() + SIGN_DEADLINE;

        let mut handles = Vec::with_capacity(workers);
        for worker_id in 0..workers {
            let shutdown = Arc::clone(&shutdown);
            let tx = tx.clone();
            let sk = sk.clone();
            let message = message.to_vec();
            let set = self.set;
            handles.push(thread::spawn(move || {
                if let Some(signature) = sign_worker(worker_id, set, &sk, &message, &shutdown) {
                    let _ = tx.send(signature);
                }
            }));
        }
        drop(tx);

        let remaining = deadline.saturating_duration_since(Instant::now());
        let result = rx.recv_timeout(remaining);
        shutdown.store(true, Ordering::Relaxed);
        for handle in handles {
            let _ = handle.join();
        }

        match result {
            Ok(signature) => {
                tracing::info!("sign succeeded");
                Ok(signature)
            }
            Err(_) => {
                tracing::warn!("sign timed out after {SIGN_DEADLINE:?}");
                Err(GlyphError::Timeout)
            }
        }
    }

    /// Behind the `deterministic` feature: sign using caller-supplied
    /// ephemeral secrets instead of sampling them, for reproducible test
    /// vectors. Not reachable from production signing paths.
    #[cfg(feature = "deterministic")]
    pub fn deterministic_sign(
        &self,
        sk: &SigningKey,
        y1: Vec<u16>,
        y2: Vec<u16>,
        message: &[u8],
    ) -> Result<Signature, GlyphError> {
        let ctx = self.ctx();
        attempt_with_ephemeral(ctx, self.set, sk, y1, y2, message)
            .ok_or(GlyphError::InvalidSignature(
                "deterministic attempt failed rejection sampling".into(),
            ))
    }

    /// Verify `sig` over `message` under `pk`.
    ///
    /// # Errors
    /// Returns [`GlyphError::InvalidSignature`] if the decoded bounds are
    /// violated, or [`GlyphError::VerificationFailed`] if the recomputed
    /// challenge does not match.
    pub fn verify(
        &self,
        pk: &PublicKey,
        sig: &Signature,
        message: &[u8],
    ) -> Result<(), GlyphError> {
        let ctx = self.ctx();
        let k = ctx.params.k();

        if sig.z1.iter().any(|&c| abs(c, ctx.params.q) > k) {
            return Err(GlyphError::InvalidSignature("z1 exceeds B-omega".into()));
        }
        if sig.z2.iter().any(|&c| abs(c, ctx.params.q) > k) {
            return Err(GlyphError::InvalidSignature("z2 exceeds B-omega".into()));
        }

        let mut a_hat = ctx.a.clone();
        ntt::forward(&mut a_hat, &ctx.params, &ctx.twiddle);
        let h = eval_a_times_plus(&a_hat, &sig.z1, &sig.z2, ctx);

        let tc = sparse::sparse_mul(&pk.t, sig.c.terms(), &ctx.params);
        let h = pointwise::sub(&h, &tc, ctx.params.q);
        let h_rounded = k_floor(&h, &ctx.params);

        let c_prime = challenge::derive(&h_rounded, message, &ctx.params);
        if c_prime.as_slice() == sig.c.terms() {
            tracing::info!("verify accepted");
            Ok(())
        } else {
            tracing::debug!("verify rejected: challenge mismatch");
            Err(GlyphError::VerificationFailed)
        }
    }
}

/// One worker's retry loop: sample, transform, hash, reject, compress,
/// until a signature is produced or `shutdown` is observed.
fn sign_worker(
    worker_id: usize,
    set: ParamSet,
    sk: &SigningKey,
    message: &[u8],
    shutdown: &AtomicBool,
) -> Option<Signature> {
    let ctx = context(set);
    let mut a_hat = ctx.a.clone();
    ntt::forward(&mut a_hat, &ctx.params, &ctx.twiddle);
    let mut stream = BitStream::from_os_entropy().ok()?;
    let mut attempt: u64 = 0;

    while !shutdown.load(Ordering::Relaxed) {
        attempt += 1;
        let y1 = ephemeral_sample(ctx.params.n, &ctx.params, &mut stream);
        let y2 = ephemeral_sample(ctx.params.n, &ctx.params, &mut stream);

        if let Some(signature) =
            try_attempt(ctx, &a_hat, set, sk, &y1, &y2, message, worker_id, attempt)
        {
            return Some(signature);
        }
    }
    None
}

/// One rejection-sampling attempt given already-sampled ephemeral secrets
/// and the already-transformed public constant. Shared between the worker
/// loop and `deterministic_sign`.
#[allow(clippy::too_many_arguments)]
fn try_attempt(
    ctx: &ParamContext,
    a_hat: &[u16],
    set: ParamSet,
    sk: &SigningKey,
    y1: &[u16],
    y2: &[u16],
    message: &[u8],
    worker_id: usize,
    attempt: u64,
) -> Option<Signature> {
    let u = eval_a_times_plus(a_hat, y1, y2, ctx);
    let state = SignState::Transformed;
    tracing::debug!(worker_id, attempt, ?state, "transformed ephemeral sample");

    let u_rounded = k_floor(&u, &ctx.params);
    let c = challenge::derive(&u_rounded, message, &ctx.params);
    let state = SignState::Hashed;
    tracing::debug!(worker_id, attempt, ?state, "derived challenge");

    let k = ctx.params.k();

    let z1 = pointwise::add(&sparse::sparse_mul(&sk.s1, &c, &ctx.params), y1, ctx.params.q);
    if z1.iter().any(|&coeff| abs(coeff, ctx.params.q) > k) {
        let state = SignState::Z1Reject;
        tracing::debug!(worker_id, attempt, ?state, "z1 exceeded bound");
        return None;
    }

    let z2_raw = pointwise::add(&sparse::sparse_mul(&sk.s2, &c, &ctx.params), y2, ctx.params.q);
    if z2_raw.iter().any(|&coeff| abs(coeff, ctx.params.q) > k) {
        let state = SignState::Z2Reject;
        tracing::debug!(worker_id, attempt, ?state, "z2 exceeded bound");
        return None;
    }

    let mut z2 = Vec::with_capacity(ctx.params.n);
    for i in 0..ctx.params.n {
        let d = field_sub(u[i], z2_raw[i], ctx.params.q);
        match compress(d, z2_raw[i], &ctx.params) {
            Some(value) => z2.push(value),
            None => {
                let state = SignState::CompressFail;
                tracing::debug!(worker_id, attempt, ?state, "compression out of range");
                return None;
            }
        }
    }
    let state = SignState::Compressed;
    tracing::debug!(worker_id, attempt, ?state, "compressed z2");

    let polynomial = SparsePolynomial::new(c, set).ok()?;
    let signature = Signature::new(z1, z2, polynomial, set).ok()?;
    let state = SignState::Done;
    tracing::debug!(worker_id, attempt, ?state, "produced signature");
    Some(signature)
}

#[cfg(feature = "deterministic")]
fn attempt_with_ephemeral(
    ctx: &ParamContext,
    set: ParamSet,
    sk: &SigningKey,
    y1: Vec<u16>,
    y2: Vec<u16>,
    message: &[u8],
) -> Option<Signature> {
    let mut a_hat = ctx.a.clone();
    ntt::forward(&mut a_hat, &ctx.params, &ctx.twiddle);
    try_attempt(ctx, &a_hat, set, sk, &y1, &y2, message, 0, 0)
}
