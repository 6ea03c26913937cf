//! An explicit state enum for one signing attempt, used purely for
//! observability (`tracing::debug!` state transitions) rather than control
//! flow — the worker loop itself is a plain bounded loop with a retry
//! counter.

/// The stage a single signing attempt has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignState {
    /// Attempt just started; nothing sampled yet.
    Init,
    /// `y1`, `y2` drawn.
    Sampled,
    /// `u = a*y1 + y2` computed and brought back to the time domain.
    Transformed,
    /// `u` rounded and hashed with the message into a challenge.
    Hashed,
    /// `z1` is within bound.
    Z1Ok,
    /// `z1` exceeded `B-omega`; attempt restarts.
    Z1Reject,
    /// `z2` is within bound.
    Z2Ok,
    /// `z2` exceeded `B-omega`; attempt restarts.
    Z2Reject,
    /// `z2` successfully compressed.
    Compressed,
    /// Compression saw `|v| > k`; attempt restarts.
    CompressFail,
    /// Attempt produced a signature.
    Done,
}
