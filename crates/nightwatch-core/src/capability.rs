use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;

use tracing::{debug, warn};

use crate::consts::PROBE_FRAME_SIZE;
use crate::contour::find_contours;
use crate::edge::detect_edges;
use crate::error::Result;
use crate::frame::Frame;

/// Lifecycle of the accelerated backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapabilityState {
    Uninitialized,
    Initializing,
    Ready,
    Failed,
}

const UNINITIALIZED: u8 = 0;
const INITIALIZING: u8 = 1;
const READY: u8 = 2;
const FAILED: u8 = 3;

/// Process-wide cell tracking whether the accelerated backend is usable.
///
/// Written only by the one-shot initialization task; read-only from the scan
/// path. The scan path samples [`CapabilityCell::accelerated_ready`] exactly
/// once at scan start, so a flip during an in-flight scan cannot change that
/// scan's strategy.
#[derive(Debug)]
pub struct CapabilityCell {
    state: AtomicU8,
}

impl CapabilityCell {
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(UNINITIALIZED),
        }
    }

    pub fn state(&self) -> CapabilityState {
        match self.state.load(Ordering::Acquire) {
            UNINITIALIZED => CapabilityState::Uninitialized,
            INITIALIZING => CapabilityState::Initializing,
            READY => CapabilityState::Ready,
            _ => CapabilityState::Failed,
        }
    }

    /// Single atomic read used by the scan path to pick a strategy.
    pub fn accelerated_ready(&self) -> bool {
        self.state.load(Ordering::Acquire) == READY
    }

    /// Claim the one-shot initialization. Returns false if initialization
    /// has already begun or finished; there are no retries.
    pub fn begin(&self) -> bool {
        self.state
            .compare_exchange(
                UNINITIALIZED,
                INITIALIZING,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Resolve a claimed initialization as ready or failed.
    pub fn resolve(&self, ok: bool) {
        let target = if ok { READY } else { FAILED };
        let _ = self.state.compare_exchange(
            INITIALIZING,
            target,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Mark the cell ready without the probe. Test and embedding hook.
    pub fn force_ready(&self) {
        self.state.store(READY, Ordering::Release);
    }
}

impl Default for CapabilityCell {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the accelerated pipeline once over a small synthetic frame to prove
/// the backend works end to end.
fn warm_up() -> Result<()> {
    let side = PROBE_FRAME_SIZE;
    let mut pixels = Vec::with_capacity((side * side) as usize * 4);
    for _ in 0..side {
        for x in 0..side {
            // Half dark, half bright: guarantees at least one edge to trace.
            let v = if x < side / 2 { 0u8 } else { 255u8 };
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
    }
    let frame = Frame::from_rgba(side, side, pixels)?;
    let edge_map = detect_edges(&frame.luminance_plane());
    let _ = find_contours(&edge_map.mask);
    Ok(())
}

/// Spawn the fire-once background initialization of the accelerated backend.
///
/// The spawned thread resolves the cell to Ready or Failed; nothing ever
/// blocks on it. Returns false without spawning if initialization was
/// already claimed.
pub fn spawn_initializer(cell: Arc<CapabilityCell>) -> bool {
    if !cell.begin() {
        debug!("accelerated backend initialization already claimed");
        return false;
    }

    thread::spawn(move || match warm_up() {
        Ok(()) => {
            debug!("accelerated backend ready");
            cell.resolve(true);
        }
        Err(err) => {
            warn!(error = %err, "accelerated backend initialization failed");
            cell.resolve(false);
        }
    });
    true
}
