use std::sync::Arc;
use std::time::SystemTime;

use tracing::{info, warn};

use crate::advice::{recommendations, FALLBACK_ADVISORY};
use crate::capability::CapabilityCell;
use crate::consts::SCORE_FAILURE_DEFAULT;
use crate::error::{Result, ScanError};
use crate::frame::Frame;
use crate::report::{AnalysisResult, FeatureSet, ScanMethod};
use crate::scoring::safety_score;
use crate::strategy::{AcceleratedStrategy, BasicStrategy, ExtractionStrategy};

/// Scan lifecycle state.
///
/// `Capturing`, `Extracting` and `Scoring` are transient within one
/// [`Scanner::scan`] call; the machine rests in `Idle`, `Completed` or
/// `Failed` between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Capturing,
    Extracting,
    Scoring,
    Completed,
    Failed,
}

/// The scan orchestrator: coordinates capture, extraction, scoring and
/// result assembly for one scan at a time.
///
/// Scheduling is request/response. A scan request while the machine is not
/// `Idle` is rejected with [`ScanError::ScanInProgress`] (rejection, not
/// queueing); the caller returns the machine to `Idle` with an explicit
/// [`Scanner::reset`] ("retake") after a completed or failed scan.
pub struct Scanner {
    capability: Arc<CapabilityCell>,
    basic: Arc<dyn ExtractionStrategy>,
    accelerated: Arc<dyn ExtractionStrategy>,
    state: ScanState,
}

impl Scanner {
    /// Scanner with the stock basic and accelerated strategies.
    pub fn new(capability: Arc<CapabilityCell>) -> Self {
        Self::with_strategies(
            capability,
            Arc::new(BasicStrategy),
            Arc::new(AcceleratedStrategy),
        )
    }

    /// Scanner with explicit strategy slots. Used by embedders and tests to
    /// substitute instrumented or faulting strategies.
    pub fn with_strategies(
        capability: Arc<CapabilityCell>,
        basic: Arc<dyn ExtractionStrategy>,
        accelerated: Arc<dyn ExtractionStrategy>,
    ) -> Self {
        Self {
            capability,
            basic,
            accelerated,
            state: ScanState::Idle,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Return to `Idle` from a resting state ("retake").
    pub fn reset(&mut self) {
        self.state = ScanState::Idle;
    }

    /// Run one scan to completion or failure.
    ///
    /// `frame` is `None` when the frame source could not produce a capture;
    /// that path yields a valid failure result (score 50, generic advisory)
    /// rather than an error. An empty or zero-dimension frame is a caller
    /// precondition violation and surfaces as `InvalidFrame`.
    ///
    /// The capability cell is read exactly once, here at scan start; a flip
    /// while this scan is extracting does not change its strategy. If the
    /// accelerated strategy errors mid-extraction, partial output is
    /// discarded and the basic strategy re-runs on the same frame; the
    /// caller sees only the `method` tag.
    pub fn scan(&mut self, frame: Option<Frame>) -> Result<AnalysisResult> {
        if self.state != ScanState::Idle {
            return Err(ScanError::ScanInProgress { state: self.state });
        }

        self.state = ScanState::Capturing;
        let use_accelerated = self.capability.accelerated_ready();

        let frame = match frame {
            Some(frame) => frame,
            None => {
                warn!("no frame obtainable, emitting failure result");
                self.state = ScanState::Failed;
                return Ok(Self::failure_result());
            }
        };

        self.state = ScanState::Extracting;
        let (features, method) = match self.extract(&frame, use_accelerated) {
            Ok(extracted) => extracted,
            Err(err) => {
                self.state = ScanState::Failed;
                return Err(err);
            }
        };

        self.state = ScanState::Scoring;
        let score = safety_score(&features.brightness, &features.environment, &features.structure);
        let advisories = recommendations(
            &features.brightness,
            &features.environment,
            &features.structure,
        );

        info!(
            method = %method,
            score,
            brightness = %features.brightness.status,
            "scan complete"
        );

        self.state = ScanState::Completed;
        Ok(AnalysisResult {
            features: Some(features),
            safety_score: score,
            recommendations: advisories,
            method,
            timestamp: SystemTime::now(),
        })
    }

    fn extract(&self, frame: &Frame, use_accelerated: bool) -> Result<(FeatureSet, ScanMethod)> {
        if use_accelerated {
            match self.accelerated.extract_features(frame) {
                Ok(features) => return Ok((features, self.accelerated.method())),
                Err(err) => {
                    // Partial accelerated output is discarded; the basic
                    // strategy re-runs on the same frame.
                    warn!(error = %err, "accelerated extraction failed, falling back");
                }
            }
        }
        let features = self.basic.extract_features(frame)?;
        Ok((features, self.basic.method()))
    }

    /// The safe-default result emitted when no frame is obtainable.
    fn failure_result() -> AnalysisResult {
        AnalysisResult {
            features: None,
            safety_score: SCORE_FAILURE_DEFAULT,
            recommendations: vec![FALLBACK_ADVISORY.to_string()],
            method: ScanMethod::Error,
            timestamp: SystemTime::now(),
        }
    }
}
