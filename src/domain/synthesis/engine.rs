//! Synthesis orchestrator: the public entry point of the engine.

use tracing::debug;

use super::composer::{compose, render};
use super::platform::resolve_platform;
use super::request::SynthesisRequest;
use super::response::{MODEL, PROVIDER, SynthesisMetadata, SynthesisResponse};
use super::score::{ScoreConfig, estimate_score};

/// The local synthesis engine.
///
/// Stateless apart from its scoring constants; any number of calls may run
/// concurrently. Construction is cheap enough to do per call.
#[derive(Debug, Clone, Default)]
pub struct SynthesisEngine {
    score: ScoreConfig,
}

impl SynthesisEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine with overridden scoring constants.
    pub fn with_score_config(score: ScoreConfig) -> Self {
        Self { score }
    }

    /// Synthesize a prompt document for the request.
    ///
    /// Total over structurally valid requests: every table lookup has a
    /// default and every conditional section has a defined false branch.
    pub fn synthesize(&self, request: &SynthesisRequest) -> SynthesisResponse {
        self.synthesize_with_reason(request, None)
    }

    /// Synthesize, recording why the caller fell back to the local tier.
    ///
    /// The reason is forwarded verbatim into the response metadata for
    /// observability; the engine never inspects it.
    pub fn synthesize_with_reason(
        &self,
        request: &SynthesisRequest,
        reason: Option<&str>,
    ) -> SynthesisResponse {
        let profile = resolve_platform(&request.ai_platform);

        if let Some(reason) = reason {
            debug!(
                reason,
                platform = %request.ai_platform,
                category = profile.category.key(),
                "remote tier unavailable, using local prompt synthesis"
            );
        }

        let prompt = render(&compose(request, &profile));
        let score = estimate_score(&prompt, &self.score);

        SynthesisResponse {
            success: true,
            prompt,
            score,
            metadata: SynthesisMetadata {
                provider: PROVIDER,
                model: MODEL,
                mode: request.mode,
                fallback: true,
                reason: reason.map(str::to_string),
                category: profile.category,
            },
        }
    }
}

/// Synthesize with default scoring constants.
pub fn synthesize(request: &SynthesisRequest) -> SynthesisResponse {
    SynthesisEngine::new().synthesize(request)
}

/// Synthesize with default scoring constants, forwarding a fallback reason.
pub fn synthesize_with_reason(request: &SynthesisRequest, reason: &str) -> SynthesisResponse {
    SynthesisEngine::new().synthesize_with_reason(request, Some(reason))
}
