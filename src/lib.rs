//! promptnx: deterministic offline prompt synthesis.
//!
//! The local fallback tier behind the PromptNX generator: a pure,
//! rule-based engine that turns a structured request (objective, target
//! platform, output format, language, edit mode) into a formatted Markdown
//! instruction document with a bounded quality score. It performs no
//! network or storage access and is invoked by callers that have already
//! decided a live-model generation should be skipped.
//!
//! ```
//! use promptnx::{SynthesisRequest, synthesize};
//!
//! let request = SynthesisRequest::new(
//!     "Write a landing page",
//!     "marketing",
//!     "chatgpt",
//!     "markdown",
//!     "english",
//! );
//! let response = synthesize(&request);
//! assert!(response.success);
//! assert!(response.prompt.contains("## Persona & Mission"));
//! assert!((72..=100).contains(&response.score));
//! ```

pub mod app;
pub mod domain;

pub use domain::synthesis::guidance;
pub use domain::{
    AppError, Category, ComposedSection, PLATFORM_REGISTRY, PlatformEntry, PlatformProfile,
    ScoreConfig, SynthesisEngine, SynthesisMetadata, SynthesisMode, SynthesisRequest,
    SynthesisResponse, resolve_platform, synthesize, synthesize_with_reason,
};
pub use domain::synthesis::{compose, estimate_score, render};
