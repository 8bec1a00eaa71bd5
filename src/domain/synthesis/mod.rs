//! The local prompt synthesis engine.
//!
//! A pure, deterministic pipeline: request → platform/guidance lookups →
//! section composition → quality score → response envelope. No I/O, no
//! shared mutable state; the only process-wide data is `'static` lookup
//! tables.

pub mod composer;
pub mod engine;
pub mod guidance;
pub mod platform;
pub mod request;
pub mod response;
pub mod score;

pub use composer::{ComposedSection, compose, render};
pub use engine::{SynthesisEngine, synthesize, synthesize_with_reason};
pub use platform::{Category, PLATFORM_REGISTRY, PlatformEntry, PlatformProfile, resolve_platform};
pub use request::{SynthesisMode, SynthesisRequest};
pub use response::{MODEL, PROVIDER, SynthesisMetadata, SynthesisResponse};
pub use score::{ScoreConfig, estimate_score};
