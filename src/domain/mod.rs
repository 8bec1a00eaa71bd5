pub mod error;
pub mod synthesis;

pub use error::AppError;
pub use synthesis::{
    Category, ComposedSection, PLATFORM_REGISTRY, PlatformEntry, PlatformProfile, ScoreConfig,
    SynthesisEngine, SynthesisMetadata, SynthesisMode, SynthesisRequest, SynthesisResponse,
    resolve_platform, synthesize, synthesize_with_reason,
};
