pub mod synthesis;
pub mod weights;

pub use synthesis::{emotional_tone, ScoreSynthesis, ScoreSynthesizer};
pub use weights::SynthesisWeights;
