//! Dataset sources: the injected random stream and the synthetic generator.

pub mod sample;

pub use sample::{
    DEFAULT_PERIODS, DEFAULT_SEED, NormalSource, ScriptedNormal, SeededNormal, generate_sample,
};
