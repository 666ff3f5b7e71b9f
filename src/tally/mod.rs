mod analyze;
mod error;
mod merge;
mod pipeline;
mod plan;
mod present;
mod rank;
mod worker;


pub use self::analyze::{
    CountingPolicy, LineAnalysis, Words, analyze, char_contribution, extract_words, words,
};
pub use self::error::{Result, TallyError};
pub use self::merge::{GlobalResult, merge};
pub use self::pipeline::{DEFAULT_TOP_K, Tally, TallyConfig, run};
pub use self::plan::{ChunkPlan, plan};
pub use self::present::{Summary, write_summary};
pub use self::rank::{RankedReport, RankedWord, rank};
pub use self::worker::{PartialResult, Partition, WordTable, partitions};
