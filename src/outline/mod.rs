//! The text-structuring pipeline.
//!
//! Raw recognized text flows through four stages: sentence splitting,
//! topic identification, relation finding, and outline assembly. The
//! pipeline is pure and stateless; a single pass over local data with no
//! shared storage, so concurrent invocations need no coordination.

mod builder;
mod related;
mod sentence;
mod topics;

pub use builder::{build_mind_map, build_outline};
pub use related::{find_related_points, MAX_RELATED_POINTS, TRUNCATE_WORDS};
pub use sentence::{split_sentences, SentenceSplitter};
pub use topics::{identify_topics, TopicSummary, MAX_SUBTOPICS};
