//! Mind-map model types.
//!
//! This module defines the intermediate representation that bridges the
//! text-structuring pipeline and output rendering: a tree of depth at most
//! three (topic, subtopics, related points).

mod map;

pub use map::{Branch, JsonFormat, MindMap};
