// Resume analysis engine: deterministic template analysis + catalog matching.
// No model inference anywhere — output is fixed content with the dream-job
// phrase interpolated, plus a keyword-overlap slice of the catalog.

pub mod analyzer;
pub mod handlers;
pub mod matching;
pub mod templates;
