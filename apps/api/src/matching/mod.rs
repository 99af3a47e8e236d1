// Resume-to-job matching: similarity scoring, ranked job matches,
// career path fit, and what-if skill comparisons.
// Pure computations over in-memory inputs; handlers do the I/O.

pub mod career;
pub mod catalog;
pub mod engine;
pub mod handlers;
pub mod similarity;
pub mod whatif;
