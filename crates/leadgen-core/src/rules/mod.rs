pub mod qualify;

pub use qualify::{Disqualification, QualificationPolicy, DEFAULT_REJECTED_KEYWORDS};
