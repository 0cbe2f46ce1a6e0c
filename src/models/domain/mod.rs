pub mod fill_blank;
pub mod mcq;
pub mod qa;

pub use fill_blank::FillBlankRecord;
pub use mcq::McqRecord;
pub use qa::QaRecord;
