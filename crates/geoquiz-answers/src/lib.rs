//! Geoquiz Answers: deciding whether a typed capital is right.
//!
//! Matching is two-stage: normalized equality against the recorded capitals,
//! then membership in a closed table of accepted alternate spellings. All
//! functions here are pure and total.

pub mod hint;
pub mod normalize;
pub mod validator;
pub mod variants;

pub use hint::mask_capital;
pub use normalize::normalize_capital_name;
pub use validator::validate_capital_answer;
