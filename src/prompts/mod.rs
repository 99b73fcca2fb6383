pub mod review;

pub use review::build_review_prompt;
