pub mod build_ics;
pub mod generate;
pub mod post_digest;
