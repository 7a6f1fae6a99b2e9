pub use github::*;

mod github;
