pub mod classifier;
pub mod retry;

pub use classifier::{classify, Classifier};
pub use retry::RetryPolicy;
