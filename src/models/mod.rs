pub mod category;
pub mod request;
pub mod classification;

pub use category::*;
pub use request::*;
pub use classification::*;
