pub mod conv;
pub mod display;
pub mod error;
pub mod host;
pub mod iso;

pub use display::{DateOffsetFormatter, format};
pub use error::Error;
pub use host::{Callback, FunctionRegistry, NUMBER_TO_DATE};

pub type Result<T> = std::result::Result<T, error::Error>;
