pub mod convert;

pub use convert::ConvertArgs;
