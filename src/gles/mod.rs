pub mod calls;
pub mod extensions;
pub mod linked;
pub mod marshal;
pub mod registry;
pub mod symbol;

pub use calls::{DrawBuffers, FramebufferTextureMultisample, InstancedArrays, RenderbufferMultisample};
pub use extensions::{ExtensionSet, Family};
pub use registry::{Proc, ProcLoader, Registry};
pub use symbol::{Extension, Linkage, Symbol};

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // The driver has no entry point for this function.
    Unsupported(Symbol),
    ArrayTooShort { requested: usize, len: usize },
    NumericConversionError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Error::Unsupported(symbol) => write!(f, "{} is not supported on this device", symbol.name()),
            Error::ArrayTooShort { requested, len } =>
                write!(f, "requested {} elements from an array of length {}", requested, len),
            Error::NumericConversionError => write!(f, "element count out of range"),
        };
    }
}

impl std::error::Error for Error {}
