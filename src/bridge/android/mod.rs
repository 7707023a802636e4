pub mod arrays;
pub mod bindings;
pub mod globals;
pub mod loader;

use once_cell::sync::OnceCell;

type SyncOnceCell<T> = OnceCell<T>;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    JNIError(jni::errors::Error),
    Gles(crate::gles::Error),
    EGLInvalidLibrary,
    UTF8DecodeError,
    UnknownExtension(String),
}

impl From<jni::errors::Error> for Error {
    fn from(e: jni::errors::Error) -> Self {
        return Error::JNIError(e);
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(_e: std::str::Utf8Error) -> Self {
        return Error::UTF8DecodeError;
    }
}

impl From<crate::gles::Error> for Error {
    fn from(e: crate::gles::Error) -> Self {
        return Error::Gles(e);
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Error::Gles(e) => write!(f, "{}", e),
            Error::UnknownExtension(name) => write!(f, "no entry points are bridged for {}", name),
            Error::EGLInvalidLibrary => write!(f, "libEGL could not be loaded"),
            e => write!(f, "{:?}", e),
        };
    }
}

impl Error {
    /// Java exception class this error is raised as.
    pub fn exception_class(&self) -> &'static str {
        return match self {
            Error::Gles(crate::gles::Error::Unsupported(_)) => "java/lang/UnsupportedOperationException",
            Error::Gles(_) | Error::UnknownExtension(_) => "java/lang/IllegalArgumentException",
            Error::JNIError(jni::errors::Error::NullPtr(_)) => "java/lang/NullPointerException",
            _ => "java/lang/RuntimeException",
        };
    }
}
