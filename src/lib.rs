pub mod bridge;
pub mod gles;
pub mod logging;
