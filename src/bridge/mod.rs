pub mod android;
