//! Utility modules shared by the page scanner and the manifest builder.

pub mod html;
pub mod mime;
