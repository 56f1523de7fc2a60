#![recursion_limit = "1024"]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation
)]

pub mod u3v;

pub mod gige;

pub mod stream;

mod pixel_format;

pub use pixel_format::PixelFormat;
