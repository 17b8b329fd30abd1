mod ad_handler;
mod image_handler;

pub use ad_handler::*;
pub use image_handler::*;
