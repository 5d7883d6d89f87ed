mod image;
mod mask;

pub use self::image::hstack;
pub use self::image::open_image;

pub use self::mask::ColorMask;
