#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use fieldmorph_image as image;

#[doc(inline)]
pub use fieldmorph_geometry as geometry;

#[doc(inline)]
pub use fieldmorph_imgproc as imgproc;

#[doc(inline)]
pub use fieldmorph_io as io;
