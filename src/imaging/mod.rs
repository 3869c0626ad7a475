//! The composition engine — pure in-memory raster transforms.
//!
//! | Operation | Function | Crate / technique |
//! |---|---|---|
//! | Exact-fit resize | [`resize_exact`] | `image::imageops::resize`, Lanczos3 |
//! | Fill-color synthesis | [`fill_color`] | per-channel edge means, truncating combine |
//! | Thumbnail mosaic | [`compose_thumbnail`] | `imageops::replace` onto a 600×600 canvas |
//!
//! Nothing here touches the filesystem; every function maps raster values to
//! raster values and is safe to call concurrently for distinct cards.

mod compose;
mod fill;
mod resize;

pub use compose::compose_thumbnail;
pub use fill::fill_color;
pub use resize::resize_exact;
