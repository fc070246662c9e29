use iced::widget::image::Handle;
use image::{imageops::FilterType, DynamicImage};

use crate::error::LoadError;

/// Longest edge of a decoded cell image.
/// Cells zoom up to 2x, so this leaves room before upscaling kicks in.
const MAX_EDGE: u32 = 512;

/// Decode image bytes into a drawable handle on a blocking thread
pub async fn decode(bytes: Vec<u8>) -> Result<Handle, LoadError> {
    // Spawn blocking because decoding and resizing are CPU-bound
    tokio::task::spawn_blocking(move || decode_blocking(&bytes)).await?
}

/// Blocking implementation of image decoding
fn decode_blocking(bytes: &[u8]) -> Result<Handle, LoadError> {
    let img = image::load_from_memory(bytes)?;
    let img = fit_to_edge(img, MAX_EDGE);

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Downscale so neither side exceeds `max_edge`; smaller images are left alone
fn fit_to_edge(img: DynamicImage, max_edge: u32) -> DynamicImage {
    if img.width() > max_edge || img.height() > max_edge {
        img.resize(max_edge, max_edge, FilterType::Lanczos3)
    } else {
        img
    }
}
