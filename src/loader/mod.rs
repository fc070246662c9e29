/// Image loading module
///
/// This module handles:
/// - Classifying image URIs (remote, local file, unsupported)
/// - Fetching the raw bytes over HTTP or from disk
/// - Decoding and downscaling them into handles iced can draw
///
/// Every call to `load_image` resolves exactly once, either with a handle
/// or with a `LoadError`.

pub mod source;
pub mod thumbnail;

use iced::widget::image::Handle;

use crate::error::LoadError;

/// Fetch and decode the image at `uri`
pub async fn load_image(uri: String) -> Result<Handle, LoadError> {
    log::debug!("⏳ Loading {}", uri);

    let location = source::Location::parse(&uri)?;
    let bytes = location.fetch().await?;
    thumbnail::decode(bytes).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = load_image("/nonexistent/path.jpg".to_string()).await;
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_unsupported_scheme() {
        let result = load_image("ftp://example.com/a.jpg".to_string()).await;
        assert!(matches!(result, Err(LoadError::UnsupportedUri(_))));
    }

    #[tokio::test]
    async fn test_load_local_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        image::RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let uri = format!("file://{}", path.display());
        assert!(load_image(uri).await.is_ok());
    }

    #[tokio::test]
    async fn test_load_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let result = load_image(path.display().to_string()).await;
        assert!(matches!(result, Err(LoadError::Decode(_))));
    }
}
