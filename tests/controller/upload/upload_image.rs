//! Tests for the upload_image endpoint.

use std::io::Cursor;

use axum::{
    body::{to_bytes, Bytes},
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use givebridge::{model::api::UploadDto, server::controller::upload::upload_image};

use super::*;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();

    bytes
}

/// A decodable photo is transcoded, stored under the bucket, and answered
/// with its public URL.
#[tokio::test]
async fn photo_is_stored_and_url_returned() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let (state, storage_dir) = test.app_state();

    let body = Bytes::from(png_bytes(800, 600));
    let result = upload_image(State(state), Path("laptop-images".to_string()), body).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let upload: UploadDto = serde_json::from_slice(&body).unwrap();
    assert!(upload.url.starts_with("https://cdn.test/laptop-images/"));
    assert!(upload.url.ends_with(".jpg"));

    let name = upload.url.rsplit('/').next().unwrap();
    let stored = storage_dir.path().join("laptop-images").join(name);
    let jpeg = std::fs::read(stored).unwrap();
    assert_eq!(
        image::guess_format(&jpeg).unwrap(),
        image::ImageFormat::Jpeg
    );

    Ok(())
}

/// A body that is not an image is refused and nothing is stored.
#[tokio::test]
async fn undecodable_body_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let (state, storage_dir) = test.app_state();

    let body = Bytes::from_static(b"definitely not an image");
    let result = upload_image(State(state), Path("laptop-images".to_string()), body).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    assert!(!storage_dir.path().join("laptop-images").exists());

    Ok(())
}
