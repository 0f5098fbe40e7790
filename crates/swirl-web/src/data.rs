//! Dataset transport: fetch a raw triple buffer over HTTP.
//!
//! The point source only has to serve bytes; there is no length header, the
//! point count is the buffer length divided by 12 (see `swirl_core::points`).

use swirl_core::{demo_points, PointBuffer};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub const POINTS_URL: &str = "points.bin";
pub const DEMO_POINT_COUNT: usize = 100_000;
pub const DEMO_SEED: u64 = 42;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!(format!("fetch failed: {:?}", e)))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("point source returned HTTP {}", resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Load the dataset from the point source, falling back to generated demo
/// points when the source is unreachable or the buffer is malformed.
pub async fn load_points() -> PointBuffer {
    match fetch_bytes(POINTS_URL).await {
        Ok(bytes) => match PointBuffer::from_bytes(&bytes) {
            Ok(points) => {
                log::info!("loaded {} points from {}", points.len(), POINTS_URL);
                points
            }
            Err(e) => {
                log::warn!("{}: {}", POINTS_URL, e);
                demo_points(DEMO_POINT_COUNT, DEMO_SEED)
            }
        },
        Err(e) => {
            log::warn!("falling back to demo points: {}", e);
            demo_points(DEMO_POINT_COUNT, DEMO_SEED)
        }
    }
}
