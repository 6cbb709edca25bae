//! SVG to PNG rasterisation.

use crate::error::{DashboardError, Result};

/// Output pixels per SVG unit.
const PNG_SCALE: f32 = 2.0;

fn raster_err(msg: impl Into<String>) -> DashboardError {
    DashboardError::Export(msg.into())
}

pub async fn svg_to_png(svg: &str) -> Result<Vec<u8>> {
    #[cfg(target_arch = "wasm32")]
    {
        svg_to_png_web(svg).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        svg_to_png_native(svg)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn svg_to_png_native(svg: &str) -> Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|err| raster_err(err.to_string()))?;
    let size = tree
        .size()
        .to_int_size()
        .scale_by(PNG_SCALE)
        .ok_or_else(|| raster_err("Chart too large to rasterise"))?;
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| raster_err("Unable to allocate pixmap"))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(PNG_SCALE, PNG_SCALE),
        &mut pixmap.as_mut(),
    );
    pixmap
        .encode_png()
        .map_err(|err| raster_err(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
async fn svg_to_png_web(svg: &str) -> Result<Vec<u8>> {
    use base64::Engine;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Url,
    };

    let opts = BlobPropertyBag::new();
    opts.set_type("image/svg+xml");
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(svg));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|_| raster_err("Unable to build SVG blob"))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| raster_err("Unable to create SVG URL"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| raster_err("Document unavailable"))?;

    let image = HtmlImageElement::new().map_err(|_| raster_err("Unable to create image"))?;
    image.set_src(&url);
    JsFuture::from(image.decode())
        .await
        .map_err(|_| raster_err("Image decode failed"))?;

    let width = (image.natural_width() as f32 * PNG_SCALE) as u32;
    let height = (image.natural_height() as f32 * PNG_SCALE) as u32;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| raster_err("Unable to create canvas"))?
        .dyn_into()
        .map_err(|_| raster_err("Canvas cast failed"))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| raster_err("Canvas context unavailable"))?
        .ok_or_else(|| raster_err("Canvas context missing"))?
        .dyn_into()
        .map_err(|_| raster_err("Context cast failed"))?;

    context
        .draw_image_with_html_image_element_and_dw_and_dh(
            &image,
            0.0,
            0.0,
            width as f64,
            height as f64,
        )
        .map_err(|_| raster_err("Unable to draw image"))?;

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| raster_err("Unable to serialise canvas"))?;
    Url::revoke_object_url(&url).ok();

    let encoded = data_url
        .split(',')
        .nth(1)
        .ok_or_else(|| raster_err("Malformed data URL"))?;
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| raster_err("PNG decode failed"))
}
