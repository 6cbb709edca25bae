//! Getting export payloads off the device: clipboard copy plus a browser
//! download on the web, or a file under the platform data directory on native.

use crate::error::{DashboardError, Result};

fn export_err(msg: impl Into<String>) -> DashboardError {
    DashboardError::Export(msg.into())
}

pub async fn copy_to_clipboard(payload: String) -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or_else(|| export_err("window unavailable"))?;
        let document = window
            .document()
            .ok_or_else(|| export_err("document unavailable"))?;
        let body = document.body().ok_or_else(|| export_err("missing body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| export_err("Unable to create textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| export_err("Textarea cast failed"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
            .and_then(|html| html.exec_command("copy").ok())
            .unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(export_err("Clipboard copy blocked"))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| export_err(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| export_err(err.to_string()))
    }
}

/// Delivers `bytes` as `filename`. Returns the saved path on native, `None`
/// when the browser handles the download.
pub async fn download_bytes(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<Option<String>> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| export_err("Failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| export_err("Unable to create download"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| export_err("Document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| export_err("Unable to create anchor"))?
            .dyn_into()
            .map_err(|_| export_err("Anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| export_err("Missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = native_export_dir()?;
        fs::create_dir_all(&dir)?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path)?;
        file.write_all(&bytes)?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn native_export_dir() -> Result<std::path::PathBuf> {
    let dirs = directories::ProjectDirs::from("org", "Shelfsight", "Shelfsight")
        .ok_or_else(|| export_err("Unable to determine export directory"))?;
    Ok(dirs.data_dir().join("exports"))
}
