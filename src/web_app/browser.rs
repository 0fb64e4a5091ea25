// web_app/browser.rs - Browser glue for the admin views
//
// - BlobPreviews: preview URLs backed by `URL.createObjectURL`
// - read_selected_files: pull picked files out of an <input type="file">
// - WindowConfirm: `window.confirm()` for destructive actions
//
// Compiled for both renderers, but only ever called from event handlers,
// which run in the browser.

use std::sync::Arc;

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlInputElement, Url};

use crate::web_app::error::{AdminError, Result};
use crate::web_app::model::LocalFile;
use crate::web_app::state::{Confirm, PreviewSource};

/// Preview source minting `blob:` URLs
#[derive(Debug, Default, Clone, Copy)]
pub struct BlobPreviews;

impl BlobPreviews {
    pub fn shared() -> Arc<dyn PreviewSource> {
        Arc::new(BlobPreviews)
    }
}

impl PreviewSource for BlobPreviews {
    fn acquire(&self, file: &LocalFile) -> String {
        match object_url(file) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Could not create preview for {}: {:?}", file.file_name, e);
                String::new()
            }
        }
    }

    fn release(&self, url: &str) {
        if !url.starts_with("blob:") {
            return;
        }
        if let Err(e) = Url::revoke_object_url(url) {
            tracing::warn!("Could not revoke preview {}: {:?}", url, e);
        }
    }
}

fn object_url(file: &LocalFile) -> std::result::Result<String, JsValue> {
    let bytes = Uint8Array::from(file.bytes.as_slice());
    let parts = Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    if let Some(content_type) = &file.content_type {
        options.set_type(content_type);
    }
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    Url::create_object_url_with_blob(&blob)
}

/// Read every file currently selected in `input`, then clear the selection
/// so picking the same file again still fires a change event.
pub async fn read_selected_files(input: &HtmlInputElement) -> Result<Vec<LocalFile>> {
    let Some(list) = input.files() else {
        return Ok(Vec::new());
    };

    let mut files = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(file) = list.get(index) {
            files.push(read_file(&file).await?);
        }
    }

    input.set_value("");
    Ok(files)
}

async fn read_file(file: &File) -> Result<LocalFile> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(|e| {
        AdminError::InvalidDraft(format!("Could not read {}: {:?}", file.name(), e))
    })?;

    let bytes = Uint8Array::new(&buffer).to_vec();
    let local = LocalFile::new(file.name(), bytes);
    let mime = file.type_();
    Ok(if mime.is_empty() {
        local
    } else {
        local.with_content_type(mime)
    })
}

/// Confirmation through the browser's modal dialog
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowConfirm;

impl Confirm for WindowConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
