// web_app/api/form.rs - Multipart body for product create/update
//
// The product endpoints take multipart/form-data. Scalars go first, then one
// `uploaded_images` file part per new image, then exactly as many
// `image_colors` parts (blank when unset) so the server can pair them by
// position, then `removed_images` ids when updating.

use reqwest::multipart::{Form, Part};
use rust_decimal::Decimal;

use crate::web_app::error::{AdminError, Result};
use crate::web_app::model::{ImageColor, LocalFile, ProductType};

pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_PRODUCT_TYPE: &str = "product_type";
pub const FIELD_AVAILABLE_SIZES: &str = "available_sizes";
pub const FIELD_UPLOADED_IMAGES: &str = "uploaded_images";
pub const FIELD_IMAGE_COLORS: &str = "image_colors";
pub const FIELD_REMOVED_IMAGES: &str = "removed_images";

/// Create goes to the collection, update to the item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update { product_id: i64 },
}

/// New image plus the color chosen for it
#[derive(Clone, Debug, PartialEq)]
pub struct ImageUpload {
    pub file: LocalFile,
    pub color: Option<ImageColor>,
}

/// Everything one save request sends
#[derive(Clone, Debug, PartialEq)]
pub struct ProductSubmission {
    pub target: SubmitTarget,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub product_type: ProductType,
    /// Already cleared for non-T-shirt products
    pub available_sizes: String,
    pub uploads: Vec<ImageUpload>,
    pub removed_images: Vec<i64>,
}

/// One multipart field, before it is handed to reqwest
#[derive(Clone, Debug, PartialEq)]
pub enum FormValue {
    Text(String),
    File(LocalFile),
}

impl FormValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(text) => Some(text),
            FormValue::File(_) => None,
        }
    }
}

impl ProductSubmission {
    /// Fields in the order they are written to the body
    pub fn fields(&self) -> Vec<(&'static str, FormValue)> {
        let mut fields = vec![
            (FIELD_TITLE, FormValue::Text(self.title.clone())),
            (FIELD_DESCRIPTION, FormValue::Text(self.description.clone())),
            (FIELD_PRICE, FormValue::Text(format!("{:.2}", self.price))),
            (
                FIELD_PRODUCT_TYPE,
                FormValue::Text(self.product_type.as_str().to_string()),
            ),
            (
                FIELD_AVAILABLE_SIZES,
                FormValue::Text(if self.product_type.has_sizes() {
                    self.available_sizes.clone()
                } else {
                    String::new()
                }),
            ),
        ];

        for upload in &self.uploads {
            fields.push((FIELD_UPLOADED_IMAGES, FormValue::File(upload.file.clone())));
        }

        for upload in &self.uploads {
            let color = upload.color.map(ImageColor::as_str).unwrap_or_default();
            fields.push((FIELD_IMAGE_COLORS, FormValue::Text(color.to_string())));
        }

        if let SubmitTarget::Update { .. } = self.target {
            for id in &self.removed_images {
                fields.push((FIELD_REMOVED_IMAGES, FormValue::Text(id.to_string())));
            }
        }

        fields
    }

    /// Text values of every field called `name`
    pub fn text_values(&self, name: &str) -> Vec<String> {
        self.fields()
            .into_iter()
            .filter(|(field, _)| *field == name)
            .filter_map(|(_, value)| value.as_text().map(str::to_string))
            .collect()
    }

    pub fn into_multipart(self) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields() {
            form = match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File(file) => form.part(name, file_part(file)?),
            };
        }
        Ok(form)
    }
}

fn file_part(file: LocalFile) -> Result<Part> {
    let mut part = Part::bytes(file.bytes).file_name(file.file_name);
    if let Some(mime) = file.content_type.as_deref().filter(|mime| !mime.trim().is_empty()) {
        part = part.mime_str(mime).map_err(|e| {
            AdminError::InvalidDraft(format!("Unsupported file type {mime:?}: {e}"))
        })?;
    }
    Ok(part)
}
