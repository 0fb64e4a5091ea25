// web_app/state/draft.rs - In-progress product form state
//
// A draft is either empty (new product) or seeded from an existing product.
// Images are kept as one ordered list where each entry carries its own color,
// so the index -> color view handed to the form is derived and can never
// drift out of step with the images when one is removed.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::web_app::api::form::{ImageUpload, ProductSubmission, SubmitTarget};
use crate::web_app::error::{AdminError, Result};
use crate::web_app::model::{split_sizes, ImageColor, LocalFile, Product, ProductType};
use crate::web_app::state::preview::{PreviewHandle, PreviewSource};

/// Largest price the catalog stores (10 digits, 2 of them decimals)
const PRICE_LIMIT: i64 = 100_000_000;

/// Whether the draft creates a new product or updates an existing one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DraftMode {
    #[default]
    New,
    Editing { product_id: i64 },
}

/// Where a draft image's bytes live
#[derive(Debug)]
pub enum DraftImageSource {
    /// Already stored on the server
    Persisted { id: i64, url: String },
    /// Picked locally, uploaded on the next save
    Pending { file: LocalFile, preview: PreviewHandle },
}

#[derive(Debug)]
pub struct DraftImage {
    pub source: DraftImageSource,
    pub color: Option<ImageColor>,
}

impl DraftImage {
    /// URL to render in the preview strip
    pub fn preview_url(&self) -> &str {
        match &self.source {
            DraftImageSource::Persisted { url, .. } => url,
            DraftImageSource::Pending { preview, .. } => preview.url(),
        }
    }

    pub fn persisted_id(&self) -> Option<i64> {
        match self.source {
            DraftImageSource::Persisted { id, .. } => Some(id),
            DraftImageSource::Pending { .. } => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.source, DraftImageSource::Pending { .. })
    }
}

/// Unsaved product form
#[derive(Debug, Default)]
pub struct Draft {
    mode: DraftMode,
    title: String,
    description: String,
    price: String,
    product_type: ProductType,
    available_sizes: String,
    images: Vec<DraftImage>,
    removed_image_ids: Vec<i64>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a draft from a product the admin chose to edit
    pub fn from_product(product: &Product) -> Self {
        let images = product
            .images
            .iter()
            .map(|image| DraftImage {
                source: DraftImageSource::Persisted {
                    id: image.id,
                    url: image.image.clone(),
                },
                color: image.color,
            })
            .collect();

        Self {
            mode: DraftMode::Editing {
                product_id: product.id,
            },
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            product_type: product.product_type,
            available_sizes: product.available_sizes.clone().unwrap_or_default(),
            images,
            removed_image_ids: Vec::new(),
        }
    }

    pub fn mode(&self) -> DraftMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, DraftMode::Editing { .. })
    }

    /// True for a new-product draft nobody has typed into yet
    pub fn is_empty(&self) -> bool {
        self.mode == DraftMode::New
            && self.title.is_empty()
            && self.description.is_empty()
            && self.price.is_empty()
            && self.available_sizes.is_empty()
            && self.images.is_empty()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    /// Sizes as typed, kept even while the type is not a T-shirt
    pub fn available_sizes(&self) -> &str {
        &self.available_sizes
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    pub fn set_product_type(&mut self, product_type: ProductType) {
        self.product_type = product_type;
    }

    pub fn set_available_sizes(&mut self, sizes: impl Into<String>) {
        self.available_sizes = sizes.into();
    }

    pub fn images(&self) -> &[DraftImage] {
        &self.images
    }

    pub fn previews(&self) -> Vec<&str> {
        self.images.iter().map(DraftImage::preview_url).collect()
    }

    /// Files that will go out as `uploaded_images`, in order
    pub fn pending_files(&self) -> Vec<&LocalFile> {
        self.images
            .iter()
            .filter_map(|image| match &image.source {
                DraftImageSource::Pending { file, .. } => Some(file),
                DraftImageSource::Persisted { .. } => None,
            })
            .collect()
    }

    /// Index -> color for every image that has one
    pub fn image_colors(&self) -> BTreeMap<usize, ImageColor> {
        self.images
            .iter()
            .enumerate()
            .filter_map(|(index, image)| image.color.map(|color| (index, color)))
            .collect()
    }

    pub fn removed_image_ids(&self) -> &[i64] {
        &self.removed_image_ids
    }

    /// Append picked files, minting a preview for each
    pub fn add_images<I>(&mut self, files: I, previews: &Arc<dyn PreviewSource>)
    where
        I: IntoIterator<Item = LocalFile>,
    {
        for file in files {
            let preview = PreviewHandle::acquire(previews, &file);
            self.images.push(DraftImage {
                source: DraftImageSource::Pending { file, preview },
                color: None,
            });
        }
    }

    /// Drop the image at `index`.
    ///
    /// A persisted image is remembered in `removed_image_ids` so the next
    /// save deletes it; a pending file is just discarded (and its preview
    /// released). Later images, and their colors, shift down by one.
    /// Returns false when `index` is out of range.
    pub fn remove_image_at(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }

        let removed = self.images.remove(index);
        if let Some(id) = removed.persisted_id() {
            if !self.removed_image_ids.contains(&id) {
                self.removed_image_ids.push(id);
            }
        }
        true
    }

    /// Set or clear the color of the image currently at `index`
    pub fn set_image_color(&mut self, index: usize, color: Option<ImageColor>) -> bool {
        match self.images.get_mut(index) {
            Some(image) => {
                image.color = color;
                true
            }
            None => false,
        }
    }

    /// Sizes to transmit: only T-shirts carry any
    pub fn effective_sizes(&self) -> String {
        if self.product_type.has_sizes() {
            split_sizes(&self.available_sizes).join(",")
        } else {
            String::new()
        }
    }

    /// Check required fields and parse the price
    pub fn validate(&self) -> Result<Decimal> {
        if self.title.trim().is_empty() {
            return Err(AdminError::InvalidDraft("Title is required.".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(AdminError::InvalidDraft("Description is required.".to_string()));
        }
        parse_price(&self.price)
    }

    /// Snapshot of everything the save request needs
    pub fn to_submission(&self) -> Result<ProductSubmission> {
        let price = self.validate()?;

        let target = match self.mode {
            DraftMode::New => SubmitTarget::Create,
            DraftMode::Editing { product_id } => SubmitTarget::Update { product_id },
        };

        let uploads = self
            .images
            .iter()
            .filter_map(|image| match &image.source {
                DraftImageSource::Pending { file, .. } => Some(ImageUpload {
                    file: file.clone(),
                    color: image.color,
                }),
                DraftImageSource::Persisted { .. } => None,
            })
            .collect();

        let removed_images = match target {
            SubmitTarget::Create => Vec::new(),
            SubmitTarget::Update { .. } => self.removed_image_ids.clone(),
        };

        Ok(ProductSubmission {
            target,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            product_type: self.product_type,
            available_sizes: self.effective_sizes(),
            uploads,
            removed_images,
        })
    }
}

fn parse_price(raw: &str) -> Result<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AdminError::InvalidDraft("Price is required.".to_string()));
    }

    let price = Decimal::from_str(raw)
        .map_err(|_| AdminError::InvalidDraft(format!("Price {raw:?} is not a number.")))?;

    if price.is_sign_negative() {
        return Err(AdminError::InvalidDraft("Price cannot be negative.".to_string()));
    }
    if price.normalize().scale() > 2 {
        return Err(AdminError::InvalidDraft(
            "Price can have at most two decimal places.".to_string(),
        ));
    }
    if price >= Decimal::from(PRICE_LIMIT) {
        return Err(AdminError::InvalidDraft(format!(
            "Price must be below {PRICE_LIMIT}."
        )));
    }
    Ok(price)
}
