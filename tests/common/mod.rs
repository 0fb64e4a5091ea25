// common/mod.rs - Shared test fixtures
//
// This module provides:
// 1. Product/image builders with realistic values
// 2. An in-memory `ProductApi` that records every call it receives
// 3. Preview sources that never touch a browser

#![allow(dead_code)]

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;

use moro_admin::web_app::api::{ProductApi, ProductSubmission, SubmitTarget};
use moro_admin::web_app::error::{AdminError, Result};
use moro_admin::web_app::model::{ImageColor, LocalFile, Product, ProductImage, ProductType};
use moro_admin::web_app::state::{MemoryPreviews, PreviewSource};

pub fn price(value: &str) -> Decimal {
    Decimal::from_str(value).expect("test price must parse")
}

pub fn png(name: &str) -> LocalFile {
    LocalFile::new(name, vec![0x89, b'P', b'N', b'G']).with_content_type("image/png")
}

pub fn image(id: i64, color: Option<ImageColor>) -> ProductImage {
    ProductImage {
        id,
        image: format!("http://api.test/media/products/{id}.png"),
        color,
        is_featured: false,
        order: id as u32,
    }
}

pub fn totebag(id: i64, title: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        price: price("25.00"),
        product_type: ProductType::Totebag,
        available_sizes: None,
        images: Vec::new(),
    }
}

pub fn tshirt(id: i64, title: &str, sizes: &str) -> Product {
    Product {
        product_type: ProductType::Tshirt,
        available_sizes: Some(sizes.to_string()),
        price: price("19.99"),
        ..totebag(id, title)
    }
}

/// Memory previews plus the trait object the draft wants
pub fn previews() -> (Arc<MemoryPreviews>, Arc<dyn PreviewSource>) {
    let memory = MemoryPreviews::new();
    let source: Arc<dyn PreviewSource> = memory.clone();
    (memory, source)
}

/// Which API method was called, in order
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List,
    Create,
    Update(i64),
    Delete(i64),
}

/// In-memory catalog standing in for the remote API
#[derive(Default)]
pub struct FakeApi {
    products: Mutex<Vec<Product>>,
    calls: Mutex<Vec<Call>>,
    submissions: Mutex<Vec<ProductSubmission>>,
    next_id: Mutex<i64>,
    fail_next_save: Mutex<Option<AdminError>>,
    fail_lists: Mutex<Option<AdminError>>,
}

impl FakeApi {
    pub fn with_products(products: Vec<Product>) -> Self {
        let max_id = products.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            products: Mutex::new(products),
            next_id: Mutex::new(max_id.max(100)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn submissions(&self) -> Vec<ProductSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn stored(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }

    pub fn fail_next_save(&self, err: AdminError) {
        *self.fail_next_save.lock().unwrap() = Some(err);
    }

    pub fn fail_lists(&self, err: AdminError) {
        *self.fail_lists.lock().unwrap() = Some(err);
    }

    fn next_id(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }

    fn stored_images(&self, submission: &ProductSubmission) -> Vec<ProductImage> {
        submission
            .uploads
            .iter()
            .map(|upload| {
                let id = self.next_id();
                ProductImage {
                    id,
                    image: format!("http://api.test/media/{}", upload.file.file_name),
                    color: upload.color,
                    is_featured: false,
                    order: 0,
                }
            })
            .collect()
    }
}

impl ProductApi for FakeApi {
    async fn list_products(&self) -> Result<Vec<Product>> {
        self.calls.lock().unwrap().push(Call::List);
        if let Some(err) = self.fail_lists.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.stored())
    }

    async fn save_product(&self, submission: ProductSubmission) -> Result<Product> {
        let call = match submission.target {
            SubmitTarget::Create => Call::Create,
            SubmitTarget::Update { product_id } => Call::Update(product_id),
        };
        self.calls.lock().unwrap().push(call);
        self.submissions.lock().unwrap().push(submission.clone());

        if let Some(err) = self.fail_next_save.lock().unwrap().take() {
            return Err(err);
        }

        let sizes = (!submission.available_sizes.is_empty()).then(|| submission.available_sizes.clone());
        let new_images = self.stored_images(&submission);

        match submission.target {
            SubmitTarget::Create => {
                let product = Product {
                    id: self.next_id(),
                    title: submission.title.clone(),
                    description: submission.description.clone(),
                    price: submission.price,
                    product_type: submission.product_type,
                    available_sizes: sizes,
                    images: new_images,
                };
                self.products.lock().unwrap().push(product.clone());
                Ok(product)
            }
            SubmitTarget::Update { product_id } => {
                let mut products = self.products.lock().unwrap();
                let product = products
                    .iter_mut()
                    .find(|p| p.id == product_id)
                    .ok_or_else(|| AdminError::ServerValidation("Not found.".to_string()))?;

                product.title = submission.title.clone();
                product.description = submission.description.clone();
                product.price = submission.price;
                product.product_type = submission.product_type;
                product.available_sizes = sizes;
                product
                    .images
                    .retain(|image| !submission.removed_images.contains(&image.id));
                product.images.extend(new_images);
                Ok(product.clone())
            }
        }
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Delete(id));
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(AdminError::ServerValidation("Not found.".to_string()));
        }
        Ok(())
    }
}
