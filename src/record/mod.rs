//! Records - the immutable product entries a view is derived from.
//!
//! The schema is the only external data contract of the crate. Loaders hand
//! the engine a fully-materialized `Vec<Record>`; the engine never mutates it.
//!
//! ## Example
//!
//! ```
//! use product_view::Record;
//!
//! let record: Record = serde_json::from_str(
//!     r#"{"id": 1, "title": "Apple", "price": 3.5, "images": []}"#,
//! ).unwrap();
//! assert_eq!(record.title, "Apple");
//! assert!(record.category.is_none());
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Category a product belongs to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// One product entry in the source collection.
///
/// Unknown fields in the source document are ignored. `description`,
/// `category` and `images` default when absent or `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

impl Record {
    /// Create a record with only the fields the engine queries on.
    pub fn new(id: u64, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            description: String::new(),
            category: None,
            images: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, name: impl Into<String>, image: Option<String>) -> Self {
        self.category = Some(Category {
            name: name.into(),
            image,
        });
        self
    }

    /// Append an image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    /// Category name, if the record has one.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// Category image, if the record has one.
    pub fn category_image(&self) -> Option<&str> {
        self.category.as_ref().and_then(|c| c.image.as_deref())
    }
}
