//! Add-recipe form state and its validation into a [`NewRecipe`].

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use recipebook_domain::id::UserId;
use recipebook_domain::recipe::{
    DEFAULT_CATEGORY, Difficulty, Nutrition, PLACEHOLDER_IMAGE_URL,
};

use crate::domain::types::NewRecipe;
use crate::error::{CatalogError, ValidationErrors};

/// Largest accepted image upload.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

pub const REQUIRED: &str = "This field is required";
pub const NOT_POSITIVE: &str = "Please enter a positive number";
pub const TOO_LARGE: &str = "Please enter a smaller number";
pub const NO_INGREDIENTS: &str = "At least one ingredient is required";
pub const NO_STEPS: &str = "At least one step is required";

/// An ordered, editable list of input rows. Never shrinks below one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItems {
    rows: Vec<String>,
}

impl Default for LineItems {
    fn default() -> Self {
        Self {
            rows: vec![String::new()],
        }
    }
}

impl LineItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let rows: Vec<String> = lines.into_iter().map(Into::into).collect();
        if rows.is_empty() {
            Self::default()
        } else {
            Self { rows }
        }
    }

    /// Append an empty row and return its index.
    pub fn push(&mut self) -> usize {
        self.rows.push(String::new());
        self.rows.len() - 1
    }

    /// Returns `false` if `index` is out of range.
    pub fn set(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                *row = text.into();
                true
            }
            None => false,
        }
    }

    /// Refused when only one row remains or `index` is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    pub fn can_remove(&self) -> bool {
        self.rows.len() > 1
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Rows paired with their 1-based display number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.rows.iter().enumerate().map(|(i, r)| (i + 1, r.as_str()))
    }

    /// Trimmed non-blank values in order.
    pub fn values(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// A picked image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Check type and size, then encode as a `data:` URI.
    pub fn into_data_uri(self) -> Result<String, CatalogError> {
        let mut errors = ValidationErrors::new();
        if self.bytes.len() > MAX_IMAGE_BYTES {
            errors.push("image", "File size must be less than 5MB");
        } else if !self.mime_type.starts_with("image/") {
            errors.push("image", "Please select an image file");
        }
        errors.into_result(())?;
        Ok(format!(
            "data:{};base64,{}",
            self.mime_type,
            STANDARD.encode(&self.bytes)
        ))
    }
}

/// Raw add-recipe form input, read at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub notes: String,
    pub ingredients: LineItems,
    pub steps: LineItems,
    /// Data URI of an accepted upload.
    pub image: Option<String>,
}

impl RecipeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every field and assemble the recipe. All problems are
    /// reported together.
    pub fn collect(&self, author_id: Option<UserId>) -> Result<NewRecipe, CatalogError> {
        let mut errors = ValidationErrors::new();

        if self.title.trim().is_empty() {
            errors.push("title", REQUIRED);
        }
        let prep = positive_number(&mut errors, "prepTime", &self.prep_time);
        let cook = positive_number(&mut errors, "cookTime", &self.cook_time);
        let servings = positive_number(&mut errors, "servings", &self.servings);

        let ingredients = self.ingredients.values();
        if ingredients.is_empty() {
            errors.push("ingredients", NO_INGREDIENTS);
        }
        let instructions = self.steps.values();
        if instructions.is_empty() {
            errors.push("steps", NO_STEPS);
        }

        let category = match self.category.trim() {
            "" => DEFAULT_CATEGORY.to_owned(),
            c => c.to_owned(),
        };

        errors.into_result(NewRecipe {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            category,
            prep_time_minutes: prep.unwrap_or(0),
            cook_time_minutes: cook.unwrap_or(0),
            servings: servings.unwrap_or(1).max(1),
            ingredients,
            instructions,
            notes: self.notes.trim().to_owned(),
            image_ref: self
                .image
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_owned()),
            difficulty: Difficulty::Medium,
            nutrition: Nutrition::default(),
            author_id,
        })
    }
}

/// Parse a non-empty numeric field, truncating toward zero. Blank means absent.
fn positive_number(errors: &mut ValidationErrors, field: &'static str, raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => {
            let whole = n.trunc();
            if whole > f64::from(u32::MAX) {
                errors.push(field, TOO_LARGE);
                return None;
            }
            Some(whole as u32)
        }
        _ => {
            errors.push(field, NOT_POSITIVE);
            None
        }
    }
}
