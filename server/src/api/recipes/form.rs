//! Multipart form reader shared by the add and update recipe endpoints.

use crate::error::ApiError;
use axum::extract::Multipart;

/// Text fields and the optional image captured from a recipe form. Unknown
/// fields are ignored.
#[derive(Debug, Default)]
pub struct RecipeForm {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<String>,
    pub category: Option<String>,
    pub image: Option<UploadedImage>,
}

#[derive(Debug)]
pub struct UploadedImage {
    pub filename: String,
    pub data: Vec<u8>,
}

impl RecipeForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = RecipeForm::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            ApiError::BadRequest(format!("Failed to read multipart data: {}", e.body_text()))
        })? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "title" | "ingredients" | "steps" | "category" => {
                    let value = field.text().await.map_err(|e| {
                        ApiError::BadRequest(format!(
                            "Invalid value for field '{name}': {}",
                            e.body_text()
                        ))
                    })?;
                    form.set_text(&name, value);
                }
                "image" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let data = field.bytes().await.map_err(|e| {
                        ApiError::BadRequest(format!(
                            "Failed to read file data: {}",
                            e.body_text()
                        ))
                    })?;
                    // A file input submitted with no selection arrives as an
                    // empty part; treat it as no image.
                    if !data.is_empty() {
                        form.image = Some(UploadedImage {
                            filename,
                            data: data.to_vec(),
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    fn set_text(&mut self, name: &str, value: String) {
        let slot = match name {
            "title" => &mut self.title,
            "ingredients" => &mut self.ingredients,
            "steps" => &mut self.steps,
            "category" => &mut self.category,
            _ => return,
        };
        *slot = Some(value);
    }

    /// Required-field accessor for the create path; blank counts as missing.
    pub fn require(&self, name: &str) -> Result<&str, ApiError> {
        let value = match name {
            "title" => self.title.as_deref(),
            "ingredients" => self.ingredients.as_deref(),
            "steps" => self.steps.as_deref(),
            "category" => self.category.as_deref(),
            _ => None,
        };

        match value {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ApiError::BadRequest(format!("Field '{name}' is required"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_missing_and_blank_fields() {
        let form = RecipeForm::default();
        assert!(matches!(
            form.require("title"),
            Err(ApiError::BadRequest(_))
        ));

        let form = RecipeForm {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            form.require("title"),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn require_returns_present_fields() {
        let form = RecipeForm {
            title: Some("Dal".to_string()),
            ..Default::default()
        };
        assert_eq!(form.require("title").unwrap(), "Dal");
    }

    #[test]
    fn set_text_fills_the_right_slot() {
        let mut form = RecipeForm::default();
        form.set_text("category", "indian".to_string());
        assert_eq!(form.category.as_deref(), Some("indian"));
        assert!(form.title.is_none());
    }
}
