use std::borrow::Cow;

use validator::ValidationError;

use crate::entities::patch::Patch;

pub const MAX_TITLE_LENGTH: u64 = 200;
pub const MAX_SLUG_LENGTH: u64 = 120;
pub const MAX_TAGS: usize = 20;
pub const MAX_TAG_LENGTH: usize = 40;

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(new_validation_error("title_empty", "Title cannot be blank"));
    }
    if title.trim().len() != title.len() {
        return Err(new_validation_error(
            "title_whitespace",
            "Title must not have leading or trailing whitespace",
        ));
    }
    Ok(())
}

pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(new_validation_error("slug_empty", "Slug cannot be empty"));
    }
    if slug.len() > MAX_SLUG_LENGTH as usize {
        return Err(new_validation_error("slug_too_long", "Slug is too long"));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(new_validation_error(
            "slug_invalid_chars",
            "Slug must contain only lowercase letters, digits, or hyphens",
        ));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(new_validation_error(
            "slug_edge_hyphen",
            "Slug must not start or end with a hyphen",
        ));
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        Ok(_) => Err(new_validation_error(
            "invalid_url_scheme",
            "URL must start with http:// or https://",
        )),
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_tags(tags: &Vec<String>) -> Result<(), ValidationError> {
    if tags.len() > MAX_TAGS {
        return Err(new_validation_error("too_many_tags", "Too many tags provided"));
    }
    for tag in tags {
        if tag.is_empty() || tag.len() > MAX_TAG_LENGTH {
            return Err(new_validation_error(
                "invalid_tag_length",
                "Tag length must be within allowed range",
            ));
        }
    }
    Ok(())
}

// ----- Patch-aware wrappers for update requests -----

pub fn validate_patch_title(value: &Patch<String>) -> Result<(), ValidationError> {
    if let Some(title) = value.value() {
        validate_title(title)?;
    }
    Ok(())
}

pub fn validate_patch_slug(value: &Patch<String>) -> Result<(), ValidationError> {
    if let Some(slug) = value.value() {
        validate_slug(slug)?;
    }
    Ok(())
}

pub fn validate_patch_url(value: &Patch<String>) -> Result<(), ValidationError> {
    if let Some(url) = value.value() {
        validate_url(url)?;
    }
    Ok(())
}

pub fn validate_patch_tags(value: &Patch<Vec<String>>) -> Result<(), ValidationError> {
    if let Some(tags) = value.value() {
        validate_tags(tags)?;
    }
    Ok(())
}

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}
