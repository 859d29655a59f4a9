/// One file handed to the upload use case.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub label: Option<String>,
}

/// `image/*` media types only, parameters ignored.
pub fn is_image_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some((kind, subtype)) => kind == "image" && !subtype.is_empty(),
        None => false,
    }
}

pub fn check_upload(file: &UploadFile) -> Result<(), String> {
    if file.bytes.is_empty() {
        return Err(format!("{} is empty", file.file_name));
    }
    if !is_image_content_type(&file.content_type) {
        return Err(format!(
            "{} has content type {}; only images are accepted",
            file.file_name, file.content_type
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_types() {
        assert!(is_image_content_type("image/jpeg"));
        assert!(is_image_content_type("IMAGE/PNG; charset=binary"));
        assert!(!is_image_content_type("image/"));
        assert!(!is_image_content_type("application/pdf"));
        assert!(!is_image_content_type("text"));
    }

    #[test]
    fn test_empty_file_rejected() {
        let file = UploadFile {
            file_name: "a.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![],
            label: None,
        };
        assert!(check_upload(&file).is_err());
    }
}
