const MAX_CHANNEL_LEN: usize = 60;

/// Trimmed value, or an error naming the blank field.
pub fn required_text(field: &str, value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(trimmed.to_string())
}

pub fn check_channel(channel: &str) -> Result<String, String> {
    let channel = required_text("channel", channel)?;
    if channel.chars().count() > MAX_CHANNEL_LEN {
        return Err(format!(
            "channel must be at most {} characters",
            MAX_CHANNEL_LEN
        ));
    }
    Ok(channel)
}

/// Blank keywords are stored as no keywords.
pub fn normalize_keywords(keywords: Option<String>) -> Option<String> {
    keywords
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}
