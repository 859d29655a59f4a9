use super::entities::{ListingFields, MarketplaceFilter};

/// Trimmed, non-empty title.
pub fn check_title(title: &str) -> Result<String, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("title is required".to_string());
    }
    Ok(title.to_string())
}

pub fn check_numbers(
    price: Option<f64>,
    bedrooms: Option<i32>,
    bathrooms: Option<i32>,
    area_sqm: Option<f64>,
) -> Result<(), String> {
    if let Some(price) = price {
        if !price.is_finite() || price < 0.0 {
            return Err("price must be a non-negative number".to_string());
        }
    }
    if let Some(area) = area_sqm {
        if !area.is_finite() || area < 0.0 {
            return Err("areaSqm must be a non-negative number".to_string());
        }
    }
    if bedrooms.is_some_and(|b| b < 0) || bathrooms.is_some_and(|b| b < 0) {
        return Err("room counts cannot be negative".to_string());
    }
    Ok(())
}

/// Validates and normalizes fields for a new listing.
pub fn check_fields(mut fields: ListingFields) -> Result<ListingFields, String> {
    fields.title = check_title(&fields.title)?;
    check_numbers(fields.price, fields.bedrooms, fields.bathrooms, fields.area_sqm)?;
    fields.currency = fields.currency.map(|c| c.trim().to_uppercase());
    Ok(fields)
}

pub fn check_filter(filter: &MarketplaceFilter) -> Result<(), String> {
    if let (Some(min), Some(max)) = (filter.min_price, filter.max_price) {
        if min > max {
            return Err("minPrice cannot exceed maxPrice".to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(check_title("  Sea view loft ").unwrap(), "Sea view loft");
        assert!(check_title("   ").is_err());
    }

    #[test]
    fn test_negative_numbers_rejected() {
        assert!(check_numbers(Some(-1.0), None, None, None).is_err());
        assert!(check_numbers(None, Some(-2), None, None).is_err());
        assert!(check_numbers(None, None, None, Some(f64::NAN)).is_err());
        assert!(check_numbers(Some(0.0), Some(3), Some(2), Some(80.5)).is_ok());
    }

    #[test]
    fn test_currency_uppercased() {
        let fields = check_fields(ListingFields {
            title: "Loft".to_string(),
            currency: Some(" eur".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(fields.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_inverted_price_range() {
        let filter = MarketplaceFilter {
            min_price: Some(500.0),
            max_price: Some(100.0),
            ..Default::default()
        };
        assert!(check_filter(&filter).is_err());
    }
}
