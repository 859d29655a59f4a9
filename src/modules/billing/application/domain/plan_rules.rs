/// Field checks shared by plan creation and plan updates.
pub fn check_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Plan name must not be empty".to_string());
    }
    Ok(())
}

pub fn check_price(monthly_price_usd: f64) -> Result<(), String> {
    if !monthly_price_usd.is_finite() || monthly_price_usd < 0.0 {
        return Err("monthlyPriceUsd must be a non-negative number".to_string());
    }
    Ok(())
}

pub fn check_non_negative(field: &str, value: i32) -> Result<(), String> {
    if value < 0 {
        return Err(format!("{} must not be negative", field));
    }
    Ok(())
}
