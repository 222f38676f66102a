#[cfg(debug_assertions)]
pub fn get_base_path() -> &'static str {
    ""  // Served from the root by the local dev server
}

#[cfg(not(debug_assertions))]
pub fn get_base_path() -> &'static str {
    "/landing-broker"  // GitHub Pages project path
}

pub const MESSAGING_BASE_URL: &str = "https://wa.me";

/// Resolves an image reference from the content file to a served URL.
/// Absolute URLs are passed through untouched.
pub fn asset_url(reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }
    format!("{}/assets/{}", get_base_path(), reference.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_reference_lands_under_assets() {
        assert_eq!(
            asset_url("andrea.jpg"),
            format!("{}/assets/andrea.jpg", get_base_path())
        );
        assert_eq!(asset_url("/andrea.jpg"), asset_url("andrea.jpg"));
    }

    #[test]
    fn absolute_reference_is_kept() {
        let url = "https://cdn.example.com/andrea.jpg";
        assert_eq!(asset_url(url), url);
    }
}
