//! Site registry lookup.

use gloo_net::http::Request;

use crate::{AppError, AppResult, Site, FUNCTIONS_BASE};

/// Fetch the managed sites the operator can import members into.
pub async fn fetch_sites() -> AppResult<Vec<Site>> {
    let url = format!("{}/listSites", FUNCTIONS_BASE);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(format!("site list request failed: {}", e)))?;

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Api(format!(
            "site list failed ({}): {}",
            response.status(),
            error_text
        )));
    }

    response
        .json::<Vec<Site>>()
        .await
        .map_err(|e| AppError::Decode(format!("bad site list payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use crate::Site;

    #[test]
    fn test_site_deserialization() {
        let json = r#"[
            {"_id": "rec-1", "siteName": "Alpha Studio", "siteId": "site-alpha"},
            {"_id": "rec-2", "siteName": "Beta Shop", "siteId": "site-beta"}
        ]"#;

        let sites: Vec<Site> = serde_json::from_str(json).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].id, "rec-1");
        assert_eq!(sites[0].site_name, "Alpha Studio");
        assert_eq!(sites[0].site_id, "site-alpha");
        assert_eq!(sites[1].site_name, "Beta Shop");
    }
}
