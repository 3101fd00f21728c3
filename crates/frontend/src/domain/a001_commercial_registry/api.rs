use gloo_net::http::Request;

/// Fetch the registry XML asset as text
pub async fn fetch_registry_xml(url: String) -> Result<String, String> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch {}: {} {}",
            url,
            response.status(),
            response.status_text()
        ));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))
}
