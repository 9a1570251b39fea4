use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::{NabuError, Result};

const BASE_URL: &str = "https://www.nabu.de";
const PORTRAITS_PATH: &str = "/tiere-und-pflanzen/voegel/portraets/index.html";

/// Client for the NABU bird portrait index
pub struct NabuClient {
    client: reqwest::Client,
    base_url: String,
}

impl NabuClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the portrait index page and return the discovered portrait URLs
    pub async fn discover_portrait_links(&self) -> Result<Vec<String>> {
        let url = format!("{}{}", self.base_url, PORTRAITS_PATH);
        tracing::debug!("Fetching NABU portrait index: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NabuError::Parse(format!(
                "HTTP {} when fetching {}",
                status, url
            )));
        }

        let html = response.text().await?;
        extract_portrait_links(&html, &self.base_url)
    }
}

/// Extract bird portrait links from the index page HTML.
///
/// Portrait pages live under `/voegel/portraets/` and end in `.html`;
/// relative hrefs are resolved against the base URL. Order is preserved,
/// duplicates are dropped.
pub fn extract_portrait_links(html: &str, base_url: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let link_selector =
        Selector::parse("a[href]").map_err(|e| NabuError::Parse(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if !href.contains("/voegel/portraets/") || !href.ends_with(".html") {
            continue;
        }

        let full_url = if href.starts_with('/') {
            format!("{}{}", base_url, href)
        } else {
            href.to_string()
        };

        if seen.insert(full_url.clone()) {
            links.push(full_url);
        }
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_HTML: &str = r#"
        <html><body>
            <a href="/tiere-und-pflanzen/voegel/portraets/rotkehlchen.html">Rotkehlchen</a>
            <a href="/tiere-und-pflanzen/voegel/portraets/amsel.html">Amsel</a>
            <a href="/tiere-und-pflanzen/voegel/portraets/amsel.html">Amsel (Duplikat)</a>
            <a href="https://www.nabu.de/tiere-und-pflanzen/voegel/portraets/blaumeise.html">Blaumeise</a>
            <a href="/tiere-und-pflanzen/voegel/index.html">Übersicht</a>
            <a href="/spenden">Spenden</a>
        </body></html>
    "#;

    #[test]
    fn test_extract_portrait_links() {
        let links = extract_portrait_links(INDEX_HTML, "https://www.nabu.de").unwrap();
        assert_eq!(
            links,
            vec![
                "https://www.nabu.de/tiere-und-pflanzen/voegel/portraets/rotkehlchen.html",
                "https://www.nabu.de/tiere-und-pflanzen/voegel/portraets/amsel.html",
                "https://www.nabu.de/tiere-und-pflanzen/voegel/portraets/blaumeise.html",
            ]
        );
    }

    #[test]
    fn test_extract_portrait_links_empty_page() {
        let links = extract_portrait_links("<html></html>", "https://www.nabu.de").unwrap();
        assert!(links.is_empty());
    }
}
