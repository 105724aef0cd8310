use anyhow::{bail, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Handle for the spreadsheet-backed dish endpoint. One base URL serves
/// both the GET (catalog) and POST (new dish) sides.
pub struct Api {
    pub http: Client,
    pub endpoint: Url,
}

impl Api {
    pub fn connect(endpoint: &str) -> Result<Self> {
        // URL validation (friendly error before any network I/O)
        let Ok(endpoint) = Url::parse(endpoint) else {
            bail!("Invalid API URL: {}", endpoint);
        };
        let http = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()?;
        Ok(Api { http, endpoint })
    }
}
