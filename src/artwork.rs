use anyhow::Result;
use image::DynamicImage;
use reqwest::Client;

pub struct ArtworkFetcher {
    client: Client,
}

impl ArtworkFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch_image(&self, url: &str) -> Result<DynamicImage> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        // Decoding a large cover can take a while
        let img = tokio::task::spawn_blocking(move || decode(&bytes)).await??;
        Ok(img)
    }
}

pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}
