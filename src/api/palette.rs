//! Color Palette API
//!
//! Fetches a color scheme for a hex seed and projects it down to the plain
//! hex strings the views work with.

use super::{check_status, ApiClient};
use crate::error::ApiError;
use crate::models::PaletteResponse;

impl ApiClient {
    /// GET a palette for `seed`, as hex strings in response order
    pub async fn fetch_palette(&self, seed: &str) -> Result<Vec<String>, ApiError> {
        let response = self.http().get(self.scheme_url(seed)).send().await?;
        let palette: PaletteResponse = check_status(response)?.json().await?;
        Ok(hex_values(palette))
    }
}

/// `{colors: [{hex: {value}}]}` -> `["#111111", ...]`, order preserved
fn hex_values(palette: PaletteResponse) -> Vec<String> {
    palette
        .colors
        .into_iter()
        .map(|color| color.hex.value)
        .collect()
}
