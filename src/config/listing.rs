use serde::{Deserialize, Serialize};

/// What a collection listing does with a row that fails to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeErrorPolicy {
    /// Log the row at `warn` and keep going.
    #[default]
    Skip,
    /// Fail the whole listing.
    Abort,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListingConfig {
    /// TOML: `listing.on_decode_error`. Default: `skip`.
    #[serde(default)]
    pub on_decode_error: DecodeErrorPolicy,
}
