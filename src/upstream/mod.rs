//! PokéAPI client.
//!
//! All outbound calls go through [`PokeApiClient`]. Raw payloads are
//! normalized here and never leave this module.

mod payload;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::models::{EvolutionStage, Species};

pub use payload::ResourceList;
use payload::{RawAbility, RawEvolutionChain, RawPokemon, RawSpecies};

/// Failure talking to PokéAPI.
#[derive(Debug)]
pub enum UpstreamError {
    /// The resource does not exist (HTTP 404)
    NotFound(String),
    /// Any other non-success status
    Status { url: String, status: u16 },
    /// Connection or protocol failure
    Transport(String),
    /// Body was not the expected JSON
    Decode(String),
    /// Base URL or resource path could not be built
    InvalidUrl(String),
}

impl UpstreamError {
    /// Upstream answered, but not with a success status.
    pub fn is_status(&self) -> bool {
        matches!(self, UpstreamError::NotFound(_) | UpstreamError::Status { .. })
    }
}

impl std::fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpstreamError::NotFound(url) => write!(f, "{} not found", url),
            UpstreamError::Status { url, status } => {
                write!(f, "{} answered with status {}", url, status)
            }
            UpstreamError::Transport(msg) => write!(f, "request failed: {}", msg),
            UpstreamError::Decode(msg) => write!(f, "unexpected response body: {}", msg),
            UpstreamError::InvalidUrl(msg) => write!(f, "invalid url: {}", msg),
        }
    }
}

impl std::error::Error for UpstreamError {}

/// Thin JSON client over the PokéAPI REST endpoints.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Result<Self, UpstreamError> {
        let base_url =
            Url::parse(base_url).map_err(|e| UpstreamError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// `{base}/{segments...}` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn list_endpoint(&self, limit: u32) -> Result<Url, UpstreamError> {
        let mut url = self.endpoint(&["pokemon"])?;
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        Ok(url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, UpstreamError> {
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| UpstreamError::Decode(format!("{}: {}", url, e)))
    }

    /// Raw pass-through used by the proxy route: a single Pokémon by lowercased
    /// name or id, or the first `list_limit` entries when no query is given.
    pub async fn raw_pokemon(
        &self,
        query: Option<&str>,
        list_limit: u32,
    ) -> Result<serde_json::Value, UpstreamError> {
        let url = match query {
            Some(q) => self.endpoint(&["pokemon", &q.to_lowercase()])?,
            None => self.list_endpoint(list_limit)?,
        };
        self.fetch_json(url).await
    }

    pub async fn list(&self, limit: u32) -> Result<ResourceList, UpstreamError> {
        self.fetch_json(self.list_endpoint(limit)?).await
    }

    /// One Pokémon (species or variant) normalized into a [`Species`].
    pub async fn pokemon(
        &self,
        id_or_name: &str,
        display_name: Option<&str>,
    ) -> Result<Species, UpstreamError> {
        let raw: RawPokemon = self.fetch_json(self.endpoint(&["pokemon", id_or_name])?).await?;
        Ok(raw.normalize(display_name))
    }

    /// English short effect of an ability.
    pub async fn ability_description(&self, name: &str) -> Result<String, UpstreamError> {
        let raw: RawAbility = self.fetch_json(self.endpoint(&["ability", name])?).await?;
        Ok(raw.english_short_effect())
    }

    /// Evolution chain of a species, flattened. Species without a chain give
    /// an empty list.
    pub async fn evolution_chain(&self, species_id: u32) -> Result<Vec<EvolutionStage>, UpstreamError> {
        let species: RawSpecies = self
            .fetch_json(self.endpoint(&["pokemon-species", &species_id.to_string()])?)
            .await?;

        let Some(chain_ref) = species.evolution_chain else {
            return Ok(Vec::new());
        };
        let url = Url::parse(&chain_ref.url)
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {}", chain_ref.url, e)))?;
        let chain: RawEvolutionChain = self.fetch_json(url).await?;
        Ok(chain.flatten())
    }
}
