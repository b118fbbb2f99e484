//! Decode pipeline for the bulk city listing: gzip payload → JSON array →
//! id/name lookup table. Kept free of networking so it can be tested
//! against in-memory fixtures.

use std::collections::HashMap;
use std::io::Read;

use flate2::read::GzDecoder;
use serde::Deserialize;

use crate::error::WeatherError;

/// One element of the bulk `city.list.json` array. Only `id` and `name`
/// are consumed; both are optional here so a malformed entry is
/// distinguishable from malformed JSON.
#[derive(Debug, Deserialize)]
struct CityEntry {
    id: Option<i64>,
    name: Option<String>,
}

/// Fully decompress a gzip payload into memory.
pub(crate) fn decompress(payload: &[u8]) -> Result<Vec<u8>, WeatherError> {
    let mut decoder = GzDecoder::new(payload);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(WeatherError::Decompression)?;
    Ok(out)
}

/// Parse the decompressed city list and build the id → name table.
///
/// Entries lacking an `id` or `name` are skipped with a warning rather than
/// failing the whole listing. The first entry for a given id wins; later
/// duplicates are ignored.
pub(crate) fn parse_city_list(json: &[u8]) -> Result<HashMap<i64, String>, WeatherError> {
    let entries: Vec<CityEntry> = serde_json::from_slice(json)?;

    let mut cities = HashMap::with_capacity(entries.len());
    for entry in entries {
        let (Some(id), Some(name)) = (entry.id, entry.name) else {
            tracing::warn!("skipping city entry without id or name");
            continue;
        };
        cities.entry(id).or_insert(name);
    }

    Ok(cities)
}
