use std::path::Path;

use courses_core::CoursesCore;
use courses_core::service::seed::dto::{SeedDataDTO, SeedResultDTO};

use crate::ServerError;

pub fn read_seed_file(path: &Path) -> Result<SeedDataDTO, ServerError> {
    let content = std::fs::read_to_string(path).map_err(|source| ServerError::SeedFile {
        path: path.to_owned(),
        source,
    })?;

    Ok(serde_json::from_str(&content)?)
}

pub async fn load_seed_file(core: &CoursesCore, path: &Path) -> Result<SeedResultDTO, ServerError> {
    let seed = read_seed_file(path)?;
    tracing::debug!("Loading seed data from {}", path.display());

    Ok(core.seed_service.load_seed_data(seed).await?)
}
