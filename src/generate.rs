use crate::config::GeneratorConfig;
use crate::loaders::{dataset_path, save_dataset};
use crate::model::Enrollee;
use eyre::{Report, WrapErr};
use rand::Rng;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// Random run of uppercase ASCII letters.
fn random_token<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> String {
    let len = rng.random_range(config.min_length..config.max_length);
    (0..len)
        .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
        .collect()
}

pub fn random_enrollee<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Enrollee {
    Enrollee {
        name: random_token(rng, config),
        faculty: random_token(rng, config),
        speciality: random_token(rng, config),
        score: rng.random_range(0..config.max_score),
    }
}

/// Write one random dataset per size into `data_dir`, replacing existing ones.
#[instrument(skip(config, rng))]
pub fn generate_datasets<R: Rng + ?Sized>(
    data_dir: &Path,
    sizes: &[usize],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<(), Report> {
    fs::create_dir_all(data_dir)
        .wrap_err_with(|| format!("cannot create data directory {}", data_dir.display()))?;
    for &size in sizes {
        let enrollees = (0..size)
            .map(|_| random_enrollee(rng, config))
            .collect::<Vec<_>>();
        save_dataset(&dataset_path(data_dir, size), &enrollees)?;
    }
    info!(datasets = %sizes.len(), "Datasets generated");
    Ok(())
}
