use crate::model::Enrollee;
use eyre::{Report, WrapErr, ensure};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{info, trace};

const FIELDS: usize = 4;

/// Path of the dataset holding `size` enrollees.
pub fn dataset_path(data_dir: &Path, size: usize) -> PathBuf {
    data_dir.join(format!("data_{size}.txt"))
}

/// Reads datasets made of one enrollee per line, fields separated by
/// whitespace: `name faculty speciality score`. Blank lines are skipped.
pub struct Loader {
    data_dir: PathBuf,
}

impl Loader {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_owned(),
        }
    }

    /// Load the first `size` enrollees of `data_<size>.txt`.
    pub fn load(&self, size: usize) -> Result<Vec<Enrollee>, Report> {
        let path = dataset_path(&self.data_dir, size);
        let file = File::open(&path)
            .wrap_err_with(|| format!("cannot open dataset file {}", path.display()))?;
        let mut enrollees = Vec::with_capacity(size);
        for (index, line) in BufReader::new(file).lines().enumerate() {
            if enrollees.len() == size {
                break;
            }
            let line =
                line.wrap_err_with(|| format!("cannot read dataset file {}", path.display()))?;
            let fields = line.split_ascii_whitespace().collect::<Vec<_>>();
            if fields.is_empty() {
                continue;
            }
            ensure!(
                fields.len() == FIELDS,
                "malformed record in {} at line {}: {} fields, {} expected",
                path.display(),
                index + 1,
                fields.len(),
                FIELDS
            );
            let record = csv::StringRecord::from(fields);
            let enrollee: Enrollee = record.deserialize(None).wrap_err_with(|| {
                format!("malformed record in {} at line {}", path.display(), index + 1)
            })?;
            enrollees.push(enrollee);
        }
        ensure!(
            enrollees.len() == size,
            "dataset file {} holds {} records, {} expected",
            path.display(),
            enrollees.len(),
            size
        );
        info!(path = %path.display(), records = %size, "Dataset loaded");
        Ok(enrollees)
    }
}

/// Write `enrollees` in the dataset format.
pub fn save_dataset(path: &Path, enrollees: &[Enrollee]) -> Result<(), Report> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .wrap_err_with(|| format!("cannot create dataset file {}", path.display()))?;
    for enrollee in enrollees {
        writer.serialize(enrollee)?;
    }
    writer
        .flush()
        .wrap_err_with(|| format!("cannot write dataset file {}", path.display()))?;
    trace!(path = %path.display(), records = %enrollees.len(), "Dataset written");
    Ok(())
}
