use std::path::Path;

use arrow::{csv::WriterBuilder, record_batch::RecordBatch};

use crate::Error;

/// Write a RecordBatch to a CSV file with a header row.
pub fn write_csv<P>(batch: &RecordBatch, path: P) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let file = std::fs::File::create(&path)?;
    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer.write(batch)?;

    log::info!(
        "Wrote {} rows of output to {:?}",
        batch.num_rows(),
        path.as_ref()
    );
    Ok(())
}
