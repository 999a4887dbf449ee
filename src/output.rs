// src/output.rs
use std::fs::File;
use std::io::{self, Write};

/// One row of the figure run manifest
pub struct ManifestRow {
    pub figure: String,
    pub file: String,
    pub seed: u64,
    pub paths: usize,
    pub elapsed_ms: f64,
}

pub fn write_manifest_csv(filename: &str, rows: &[ManifestRow]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(
        file,
        "# generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "figure,file,seed,paths,elapsed_ms")?;
    for row in rows {
        writeln!(
            file,
            "{},{},{},{},{:.3}",
            row.figure, row.file, row.seed, row.paths, row.elapsed_ms
        )?;
    }
    Ok(())
}
