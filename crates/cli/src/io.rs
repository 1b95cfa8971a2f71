//! Point files: `re,im` columns as CSV, or Parquet for `.parquet` paths.

use anyhow::{Context, Result};
use orthosample::api::PointSet;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

fn is_parquet(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"))
}

pub fn write_points(path: &Path, points: &PointSet) -> Result<()> {
    let mut df = df!(
        "re" => points.re.as_slice(),
        "im" => points.im.as_slice()
    )?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if is_parquet(path) {
        ParquetWriter::new(file).finish(&mut df)?;
    } else {
        CsvWriter::new(file).include_header(true).finish(&mut df)?;
    }
    Ok(())
}

/// Read the `re`/`im` columns; null cells are an error.
pub fn read_points(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let lf = if is_parquet(path) {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())?
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?
    };
    let df = lf
        .select([
            col("re").cast(DataType::Float64),
            col("im").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading points from {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "points_loaded");
    let column = |name: &str| -> Result<Vec<f64>> {
        df.column(name)?
            .f64()?
            .into_iter()
            .map(|v| v.with_context(|| format!("null value in column {name}")))
            .collect()
    };
    Ok((column("re")?, column("im")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use orthosample::ortho_points;
    use tempfile::tempdir;

    #[test]
    fn csv_and_parquet_preserve_coordinates() {
        let dir = tempdir().unwrap();
        let points = ortho_points(4, 2).unwrap();
        for name in ["pts.csv", "nested/pts.parquet"] {
            let path = dir.path().join(name);
            write_points(&path, &points).unwrap();
            let (re, im) = read_points(&path).unwrap();
            assert_eq!(re.len(), points.len());
            for (a, b) in re.iter().zip(&points.re).chain(im.iter().zip(&points.im)) {
                assert!((a - b).abs() < 1e-12, "{name}: {a} vs {b}");
            }
        }
    }
}
