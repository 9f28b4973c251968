//! A small dcmdump-like tool: print every element of a DICOM file.
use dcmio_object::open_file;
use dcmio_parser::ReadOptions;
use std::io::{stdout, Write};

type DynResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> DynResult<()> {
    let filename = std::env::args()
        .nth(1)
        .expect("Missing path to DICOM file");

    let (data_set, error) = open_file(&filename, &ReadOptions::default());

    let mut to = stdout();
    writeln!(to, "# Dicom-File-Format")?;
    writeln!(to)?;
    for element in &data_set {
        writeln!(to, "{}", element)?;
    }

    if let Some(error) = error {
        eprintln!("{}: partial read: {}", filename, error);
        std::process::exit(1);
    }
    Ok(())
}
