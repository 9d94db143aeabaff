//! # Vocabulary IO

mod embedding_io;

pub use embedding_io::*;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::errors::NSResult;

/// Is the path a gzip resource, by extension?
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Open a text resource for line reading.
///
/// Paths ending in `.gz` are decompressed on the fly.
pub fn open_text_resource(path: impl AsRef<Path>) -> NSResult<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    if is_gzip_path(path) {
        cfg_if::cfg_if! {
            if #[cfg(feature = "gzip")] {
                return Ok(Box::new(BufReader::new(flate2::read::GzDecoder::new(file))));
            } else {
                return Err(crate::errors::NliStreamError::InvalidConfig(format!(
                    "{} is gzip compressed; enable the \"gzip\" feature",
                    path.display()
                )));
            }
        }
    }

    Ok(Box::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    #[test]
    fn test_open_plain_resource() {
        tempdir::TempDir::new("resource_test")
            .and_then(|dir| {
                let path = dir.path().join("plain.txt");
                std::fs::write(&path, "hello\nworld\n")?;

                let mut text = String::new();
                open_text_resource(&path)
                    .expect("failed to open")
                    .read_to_string(&mut text)?;
                assert_eq!(text, "hello\nworld\n");
                Ok(())
            })
            .unwrap();
    }

    #[cfg(feature = "gzip")]
    #[test]
    fn test_open_gzip_resource() {
        use std::io::Write;

        tempdir::TempDir::new("resource_test")
            .and_then(|dir| {
                let path = dir.path().join("text.txt.gz");
                let mut encoder = flate2::write::GzEncoder::new(
                    File::create(&path)?,
                    flate2::Compression::default(),
                );
                encoder.write_all(b"zipped\n")?;
                encoder.finish()?;

                assert!(is_gzip_path(&path));
                let lines: Vec<String> = open_text_resource(&path)
                    .expect("failed to open")
                    .lines()
                    .collect::<Result<_, _>>()?;
                assert_eq!(lines, vec!["zipped".to_string()]);
                Ok(())
            })
            .unwrap();
    }
}
