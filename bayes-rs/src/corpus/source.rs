//! Document sources backed by the filesystem

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::classifier::Document;
use crate::error::Result;

/// Produces the finite document sequence of one corpus.
///
/// I/O failures are returned to the caller untouched; sources never log and
/// never retry.
pub trait DocumentSource {
    fn documents(&mut self) -> Result<Vec<Document>>;
}

/// A zip archive of plain-text mails, one mail per entry.
///
/// Mail bodies are read lossily as UTF-8; real-world corpora mix encodings.
pub struct ZipMailSource {
    path: PathBuf,
}

impl ZipMailSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DocumentSource for ZipMailSource {
    fn documents(&mut self) -> Result<Vec<Document>> {
        let file = File::open(&self.path)?;
        let mut archive = ZipArchive::new(file)?;

        let mut documents = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            if !entry.is_file() {
                continue;
            }

            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes)?;
            documents.push(Document::from_text(&String::from_utf8_lossy(&bytes)));
        }

        Ok(documents)
    }
}

/// A single plain-text mail file, yielding one document
pub struct MailFileSource {
    path: PathBuf,
}

impl MailFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DocumentSource for MailFileSource {
    fn documents(&mut self) -> Result<Vec<Document>> {
        let bytes = std::fs::read(&self.path)?;
        Ok(vec![Document::from_text(&String::from_utf8_lossy(&bytes))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    #[test]
    fn test_zip_source_yields_one_document_per_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mails.zip");

        let mut writer = ZipWriter::new(File::create(&path).unwrap());
        writer
            .start_file("mail-1.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hello world\nsecond line").unwrap();
        writer
            .start_file("mail-2.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"viagra offer").unwrap();
        writer.finish().unwrap();

        let documents = ZipMailSource::new(&path).documents().unwrap();
        assert_eq!(documents.len(), 2);

        let words: Vec<&str> = documents[0].words().collect();
        assert_eq!(words, vec!["hello", "world", "second", "line"]);
        let words: Vec<&str> = documents[1].words().collect();
        assert_eq!(words, vec!["viagra", "offer"]);
    }

    #[test]
    fn test_missing_archive_surfaces_io_error() {
        let result = ZipMailSource::new("does/not/exist.zip").documents();
        assert!(matches!(result, Err(crate::error::BayesError::Io(_))));
    }

    #[test]
    fn test_mail_file_source_yields_single_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mail.txt");
        std::fs::write(&path, "Dear friend\nyou have won").unwrap();

        let documents = MailFileSource::new(&path).documents().unwrap();
        assert_eq!(documents.len(), 1);
        let words: Vec<&str> = documents[0].words().collect();
        assert_eq!(words, vec!["Dear", "friend", "you", "have", "won"]);
    }
}
