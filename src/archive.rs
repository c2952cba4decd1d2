//! Archive packaging.
//!
//! Turns the batch's (name, bytes) pairs into a single zip blob, in
//! insertion order, Deflate-compressed. Entries carry a fixed timestamp so
//! identical inputs produce byte-identical archives.
//!
//! Name collisions are accepted silently — both entries land in the
//! archive and extractors keep the last one. The naming scheme makes
//! collisions possible only for backdrops whose sanitized stems coincide.

use crate::batch::RenderedFrame;
use std::io::{Cursor, Write};
use thiserror::Error;
use zip::CompressionMethod;
use zip::write::{FileOptions, ZipWriter};

/// Default archive file name.
pub const ARCHIVE_FILE_NAME: &str = "processed_images.zip";

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("archive write failed: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Package (name, bytes) pairs into an in-memory zip archive.
pub fn package<'a, I>(entries: I) -> Result<Vec<u8>, ArchiveError>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    for (name, bytes) in entries {
        writer.start_file(name, options)?;
        writer.write_all(bytes)?;
    }

    Ok(writer.finish()?.into_inner())
}

/// Package a batch's frames in render order.
pub fn package_frames(frames: &[RenderedFrame]) -> Result<Vec<u8>, ArchiveError> {
    package(
        frames
            .iter()
            .map(|f| (f.file_name.as_str(), f.bytes.as_slice())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn open(bytes: Vec<u8>) -> ZipArchive<Cursor<Vec<u8>>> {
        ZipArchive::new(Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn entries_keep_insertion_order() {
        let bytes = package([
            ("b_1280x480.png", b"bbb".as_slice()),
            ("a_240x135.png", b"aaa".as_slice()),
        ])
        .unwrap();

        let mut archive = open(bytes);
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "b_1280x480.png");
        assert_eq!(archive.by_index(1).unwrap().name(), "a_240x135.png");
    }

    #[test]
    fn entry_contents_round_trip() {
        let bytes = package([("frame.png", b"payload bytes".as_slice())]).unwrap();

        let mut archive = open(bytes);
        let mut entry = archive.by_name("frame.png").unwrap();
        let mut contents = Vec::new();
        entry.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"payload bytes");
    }

    #[test]
    fn duplicate_names_are_accepted() {
        let bytes = package([
            ("a_240x135.png", b"first".as_slice()),
            ("a_240x135.png", b"second".as_slice()),
        ])
        .unwrap();
        assert_eq!(open(bytes).len(), 2);
    }

    #[test]
    fn packaging_is_deterministic() {
        let entries = [("x.png", b"xxxx".as_slice()), ("y.webp", b"yy".as_slice())];
        let first = package(entries).unwrap();
        let second = package(entries).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_a_valid_empty_archive() {
        let entries: [(&str, &[u8]); 0] = [];
        let bytes = package(entries).unwrap();
        assert_eq!(open(bytes).len(), 0);
    }
}
