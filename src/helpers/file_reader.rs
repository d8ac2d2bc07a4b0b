use crate::error::CsvError;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

/// A unified reader over the byte sources a CSV file can be loaded from
pub(crate) enum UnifiedReader<'a> {
    /// Local file reader
    Local(BufReader<File>),
    /// Caller-supplied stream
    Stream(&'a mut dyn Read),
}

impl<'a> UnifiedReader<'a> {
    /// Opens a local file for reading
    pub(crate) fn open(path: &Path) -> Result<UnifiedReader<'a>, CsvError> {
        let file = File::open(path)?;
        Ok(UnifiedReader::Local(BufReader::new(file)))
    }

    /// Wraps an arbitrary reader
    pub(crate) fn stream(reader: &'a mut dyn Read) -> UnifiedReader<'a> {
        UnifiedReader::Stream(reader)
    }

    /// Reads the whole source into memory.
    /// The underlying file handle is released when the reader is dropped, on success and on error.
    pub(crate) fn read_bytes(mut self) -> Result<Vec<u8>, CsvError> {
        let mut bytes = Vec::new();
        self.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}

impl Read for UnifiedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            UnifiedReader::Local(reader) => reader.read(buf),
            UnifiedReader::Stream(reader) => reader.read(buf),
        }
    }
}

/// Writes bytes to a local file, creating or truncating it
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CsvError> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}
