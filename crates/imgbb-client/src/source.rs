//! Input forms accepted by the upload operation.

use std::fmt;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use imgbb_core::validation::is_remote_url;

/// Reader that can also seek, so the operation can restore the caller's
/// read position after consuming the stream.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek> ReadSeek for T {}

pub(crate) enum StreamReader<'a> {
    Plain(Box<dyn Read + Send + 'a>),
    Seekable(Box<dyn ReadSeek + Send + 'a>),
}

/// An open readable stream, optionally named.
///
/// Named streams get the same extension check as file paths. Seekable
/// streams ([`ImageStream::seekable`]) have their read position restored
/// after the upload consumes them, so a borrowed handle stays usable.
pub struct ImageStream<'a> {
    pub(crate) reader: StreamReader<'a>,
    pub(crate) name: Option<String>,
}

impl<'a> ImageStream<'a> {
    pub fn new(reader: impl Read + Send + 'a) -> Self {
        ImageStream {
            reader: StreamReader::Plain(Box::new(reader)),
            name: None,
        }
    }

    pub fn seekable(reader: impl Read + Seek + Send + 'a) -> Self {
        ImageStream {
            reader: StreamReader::Seekable(Box::new(reader)),
            name: None,
        }
    }

    /// Attach a filename; its extension is validated like a path input.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl From<File> for ImageStream<'static> {
    fn from(file: File) -> Self {
        ImageStream::seekable(file)
    }
}

impl fmt::Debug for ImageStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.reader {
            StreamReader::Plain(_) => "plain",
            StreamReader::Seekable(_) => "seekable",
        };
        f.debug_struct("ImageStream")
            .field("reader", &kind)
            .field("name", &self.name)
            .finish()
    }
}

/// The image to upload: exactly one input form per call, consumed by the
/// call.
#[derive(Debug)]
pub enum UploadSource<'a> {
    /// Local file path, read fully into memory after validation.
    Path(PathBuf),
    /// Remote URL, forwarded to the service verbatim.
    Url(String),
    /// Raw image bytes. No extension check applies (there is no filename).
    Bytes(Vec<u8>),
    /// Open readable stream, fully consumed then encoded.
    Stream(ImageStream<'a>),
}

impl UploadSource<'_> {
    /// Treat a string as a URL when it parses as an absolute URL with a
    /// scheme and host, and as a file path otherwise.
    pub fn detect(input: &str) -> UploadSource<'static> {
        if is_remote_url(input) {
            UploadSource::Url(input.to_string())
        } else {
            UploadSource::Path(PathBuf::from(input))
        }
    }
}

impl From<PathBuf> for UploadSource<'static> {
    fn from(path: PathBuf) -> Self {
        UploadSource::Path(path)
    }
}

impl From<&Path> for UploadSource<'static> {
    fn from(path: &Path) -> Self {
        UploadSource::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for UploadSource<'static> {
    fn from(bytes: Vec<u8>) -> Self {
        UploadSource::Bytes(bytes)
    }
}

impl From<&[u8]> for UploadSource<'static> {
    fn from(bytes: &[u8]) -> Self {
        UploadSource::Bytes(bytes.to_vec())
    }
}

impl From<File> for UploadSource<'static> {
    fn from(file: File) -> Self {
        UploadSource::Stream(file.into())
    }
}

impl<'a> From<ImageStream<'a>> for UploadSource<'a> {
    fn from(stream: ImageStream<'a>) -> Self {
        UploadSource::Stream(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn detect_picks_url_for_absolute_urls() {
        match UploadSource::detect("https://example.com/cat.png") {
            UploadSource::Url(url) => assert_eq!(url, "https://example.com/cat.png"),
            other => panic!("expected Url, got {other:?}"),
        }
    }

    #[test]
    fn detect_picks_path_for_everything_else() {
        for input in ["cat.png", "/tmp/cat.png", "./cat.png", "C:/pics/cat.png"] {
            match UploadSource::detect(input) {
                UploadSource::Path(path) => assert_eq!(path, PathBuf::from(input)),
                other => panic!("expected Path for {input}, got {other:?}"),
            }
        }
    }

    #[test]
    fn stream_debug_does_not_expose_contents() {
        let stream = ImageStream::seekable(Cursor::new(vec![1, 2, 3])).with_name("a.png");
        let output = format!("{stream:?}");
        assert!(output.contains("seekable"));
        assert!(output.contains("a.png"));
    }
}
