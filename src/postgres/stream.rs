use super::*;
use crate::CHUNK_SIZE;
use crate::Error;
use bytes::Bytes;
use bytes::BytesMut;
use futures::SinkExt;
use std::path::Path;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tokio_postgres::CopyInSink;
use tokio_postgres::Transaction;

/// Scoped read handle on the CSV file.
///
/// The handle is owned, so it is released when the `Source` is dropped:
/// after [`Source::stream`] returns, or on any earlier error path.
pub struct Source {
    path: PathBuf,
    file: tokio::fs::File,
}

impl Source {
    /// Opens the file for reading.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        log::info!("opening source file ({})", path.display());
        let file = tokio::fs::File::open(&path)
            .await
            .map_err(Error::file(&path))?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Streams the file's raw bytes to the server through `COPY FROM STDIN`.
    ///
    /// The bytes are not parsed or re-encoded here; the session's
    /// `client_encoding` is UTF8, so the file must be too. Returns the number
    /// of rows the server reports as copied. Nothing is visible to other
    /// sessions until the enclosing transaction commits.
    pub async fn stream<S: Schema>(mut self, tx: &Transaction<'_>) -> Result<u64, Error> {
        let ref copy = S::copy();
        log::debug!("{}", copy);
        let sink: CopyInSink<Bytes> = tx.copy_in(copy.as_str()).await.map_err(Error::Load)?;
        futures::pin_mut!(sink);
        let mut sent = 0usize;
        loop {
            let mut chunk = BytesMut::with_capacity(CHUNK_SIZE);
            let n = self
                .file
                .read_buf(&mut chunk)
                .await
                .map_err(|source| Error::File {
                    path: self.path.clone(),
                    source,
                })?;
            if n == 0 {
                break;
            }
            sent += n;
            sink.send(chunk.freeze()).await.map_err(Error::Load)?;
        }
        let rows = sink.as_mut().finish().await.map_err(Error::Load)?;
        log::debug!("streamed {} bytes from {}", sent, self.path.display());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    #[tokio::test]
    async fn missing_file_is_a_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = Source::open(&path).await.err().unwrap();
        assert!(err.kind() == Kind::File);
        assert!(err.to_string().contains("absent.csv"));
    }

    #[tokio::test]
    async fn directory_is_not_a_source() {
        let dir = tempfile::tempdir().unwrap();
        // opening a directory may succeed on some platforms, but reading it never does
        match Source::open(dir.path()).await {
            Err(err) => assert!(err.kind() == Kind::File),
            Ok(mut source) => {
                let ref mut buf = Vec::new();
                assert!(source.file.read_to_end(buf).await.is_err());
            }
        }
    }

    #[tokio::test]
    async fn existing_file_opens() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let source = Source::open(file.path()).await.unwrap();
        assert!(source.path() == file.path());
    }
}
