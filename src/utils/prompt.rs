// Interactive session over an async line reader and writer

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

use crate::utils::error::Result;

/// One interactive session: opened at start, consumed by [`InteractiveSession::close`]
/// on every terminal branch of a run.
///
/// Every line written is flushed immediately so the operator sees progress even
/// while a filesystem call is pending.
#[derive(Debug)]
pub struct InteractiveSession<R, W> {
    reader: R,
    writer: W,
}

impl InteractiveSession<BufReader<Stdin>, Stdout> {
    /// Session bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> InteractiveSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `question` and read one line of input.
    ///
    /// The trailing line terminator is kept; end of input yields an empty string.
    pub async fn ask(&mut self, question: &str) -> Result<String> {
        self.writer.write_all(question.as_bytes()).await?;
        self.writer.flush().await?;
        self.read_answer().await
    }

    /// Like [`ask`](Self::ask), but the question goes to stderr so stdout stays
    /// reserved for machine-readable output.
    pub async fn ask_on_stderr(&mut self, question: &str) -> Result<String> {
        let mut stderr = tokio::io::stderr();
        stderr.write_all(question.as_bytes()).await?;
        stderr.flush().await?;
        self.read_answer().await
    }

    /// Bytes that are not valid UTF-8 are replaced, so they reach validation
    /// instead of failing the read.
    async fn read_answer(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        let read = self.reader.read_until(b'\n', &mut bytes).await?;
        if read == 0 {
            tracing::debug!("input closed before a line was entered");
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Write one line of narrative output
    pub async fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        self.writer.write_all(line.as_ref().as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Release the session, handing back the writer
    pub async fn close(mut self) -> Result<W> {
        self.writer.flush().await?;
        tracing::debug!("interactive session closed");
        Ok(self.writer)
    }
}
