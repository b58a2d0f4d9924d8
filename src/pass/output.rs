//! Password output.

use std::io::{self, Write};

use zeroize::Zeroize;

use super::error::GenError;
use super::generator::Generator;

const CAPACITY: usize = 8 * 1024;

/// Buffered writer that zeroes its buffer on every flush and on drop.
///
/// The buffer never grows past its initial allocation, so no stale copy of
/// written data is left behind by a reallocation.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let written = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        written
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub generated: usize,
    pub failed: usize,
}

/// Generate `count` passwords, one per line, into `out`.
///
/// A failed generation is handed to `on_error` with its 1-based position and
/// the batch carries on. Only write errors stop the batch.
pub fn write_batch<W, F>(
    generator: &Generator,
    count: i64,
    out: &mut W,
    mut on_error: F,
) -> io::Result<Summary>
where
    W: Write,
    F: FnMut(usize, &GenError),
{
    let mut summary = Summary::default();

    for n in 1..=count.max(0) {
        match generator.generate() {
            Ok(mut pass) => {
                pass.push('\n');
                let written = out.write_all(pass.as_bytes());
                pass.zeroize();
                written?;
                summary.generated += 1;
            }
            Err(e) => {
                summary.failed += 1;
                on_error(n as usize, &e);
            }
        }
    }

    out.flush()?;
    Ok(summary)
}
