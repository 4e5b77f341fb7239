// crates/kyuji-core/src/stream.rs
//
// Character-at-a-time transformation over byte streams.
//
// Rules:
// - Valid UTF-8 is decoded one character at a time, including characters
//   whose bytes straddle two underlying reads.
// - Bytes that do not form valid UTF-8 (stray continuation bytes, truncated
//   sequences, overlongs, surrogates) are passed through unchanged, one byte
//   at a time.
// - No state carries from one character to the next.

use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{KyujiError, Result};
use crate::normalizer::Normalizer;

/// Size of the copy buffer and of the read buffer wrapped around sources.
pub const COPY_BUF: usize = 8 * 1024;

/// One unit pulled from a byte stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    Char(char),
    Invalid(u8),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Characters decoded.
    pub chars: u64,
    /// Characters written in a different form than read.
    pub replaced: u64,
    /// Bytes passed through because they were not valid UTF-8.
    pub invalid_bytes: u64,
}

/// Incremental UTF-8 decoder over a `BufRead`.
///
/// Yields until the source is exhausted; a read error is yielded once and the
/// caller decides whether to keep pulling.
pub struct CharDecoder<R> {
    inner: R,
    carry: [u8; 4],
    carry_len: usize,
    eof: bool,
}

impl<R: BufRead> CharDecoder<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            carry: [0u8; 4],
            carry_len: 0,
            eof: false,
        }
    }

    fn take_ready(&mut self) -> Option<Decoded> {
        if self.carry_len == 0 {
            return None;
        }

        let width = utf8_width(self.carry[0]);
        if width == 0 {
            return Some(self.shift_invalid());
        }
        if self.carry[1..self.carry_len].iter().any(|&b| !is_continuation(b)) {
            return Some(self.shift_invalid());
        }
        if self.carry_len < width {
            return None;
        }

        let decoded = std::str::from_utf8(&self.carry[..width])
            .ok()
            .and_then(|s| s.chars().next());
        match decoded {
            Some(c) => {
                self.shift(width);
                Some(Decoded::Char(c))
            }
            None => Some(self.shift_invalid()),
        }
    }

    fn shift_invalid(&mut self) -> Decoded {
        let b = self.carry[0];
        self.shift(1);
        Decoded::Invalid(b)
    }

    fn shift(&mut self, n: usize) {
        self.carry.copy_within(n..self.carry_len, 0);
        self.carry_len -= n;
    }
}

impl<R: BufRead> Iterator for CharDecoder<R> {
    type Item = io::Result<Decoded>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(d) = self.take_ready() {
                return Some(Ok(d));
            }

            if self.eof {
                // Leftover bytes are an unfinished sequence.
                if self.carry_len > 0 {
                    return Some(Ok(self.shift_invalid()));
                }
                return None;
            }

            let next = match self.inner.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            };

            match next {
                None => self.eof = true,
                Some(b) if self.carry_len == 0 && b < 0x80 => {
                    self.inner.consume(1);
                    return Some(Ok(Decoded::Char(b as char)));
                }
                Some(b) => {
                    self.inner.consume(1);
                    self.carry[self.carry_len] = b;
                    self.carry_len += 1;
                }
            }
        }
    }
}

fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// `io::Read` adapter that yields the normalized form of its source.
///
/// Output is staged in a small pending buffer, so callers may read with any
/// buffer size regardless of character widths.
pub struct NormalizingReader<'n, 'd, R> {
    norm: &'n Normalizer<'d>,
    decoder: CharDecoder<R>,
    pending: Vec<u8>,
    pos: usize,
    deferred: Option<io::Error>,
    stats: StreamStats,
}

impl<'n, 'd, R: BufRead> NormalizingReader<'n, 'd, R> {
    pub fn new(norm: &'n Normalizer<'d>, source: R) -> Self {
        Self {
            norm,
            decoder: CharDecoder::new(source),
            pending: Vec::with_capacity(64),
            pos: 0,
            deferred: None,
            stats: StreamStats::default(),
        }
    }

    pub fn stats(&self) -> StreamStats {
        self.stats
    }

    fn push(&mut self, d: Decoded) {
        match d {
            Decoded::Char(c) => {
                let out = self.norm.normalize_char(c);
                self.stats.chars += 1;
                if out != c {
                    self.stats.replaced += 1;
                }
                let mut tmp = [0u8; 4];
                self.pending
                    .extend_from_slice(out.encode_utf8(&mut tmp).as_bytes());
            }
            Decoded::Invalid(b) => {
                self.stats.invalid_bytes += 1;
                self.pending.push(b);
            }
        }
    }

    /// Pull decoded units until `want` bytes are staged or the source stops.
    fn refill(&mut self, want: usize) -> io::Result<()> {
        self.pending.clear();
        self.pos = 0;

        if let Some(e) = self.deferred.take() {
            return Err(e);
        }

        while self.pending.len() < want {
            match self.decoder.next() {
                None => break,
                Some(Ok(d)) => self.push(d),
                Some(Err(e)) => {
                    if self.pending.is_empty() {
                        return Err(e);
                    }
                    // Hand out what was already decoded first.
                    self.deferred = Some(e);
                    break;
                }
            }
        }
        Ok(())
    }
}

impl<R: BufRead> Read for NormalizingReader<'_, '_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.pos == self.pending.len() {
            self.refill(buf.len())?;
        }

        let avail = &self.pending[self.pos..];
        let n = avail.len().min(buf.len());
        buf[..n].copy_from_slice(&avail[..n]);
        self.pos += n;
        Ok(n)
    }
}

/// Copy `reader` into `sink` through a fixed buffer, then flush the sink.
/// Whatever reached the sink before a failure stays there.
pub fn copy<R, W>(mut reader: NormalizingReader<'_, '_, R>, mut sink: W) -> Result<StreamStats>
where
    R: BufRead,
    W: Write,
{
    let mut buf = [0u8; COPY_BUF];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(KyujiError::Read(e)),
        };
        sink.write_all(&buf[..n]).map_err(KyujiError::Write)?;
    }
    sink.flush().map_err(KyujiError::Write)?;
    Ok(reader.stats())
}

/// Normalize the file at `input` into `output` (created or truncated).
pub fn copy_file(norm: &Normalizer<'_>, input: &Path, output: &Path) -> Result<StreamStats> {
    check_endpoints(input, output)?;

    let src = File::open(input)?;
    let dst = File::create(output)?;
    norm.normalize_stream(src, BufWriter::new(dst))
}

fn check_endpoints(input: &Path, output: &Path) -> Result<()> {
    let meta = fs::metadata(input)
        .map_err(|e| KyujiError::InvalidEndpoint(format!("input {}: {e}", input.display())))?;
    if !meta.is_file() {
        return Err(KyujiError::InvalidEndpoint(format!(
            "input {} is not a regular file",
            input.display()
        )));
    }

    // Opening the output truncates it, so it must not be the input.
    if let (Ok(a), Ok(b)) = (fs::canonicalize(input), fs::canonicalize(output)) {
        if a == b {
            return Err(KyujiError::InvalidEndpoint(format!(
                "output {} is the input file",
                output.display()
            )));
        }
    }
    Ok(())
}
