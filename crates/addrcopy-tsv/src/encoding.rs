//! Byte-order-mark detection for input files.
//!
//! A file opened for reading is sniffed once, at its start:
//!
//! | leading bytes | treated as |
//! |---|---|
//! | `EF BB BF` | UTF-8, mark dropped |
//! | `FF FE` | UTF-16 little-endian, transcoded to UTF-8 |
//! | `FE FF` | UTF-16 big-endian, transcoded to UTF-8 |
//! | anything else | UTF-8 |
//!
//! Everything downstream of [`decoding_reader`] therefore sees UTF-8 bytes
//! without a mark.

use std::char::REPLACEMENT_CHARACTER;
use std::io::{self, BufRead, BufReader, Cursor, Read};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

const CHUNK_SIZE: usize = 4096;

/// Text encoding selected by the byte-order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8, with or without a mark.
    Utf8,
    /// UTF-16, little-endian.
    Utf16Le,
    /// UTF-16, big-endian.
    Utf16Be,
}

impl Encoding {
    /// Identifies the encoding from the first bytes of a stream and returns
    /// it together with the length of the mark.
    #[must_use]
    pub fn sniff(prefix: &[u8]) -> (Self, usize) {
        if prefix.starts_with(UTF8_BOM) {
            (Self::Utf8, UTF8_BOM.len())
        } else if prefix.starts_with(UTF16_LE_BOM) {
            (Self::Utf16Le, UTF16_LE_BOM.len())
        } else if prefix.starts_with(UTF16_BE_BOM) {
            (Self::Utf16Be, UTF16_BE_BOM.len())
        } else {
            (Self::Utf8, 0)
        }
    }
}

/// Longest mark recognized by [`Encoding::sniff`].
const MAX_MARK_LEN: usize = 3;

/// Reads the first bytes of `reader`, consumes a byte-order mark if one is
/// there, and returns the encoding it announced together with the bytes read
/// past the mark.
///
/// Reads until three bytes are in hand or the input ends, so the
/// result does not depend on how the reader is buffered.
///
/// # Errors
///
/// Returns any error raised while reading the prefix.
pub fn detect<R: Read>(reader: &mut R) -> io::Result<(Encoding, Vec<u8>)> {
    let mut prefix = [0u8; MAX_MARK_LEN];
    let mut filled = 0;
    while filled < MAX_MARK_LEN {
        match reader.read(&mut prefix[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    let (encoding, mark_len) = Encoding::sniff(&prefix[..filled]);
    Ok((encoding, prefix[mark_len..filled].to_vec()))
}

/// Wraps `inner` so that it yields UTF-8 without a byte-order mark, buffered
/// with `capacity` bytes.
///
/// # Errors
///
/// Returns any error raised while sniffing the mark.
pub fn decoding_reader<R>(mut inner: R, capacity: usize) -> io::Result<Box<dyn BufRead + Send>>
where
    R: Read + Send + 'static,
{
    let (encoding, leftover) = detect(&mut inner)?;
    tracing::trace!(?encoding, "detected input encoding");

    let source = Cursor::new(leftover).chain(inner);
    let capacity = capacity.max(1);
    Ok(match encoding {
        Encoding::Utf8 => Box::new(BufReader::with_capacity(capacity, source)),
        Encoding::Utf16Le | Encoding::Utf16Be => Box::new(BufReader::with_capacity(
            capacity,
            Utf16Reader::new(source, encoding == Encoding::Utf16Be),
        )),
    })
}

/// Transcodes a UTF-16 byte stream into UTF-8.
///
/// Unpaired surrogates and a dangling odd byte at end of input come out as
/// U+FFFD.
#[derive(Debug)]
pub struct Utf16Reader<R> {
    inner: R,
    big_endian: bool,
    /// Raw input not yet decoded: an odd byte or a held-back high surrogate.
    pending: Vec<u8>,
    decoded: Vec<u8>,
    pos: usize,
    eof: bool,
}

impl<R: Read> Utf16Reader<R> {
    /// Creates a transcoder over input that has already had its mark removed.
    #[must_use]
    pub fn new(inner: R, big_endian: bool) -> Self {
        Self {
            inner,
            big_endian,
            pending: Vec::new(),
            decoded: Vec::new(),
            pos: 0,
            eof: false,
        }
    }

    fn refill(&mut self) -> io::Result<()> {
        self.decoded.clear();
        self.pos = 0;

        let mut chunk = [0u8; CHUNK_SIZE];
        let n = loop {
            match self.inner.read(&mut chunk) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        };

        if n == 0 {
            self.eof = true;
            if !self.pending.is_empty() {
                self.pending.clear();
                self.push_char(REPLACEMENT_CHARACTER);
            }
            return Ok(());
        }

        self.pending.extend_from_slice(&chunk[..n]);
        let units: Vec<u16> = self
            .pending
            .chunks_exact(2)
            .map(|pair| {
                let bytes = [pair[0], pair[1]];
                if self.big_endian {
                    u16::from_be_bytes(bytes)
                } else {
                    u16::from_le_bytes(bytes)
                }
            })
            .collect();

        // A trailing high surrogate may be completed by the next chunk.
        let mut usable = units.len();
        if units
            .last()
            .is_some_and(|unit| (0xD800..0xDC00).contains(unit))
        {
            usable -= 1;
        }

        for decoded in char::decode_utf16(units[..usable].iter().copied()) {
            self.push_char(decoded.unwrap_or(REPLACEMENT_CHARACTER));
        }
        self.pending = self.pending.split_off(usable * 2);
        Ok(())
    }

    fn push_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.decoded
            .extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }
}

impl<R: Read> Read for Utf16Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.pos == self.decoded.len() {
            if self.eof {
                return Ok(0);
            }
            self.refill()?;
        }

        let available = &self.decoded[self.pos..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.pos += n;
        Ok(n)
    }
}
