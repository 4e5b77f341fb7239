// crates/kyuji-core/src/artifact.rs

use crate::error::{KyujiError, Result};
use crate::record::{CharRecord, Readings};

const MAGIC: &[u8; 4] = b"KJD1";

pub const VERSION: u16 = 1;
pub const DEFAULT_LEVEL: i32 = 19;

const FLAG_ZSTD: u16 = 0x0001;
const HEADER_LEN: usize = 4 + 2 + 2 + 4 + 4;
const TRAILER_LEN: usize = 4 + 16;

/// Header fields of an artifact, read without building a dictionary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactInfo {
    pub version: u16,
    pub compressed: bool,
    pub raw_len: u32,
    pub body_len: u32,
    pub total_len: usize,
    pub records: usize,
    pub with_obsolete: usize,
    pub id: [u8; 16],
}

impl ArtifactInfo {
    pub fn id_hex(&self) -> String {
        hex16(&self.id)
    }
}

struct Frame<'a> {
    version: u16,
    flags: u16,
    raw_len: u32,
    body: &'a [u8],
    id: [u8; 16],
}

/// Dictionary artifact (little-endian):
/// MAGIC[4]           "KJD1"
/// version:u16
/// flags:u16          (bit0: body is zstd-compressed)
/// raw_len:u32        (payload length before compression)
/// body_len:u32
/// body[body_len]
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over the uncompressed payload; the dictionary id)
///
/// Payload:
/// count:u32
/// repeated { modern:u32 obsolete:u32 (0 = none) on kun example }
/// where each reading list is n:u16 then repeated { len:u16 utf8[len] }.
///
/// Records must be canonical (no alias entries) and are written in
/// ascending code point order.
pub fn encode<'a, I>(records: I, compress: bool, level: i32) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a CharRecord>,
{
    let payload = encode_payload(records)?;
    let raw_len = u32::try_from(payload.len())
        .map_err(|_| KyujiError::Artifact("payload exceeds u32 length".into()))?;
    let id = blake3_16(&payload);

    let (flags, body) = if compress {
        let body = zstd::encode_all(payload.as_slice(), level)
            .map_err(|e| KyujiError::Artifact(format!("zstd compress: {e}")))?;
        (FLAG_ZSTD, body)
    } else {
        (0u16, payload)
    };
    let body_len = u32::try_from(body.len())
        .map_err(|_| KyujiError::Artifact("body exceeds u32 length".into()))?;

    let mut b = Vec::with_capacity(HEADER_LEN + body.len() + TRAILER_LEN);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&VERSION.to_le_bytes());
    b.extend_from_slice(&flags.to_le_bytes());
    b.extend_from_slice(&raw_len.to_le_bytes());
    b.extend_from_slice(&body_len.to_le_bytes());
    b.extend_from_slice(&body);

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());
    b.extend_from_slice(&id);

    Ok(b)
}

/// Verify and decode an artifact into canonical records.
pub fn decode(bytes: &[u8]) -> Result<Vec<CharRecord>> {
    let frame = read_frame(bytes)?;
    let payload = open_payload(&frame)?;
    decode_payload(&payload)
}

pub fn inspect(bytes: &[u8]) -> Result<ArtifactInfo> {
    let frame = read_frame(bytes)?;
    let payload = open_payload(&frame)?;
    let records = decode_payload(&payload)?;

    Ok(ArtifactInfo {
        version: frame.version,
        compressed: frame.flags & FLAG_ZSTD != 0,
        raw_len: frame.raw_len,
        body_len: frame.body.len() as u32,
        total_len: bytes.len(),
        records: records.len(),
        with_obsolete: records.iter().filter(|r| r.obsolete.is_some()).count(),
        id: frame.id,
    })
}

/// The dictionary id carried in the trailer. The frame crc is verified,
/// the payload is not decompressed.
pub fn dictionary_id_hex(bytes: &[u8]) -> Result<String> {
    let frame = read_frame(bytes)?;
    Ok(hex16(&frame.id))
}

/// Cheap sniff: does `bytes` start with the artifact magic?
pub fn is_artifact(bytes: &[u8]) -> bool {
    bytes.starts_with(MAGIC)
}

pub fn hex16(id: &[u8; 16]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(32);
    for &b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}

fn read_frame(bytes: &[u8]) -> Result<Frame<'_>> {
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(KyujiError::Artifact("bad magic".into()));
    }
    let mut i = 4usize;

    let version = read_u16(bytes, &mut i)?;
    if version != VERSION {
        return Err(KyujiError::Artifact(format!(
            "unsupported version {version} (expected {VERSION})"
        )));
    }
    let flags = read_u16(bytes, &mut i)?;
    if flags & !FLAG_ZSTD != 0 {
        return Err(KyujiError::Artifact(format!("unknown flags 0x{flags:04x}")));
    }
    let raw_len = read_u32(bytes, &mut i)?;
    let body_len = read_u32(bytes, &mut i)? as usize;

    need(bytes, i, body_len)?;
    let body = &bytes[i..i + body_len];
    i += body_len;

    let crc_expected = read_u32(bytes, &mut i)?;
    let crc_actual = crc32(&bytes[0..(i - 4)]);
    if crc_expected != crc_actual {
        return Err(KyujiError::Artifact("crc32 mismatch".into()));
    }

    need(bytes, i, 16)?;
    let mut id = [0u8; 16];
    id.copy_from_slice(&bytes[i..i + 16]);
    i += 16;

    if i != bytes.len() {
        return Err(KyujiError::Artifact(format!(
            "{} trailing bytes after frame",
            bytes.len() - i
        )));
    }

    Ok(Frame {
        version,
        flags,
        raw_len,
        body,
        id,
    })
}

fn open_payload(frame: &Frame<'_>) -> Result<Vec<u8>> {
    let payload = if frame.flags & FLAG_ZSTD != 0 {
        zstd::bulk::decompress(frame.body, frame.raw_len as usize)
            .map_err(|e| KyujiError::Artifact(format!("zstd decompress: {e}")))?
    } else {
        frame.body.to_vec()
    };

    if payload.len() != frame.raw_len as usize {
        return Err(KyujiError::Artifact(format!(
            "payload length {} != raw_len {}",
            payload.len(),
            frame.raw_len
        )));
    }
    if blake3_16(&payload) != frame.id {
        return Err(KyujiError::Artifact("blake3 mismatch".into()));
    }
    Ok(payload)
}

fn encode_payload<'a, I>(records: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a CharRecord>,
{
    let mut canon: Vec<&CharRecord> = records.into_iter().filter(|r| !r.is_alias).collect();
    canon.sort_by_key(|r| r.modern);
    for w in canon.windows(2) {
        if w[0].modern == w[1].modern {
            return Err(KyujiError::Artifact(format!(
                "duplicate record for U+{:04X}",
                w[0].modern as u32
            )));
        }
    }

    let count = u32::try_from(canon.len())
        .map_err(|_| KyujiError::Artifact("too many records".into()))?;

    let mut b = Vec::with_capacity(canon.len() * 48);
    b.extend_from_slice(&count.to_le_bytes());
    for r in canon {
        b.extend_from_slice(&(r.modern as u32).to_le_bytes());
        let obsolete = r.obsolete.map(|c| c as u32).unwrap_or(0);
        b.extend_from_slice(&obsolete.to_le_bytes());
        write_list(&mut b, &r.readings.on)?;
        write_list(&mut b, &r.readings.kun)?;
        write_list(&mut b, &r.readings.example)?;
    }
    Ok(b)
}

fn decode_payload(bytes: &[u8]) -> Result<Vec<CharRecord>> {
    let mut i = 0usize;
    let count = read_u32(bytes, &mut i)? as usize;

    // Each record takes at least 14 bytes; don't trust count for allocation.
    let mut out = Vec::with_capacity(count.min(bytes.len() / 14));
    let mut prev: Option<char> = None;
    for _ in 0..count {
        let modern = read_char(bytes, &mut i)?;
        if prev.is_some_and(|p| p >= modern) {
            return Err(KyujiError::Artifact(format!(
                "records out of order at U+{:04X}",
                modern as u32
            )));
        }
        prev = Some(modern);

        let obsolete = match read_u32(bytes, &mut i)? {
            0 => None,
            v => Some(to_char(v)?),
        };
        let readings = Readings {
            on: read_list(bytes, &mut i)?,
            kun: read_list(bytes, &mut i)?,
            example: read_list(bytes, &mut i)?,
        };
        out.push(CharRecord::new(modern, obsolete, readings));
    }

    if i != bytes.len() {
        return Err(KyujiError::Artifact("trailing bytes in payload".into()));
    }
    Ok(out)
}

fn write_list(b: &mut Vec<u8>, items: &[String]) -> Result<()> {
    let n = u16::try_from(items.len())
        .map_err(|_| KyujiError::Artifact("reading list exceeds u16 entries".into()))?;
    b.extend_from_slice(&n.to_le_bytes());
    for s in items {
        let len = u16::try_from(s.len())
            .map_err(|_| KyujiError::Artifact("reading exceeds u16 bytes".into()))?;
        b.extend_from_slice(&len.to_le_bytes());
        b.extend_from_slice(s.as_bytes());
    }
    Ok(())
}

fn read_list(bytes: &[u8], i: &mut usize) -> Result<Vec<String>> {
    let n = read_u16(bytes, i)? as usize;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let len = read_u16(bytes, i)? as usize;
        need(bytes, *i, len)?;
        let s = std::str::from_utf8(&bytes[*i..*i + len])
            .map_err(|e| KyujiError::Artifact(format!("reading is not utf-8: {e}")))?;
        out.push(s.to_owned());
        *i += len;
    }
    Ok(out)
}

fn read_char(bytes: &[u8], i: &mut usize) -> Result<char> {
    let v = read_u32(bytes, i)?;
    to_char(v)
}

fn to_char(v: u32) -> Result<char> {
    match char::from_u32(v) {
        Some(c) if c != '\0' => Ok(c),
        _ => Err(KyujiError::Artifact(format!("invalid code point 0x{v:x}"))),
    }
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    match i.checked_add(n) {
        Some(end) if end <= bytes.len() => Ok(()),
        _ => Err(KyujiError::Artifact("unexpected eof".into())),
    }
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    need(bytes, *i, 2)?;
    let mut a = [0u8; 2];
    a.copy_from_slice(&bytes[*i..*i + 2]);
    *i += 2;
    Ok(u16::from_le_bytes(a))
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    need(bytes, *i, 4)?;
    let mut a = [0u8; 4];
    a.copy_from_slice(&bytes[*i..*i + 4]);
    *i += 4;
    Ok(u32::from_le_bytes(a))
}
