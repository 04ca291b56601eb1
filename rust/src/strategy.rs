//! Serialization strategies under comparison
//!
//! A strategy is a pair of capabilities, `save` and `load`, for one binary
//! encoding. Strategies are plain values handed to
//! [`Comparison`](crate::driver::Comparison), so the pair under test is
//! chosen where the comparison is built rather than at each call site.

use bincode::Options;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{BenchError, Result};

pub trait Strategy {
    /// Label used in reports and log fields
    fn name(&self) -> &str;

    /// Encode `value` into a fresh buffer
    fn save<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>>;

    /// Reconstruct a value from bytes produced by [`Strategy::save`]
    fn load<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T>;
}

/// bincode 1.x legacy layout: fixed-width little-endian integers and
/// u64 length prefixes. The baseline every candidate is measured against.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeStrategy;

impl Strategy for BincodeStrategy {
    fn name(&self) -> &str {
        "Bincode"
    }

    #[inline]
    fn save<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        bincode::serialize(value).map_err(|e| BenchError::encode(self.name(), e))
    }

    #[inline]
    fn load<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        bincode::deserialize(bytes).map_err(|e| BenchError::decode(self.name(), e))
    }
}

/// bincode varint layout: integers below 251 and every short length prefix
/// cost one byte, signed integers are zigzag encoded, floats stay fixed
/// width. Trailing input is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactStrategy;

impl CompactStrategy {
    #[inline]
    fn options() -> impl Options {
        bincode::DefaultOptions::new()
            .with_varint_encoding()
            .with_little_endian()
            .reject_trailing_bytes()
    }
}

impl Strategy for CompactStrategy {
    fn name(&self) -> &str {
        "Compact"
    }

    #[inline]
    fn save<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        Self::options()
            .serialize(value)
            .map_err(|e| BenchError::encode(self.name(), e))
    }

    #[inline]
    fn load<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        Self::options()
            .deserialize(bytes)
            .map_err(|e| BenchError::decode(self.name(), e))
    }
}

#[cfg(feature = "compression")]
/// zstd-compresses the output of another strategy.
///
/// ```ignore
/// use archive_bench::strategy::{BincodeStrategy, Compressed};
///
/// let strategy = Compressed::new(BincodeStrategy, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Compressed<S> {
    inner: S,
    level: i32,
    name: String,
}

#[cfg(feature = "compression")]
impl<S: Strategy> Compressed<S> {
    pub fn new(inner: S, level: i32) -> Self {
        let name = format!("{}+zstd{}", inner.name(), level);
        Self { inner, level, name }
    }
}

#[cfg(feature = "compression")]
impl<S: Strategy> Strategy for Compressed<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn save<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let raw = self.inner.save(value)?;
        zstd::encode_all(&raw[..], self.level).map_err(|e| BenchError::encode(&self.name, e))
    }

    fn load<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        let raw = zstd::decode_all(bytes).map_err(|e| BenchError::decode(&self.name, e))?;
        self.inner.load(&raw)
    }
}

#[cfg(feature = "checksum")]
/// Prefixes another strategy's output with its CRC32.
///
/// Format: [4 bytes CRC32 LE][inner payload]
#[derive(Debug, Clone)]
pub struct Checksummed<S> {
    inner: S,
    name: String,
}

#[cfg(feature = "checksum")]
impl<S: Strategy> Checksummed<S> {
    pub fn new(inner: S) -> Self {
        let name = format!("{}+crc32", inner.name());
        Self { inner, name }
    }
}

#[cfg(feature = "checksum")]
impl<S: Strategy> Strategy for Checksummed<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn save<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let payload = self.inner.save(value)?;
        let checksum = crc32fast::hash(&payload);

        let mut out = Vec::with_capacity(4 + payload.len());
        out.extend_from_slice(&checksum.to_le_bytes());
        out.extend_from_slice(&payload);
        Ok(out)
    }

    fn load<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        if bytes.len() < 4 {
            return Err(BenchError::decode(&self.name, "data too short for checksum"));
        }

        let expected = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let payload = &bytes[4..];
        let actual = crc32fast::hash(payload);
        if expected != actual {
            return Err(BenchError::decode(
                &self.name,
                format!("checksum mismatch: expected {expected:08x}, got {actual:08x}"),
            ));
        }

        self.inner.load(payload)
    }
}
