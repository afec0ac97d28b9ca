//! Spatial content signatures.
//!
//! A domain's geometry (spacing, bbox, optional shape) is fingerprinted by
//! quantizing every float to a fixed decimal precision, packing the
//! resulting integers as big-endian 64-bit words, and hashing the bytes
//! with BLAKE2b. Quantization makes the digest independent of
//! floating-point representation drift; the explicit big-endian packing
//! makes it independent of host byte order.

use super::bbox::BBox;
use super::domain::GridDefinition;
use super::Axis;
use crate::error::{Result, SidecarError};
use blake2::digest::consts::U16;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};

/// Decimal digits preserved by quantization.
pub const HASH_DIGITS: u32 = 9;

/// BLAKE2b digest size in bytes.
pub const HASH_DIGEST_SIZE: usize = 16;

/// Versioned method identifier for the signature algorithm.
///
/// Any change to quantization precision, digest size, byte order, or field
/// order must change this string, so signatures from different algorithm
/// versions never compare equal.
pub const HASH_METHOD: &str = "LPS_bbox_spacing_shape:intQ9:BE";

// 10^HASH_DIGITS
const QUANT_SCALE: f64 = 1e9;

type Blake2b128 = Blake2b<U16>;

/// A cryptographic digest plus the versioned method label identifying
/// exactly how the digest input bytes were constructed.
///
/// Opaque once produced; comparison is exact equality, never fuzzy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSignature {
    method: String,
    blake2b: String,
}

impl ContentSignature {
    /// Create a signature from a method label and a tagged digest string.
    pub fn new(method: impl Into<String>, blake2b: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            blake2b: blake2b.into(),
        }
    }

    /// The method label, e.g. `"LPS_bbox_spacing_shape:intQ9:BE"`.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The tagged digest string, e.g. `"b2:<hex>"`.
    pub fn blake2b(&self) -> &str {
        &self.blake2b
    }
}

/// Quantize a float to an integer count of 10^-9 units.
fn quantize(x: f64) -> Result<i64> {
    if !x.is_finite() {
        return Err(SidecarError::NonFiniteValue { value: x });
    }
    Ok((x * QUANT_SCALE).round() as i64)
}

/// Pack 64-bit words as big-endian bytes, no padding or separators.
fn encode_words(words: &[i64]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(words.len() * 8);
    for word in words {
        buf.extend_from_slice(&word.to_be_bytes());
    }
    buf
}

/// Compute the canonical signature of a domain geometry.
///
/// Word order is fixed: the three quantized spacings; then per axis in
/// L, P, S order the quantized (min, max) bbox bounds; then the three
/// shape entries verbatim when present; finally the definition tag.
pub(crate) fn spatial_signature(
    spacing: &[f64; 3],
    bbox: &BBox,
    shape: Option<&[u64; 3]>,
    definition: &GridDefinition,
) -> Result<ContentSignature> {
    let mut words: Vec<i64> = Vec::with_capacity(13);
    for &s in spacing {
        words.push(quantize(s)?);
    }
    for axis in Axis::ALL {
        let (min, max) = bbox.bounds(axis);
        words.push(quantize(min)?);
        words.push(quantize(max)?);
    }
    if let Some(shape) = shape {
        words.extend(shape.iter().map(|&n| n as i64));
    }
    words.push(definition.hash_tag());

    let digest = Blake2b128::digest(encode_words(&words));
    Ok(ContentSignature::new(
        HASH_METHOD,
        format!("b2:{}", hex::encode(digest)),
    ))
}
