//! Binary encoding of numbers.
//!
//! ```text
//! fixnum:  0x01 i64
//! bignum:  0x02 sign:u8 len:u32 magnitude
//! ratio:   0x03 sign:u8 len:u32 numerator len:u32 denominator
//! complex: 0x04 <real> <imaginary>
//! ```
//!
//! Fixed-width fields are little-endian, magnitudes are big-endian unsigned
//! bytes. Decoding rebuilds values through the canonicalizer, so a bignum
//! that fits a fixnum or an unreduced ratio comes back canonical.
use std::io::{self, Read, Write};

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::{Number, Repr, canonical};

pub const TAG_FIXNUM: u8 = 0x01;
pub const TAG_BIGINT: u8 = 0x02;
pub const TAG_RATIO: u8 = 0x03;
pub const TAG_COMPLEX: u8 = 0x04;

const SIGN_POSITIVE: u8 = 0;
const SIGN_NEGATIVE: u8 = 1;

/// Exact number of bytes `encode` writes for `value`.
pub fn size(value: &Number) -> usize {
    1 + match value.repr() {
        Repr::Fixnum(_) => 8,
        Repr::BigInt(n) => 1 + 4 + magnitude_len(n.magnitude()),
        Repr::Ratio(r) => {
            1 + 4 + magnitude_len(r.numer().magnitude()) + 4 + magnitude_len(r.denom().magnitude())
        }
        Repr::Complex(re, im) => size(re) + size(im),
    }
}

// to_bytes_be writes a single zero byte for zero
fn magnitude_len(magnitude: &BigUint) -> usize {
    (magnitude.bits().div_ceil(8) as usize).max(1)
}

pub fn encode(value: &Number, w: &mut dyn Write) -> io::Result<()> {
    match value.repr() {
        Repr::Fixnum(n) => {
            write_u8(w, TAG_FIXNUM)?;
            write_i64(w, *n)
        }
        Repr::BigInt(n) => {
            write_u8(w, TAG_BIGINT)?;
            write_sign(w, n.sign())?;
            write_magnitude(w, n.magnitude())
        }
        Repr::Ratio(r) => {
            write_u8(w, TAG_RATIO)?;
            write_sign(w, r.numer().sign())?;
            write_magnitude(w, r.numer().magnitude())?;
            write_magnitude(w, r.denom().magnitude())
        }
        Repr::Complex(re, im) => {
            write_u8(w, TAG_COMPLEX)?;
            encode(re, w)?;
            encode(im, w)
        }
    }
}

pub fn decode(r: &mut dyn Read) -> io::Result<Number> {
    match read_u8(r)? {
        TAG_COMPLEX => {
            let re = decode_real(r)?;
            let im = decode_real(r)?;
            Ok(canonical::from_complex(re, im))
        }
        tag => decode_tagged_real(tag, r),
    }
}

fn decode_real(r: &mut dyn Read) -> io::Result<Number> {
    match read_u8(r)? {
        TAG_COMPLEX => Err(invalid_data("complex number as a complex part")),
        tag => decode_tagged_real(tag, r),
    }
}

fn decode_tagged_real(tag: u8, r: &mut dyn Read) -> io::Result<Number> {
    match tag {
        TAG_FIXNUM => Ok(Number::from_i64(read_i64(r)?)),
        TAG_BIGINT => {
            let sign = read_sign(r)?;
            let magnitude = read_magnitude(r)?;
            Ok(canonical::from_bigint(BigInt::from_biguint(sign, magnitude)))
        }
        TAG_RATIO => {
            let sign = read_sign(r)?;
            let numer = BigInt::from_biguint(sign, read_magnitude(r)?);
            let denom = read_magnitude(r)?;
            if denom.is_zero() {
                return Err(invalid_data("ratio with zero denominator"));
            }
            Ok(canonical::from_ratio(numer, BigInt::from(denom)))
        }
        _ => Err(invalid_data("unknown number tag")),
    }
}

pub fn to_bytes(value: &Number) -> Vec<u8> {
    let mut out = Vec::with_capacity(size(value));
    // writing into a Vec cannot fail
    let _ = encode(value, &mut out);
    out
}

/// Decodes exactly one number, trailing bytes are an error.
pub fn from_bytes(bytes: &[u8]) -> io::Result<Number> {
    let mut cursor = bytes;
    let value = decode(&mut cursor)?;
    if !cursor.is_empty() {
        return Err(invalid_data("trailing bytes after number"));
    }
    Ok(value)
}

fn write_u8(w: &mut dyn Write, v: u8) -> io::Result<()> {
    w.write_all(&[v])
}

fn read_u8(r: &mut dyn Read) -> io::Result<u8> {
    let mut b = [0u8; 1];
    r.read_exact(&mut b)?;
    Ok(b[0])
}

fn write_u32(w: &mut dyn Write, v: u32) -> io::Result<()> {
    w.write_all(&v.to_le_bytes())
}

fn read_u32(r: &mut dyn Read) -> io::Result<u32> {
    let mut b = [0u8; 4];
    r.read_exact(&mut b)?;
    Ok(u32::from_le_bytes(b))
}

fn write_i64(w: &mut dyn Write, v: i64) -> io::Result<()> {
    w.write_all(&v.to_le_bytes())
}

fn read_i64(r: &mut dyn Read) -> io::Result<i64> {
    let mut b = [0u8; 8];
    r.read_exact(&mut b)?;
    Ok(i64::from_le_bytes(b))
}

fn write_sign(w: &mut dyn Write, sign: Sign) -> io::Result<()> {
    let byte = if sign == Sign::Minus {
        SIGN_NEGATIVE
    } else {
        SIGN_POSITIVE
    };
    write_u8(w, byte)
}

fn read_sign(r: &mut dyn Read) -> io::Result<Sign> {
    match read_u8(r)? {
        SIGN_POSITIVE => Ok(Sign::Plus),
        SIGN_NEGATIVE => Ok(Sign::Minus),
        _ => Err(invalid_data("bad sign byte")),
    }
}

fn write_magnitude(w: &mut dyn Write, magnitude: &BigUint) -> io::Result<()> {
    let bytes = magnitude.to_bytes_be();
    let len = u32::try_from(bytes.len()).map_err(|_| invalid_data("magnitude too long"))?;
    write_u32(w, len)?;
    w.write_all(&bytes)
}

fn read_magnitude(r: &mut dyn Read) -> io::Result<BigUint> {
    let len = read_u32(r)? as usize;
    let mut bytes = Vec::new();
    (&mut *r).take(len as u64).read_to_end(&mut bytes)?;
    if bytes.len() != len {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "truncated magnitude",
        ));
    }
    Ok(BigUint::from_bytes_be(&bytes))
}

fn invalid_data(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}
