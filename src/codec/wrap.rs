//! Integer reduction to a declared wire width.
//!
//! Integers enter the codec as sign plus magnitude so that both `i128` and
//! `u128` inputs can be reduced without overflow. The result is the two's
//! complement bit pattern in the low `width * 8` bits of a `u128`.

/// Splits a signed integer into sign and magnitude.
pub fn split_sign(value: i128) -> (bool, u128) {
    (value < 0, value.unsigned_abs())
}

/// Returns true if the integer is representable at `width` bytes unchanged.
pub fn fits_width(negative: bool, magnitude: u128, signed: bool, width: usize) -> bool {
    if width == 0 {
        return magnitude == 0;
    }
    let bits = width * 8;
    if signed {
        let half = 1u128 << (bits - 1);
        if negative {
            magnitude <= half
        } else {
            magnitude < half
        }
    } else {
        (!negative && magnitude <= mask(bits)) || magnitude == 0
    }
}

/// Reduces an integer to `width` bytes.
///
/// Signed widths keep representable values as they are. Anything else has its
/// magnitude taken modulo `2^(width*8 - 1)` and the sign re-applied, so
/// `200` at one byte becomes `72` and `-200` becomes `-72`.
///
/// Unsigned widths take the value modulo `2^(width*8)`, so `-1` at one byte
/// becomes `255`.
pub fn wrap_to_width(negative: bool, magnitude: u128, signed: bool, width: usize) -> u128 {
    if width == 0 {
        return 0;
    }
    let bits = width * 8;
    let reduced = if !signed {
        magnitude & mask(bits)
    } else if fits_width(negative, magnitude, true, width) {
        magnitude
    } else {
        magnitude % (1u128 << (bits - 1))
    };
    let pattern = if negative {
        reduced.wrapping_neg()
    } else {
        reduced
    };
    pattern & mask(bits)
}

fn mask(bits: usize) -> u128 {
    if bits >= 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}
