//! plain base-58 conversion, the textual half of Base58Check
use thiserror::Error;

/// the digit symbols in value order (`0`, `O`, `I` and `l` are excluded)
pub const CHARS: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn decode_char(val: u8) -> Option<usize> {
    match val {
        b'1'..=b'9' => Some((val - b'1') as usize),
        b'A'..=b'H' => Some(9 + (val - b'A') as usize),
        b'J'..=b'N' => Some(17 + (val - b'J') as usize),
        b'P'..=b'Z' => Some(22 + (val - b'P') as usize),
        b'a'..=b'k' => Some(33 + (val - b'a') as usize),
        b'm'..=b'z' => Some(44 + (val - b'm') as usize),
        _ => None,
    }
}

/// encodes `input` to base-58, treating it as one big-endian integer
///
/// leading zero bytes are kept as leading `'1'` digits, which plain base
/// conversion would otherwise drop
#[must_use]
pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    // digits are base-58, least significant first; 138 / 100 over-approximates
    // log(256) / log(58) so the buffer rarely regrows
    let mut digits = Vec::<u8>::with_capacity((input.len() - zeros) * 138 / 100 + 1);
    for &val in &input[zeros..] {
        let mut carry = val as u32;
        for digit in &mut digits {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }
    let mut out = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        out.push('1');
    }
    for &digit in digits.iter().rev() {
        out.push(CHARS[digit as usize] as char);
    }
    out
}

/// the inverse of [`encode`]: leading `'1'` digits become leading zero bytes
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    // bytes are base-256, least significant first; 733 / 1000 over-approximates
    // log(58) / log(256)
    let mut bytes = Vec::<u8>::with_capacity(input.len() * 733 / 1000 + 1);
    for (at, &value) in input.as_bytes().iter().enumerate() {
        let digit = match decode_char(value) {
            None => return Err(DecodeError::Malformed { at, value }),
            Some(v) => v,
        };
        let mut carry = digit as u32;
        for byte in &mut bytes {
            carry += (*byte as u32) * 58;
            *byte = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push(carry as u8);
            carry >>= 8;
        }
    }
    let zeros = input.bytes().take_while(|&b| b == b'1').count();
    bytes.resize(bytes.len() + zeros, 0);
    bytes.reverse();
    Ok(bytes)
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DecodeError {
    #[error("malformed base-58 character {value:?} (at {at})")]
    Malformed { at: usize, value: u8 },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validate_chars() {
        for (i, &c0) in CHARS.iter().enumerate() {
            assert!(c0.is_ascii_graphic(), "unprintable data character at {i}");
            if i > 0 {
                for (j, &c1) in CHARS[..i].iter().enumerate() {
                    assert_ne!(c1, c0, "duplicate data character at {j} and {i}");
                }
            }
        }
    }

    #[test]
    fn decode_matches_chars() {
        for (i, &c0) in CHARS.iter().enumerate() {
            assert_eq!(decode_char(c0), Some(i), "data character {c0} (at {i}) isn't decoded properly");
        }
    }

    #[test]
    fn decode_rejects_lookalikes() {
        for c in [b'0', b'O', b'I', b'l'] {
            assert_eq!(decode_char(c), None, "ambiguous character {c} must not decode");
        }
    }

    macro_rules! test_codec {
        ($input:expr => $expect:expr) => {{
            let input: &[u8] = $input;
            let expect: &str = $expect;
            assert_eq!(encode(input), expect);
            assert_eq!(decode(expect), Ok(input.to_vec()));
        }};
    }

    #[test]
    fn codec_success() {
        test_codec!(b"" => "");
        test_codec!(b"abc" => "ZiCa");
        test_codec!(b"\0abc" => "1ZiCa");
        test_codec!(b"\0\0abc" => "11ZiCa");
        test_codec!(b"Hello World!" => "2NEpo7TZRRrLZSi2U");
        test_codec!(&[0u8; 4] => "1111");
    }

    #[test]
    fn codec_long() {
        let input = hex::decode("00bd8813e79baa5fa1874ca8b70877d1b044e220ecd34a60eca3ba15fc36b378e7").unwrap();
        assert_eq!(encode(&input), "1DkrQMni2h8KYpvY8t7dECshL66gwnxiR5uD2Udxps6og");
        assert_eq!(decode("1DkrQMni2h8KYpvY8t7dECshL66gwnxiR5uD2Udxps6og"), Ok(input));
    }

    #[test]
    fn decoder_fail() {
        assert_eq!(decode("0"), Err(DecodeError::Malformed { at: 0, value: b'0' }));
        assert_eq!(decode("ZiC0"), Err(DecodeError::Malformed { at: 3, value: b'0' }));
        assert_eq!(decode("Zi Ca"), Err(DecodeError::Malformed { at: 2, value: b' ' }));
        assert_eq!(decode("ZiCa\n"), Err(DecodeError::Malformed { at: 4, value: b'\n' }));
        assert_eq!(decode("Il"), Err(DecodeError::Malformed { at: 0, value: b'I' }));
    }
}
