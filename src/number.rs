//! Integer literal parsing with radix prefixes.
//!
//! Accepted forms: an optional sign, then either `0x`/`0o`/`0b` (any case)
//! followed by digits of that radix, a leading `0` followed by octal digits,
//! or plain decimal digits. Underscores may separate digits.

use num::bigint::{BigInt, ParseBigIntError};
use num::{Num, Zero};

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        Empty {
            display("empty integer literal")
        }
        InvalidDigit(c: char, radix: u32) {
            display("invalid digit {:?} for radix {}", c, radix)
        }
        MisplacedUnderscore {
            display("misplaced underscore in integer literal")
        }
        InvalidInt(err: ParseBigIntError) {
            from()
            display("invalid integer literal: {}", err)
            source(err)
        }
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

/// Returns the radix, the remaining digits and whether a prefix was consumed.
fn split_radix(s: &str) -> (u32, &str, bool) {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'0') {
        return (10, s, false);
    }
    if bytes.len() >= 3 {
        match bytes[1] {
            b'x' | b'X' => return (16, &s[2..], true),
            b'o' | b'O' => return (8, &s[2..], true),
            b'b' | b'B' => return (2, &s[2..], true),
            _ => (),
        }
    }
    (8, &s[1..], true)
}

fn strip_underscores(digits: &str, radix: u32, prefixed: bool) -> Result<String, Error> {
    let mut buf = String::with_capacity(digits.len());
    // A prefix counts as a digit for underscore placement.
    let mut after_digit = prefixed;

    for c in digits.chars() {
        if c == '_' {
            if !after_digit {
                return Err(Error::MisplacedUnderscore);
            }
            after_digit = false;
            continue
        }
        if c.to_digit(radix).is_none() {
            return Err(Error::InvalidDigit(c, radix));
        }
        buf.push(c);
        after_digit = true;
    }

    if !after_digit {
        return Err(Error::MisplacedUnderscore);
    }
    Ok(buf)
}

/// Parses an integer literal without any magnitude bound.
pub fn parse_integer(token: &str) -> Result<BigInt, Error> {
    let (negative, rest) = split_sign(token);
    if rest.is_empty() {
        return Err(Error::Empty);
    }

    let (radix, digits, prefixed) = split_radix(rest);
    let digits = strip_underscores(digits, radix, prefixed)?;

    // Bare `0` leaves nothing after the octal prefix.
    let magnitude = if digits.is_empty() {
        BigInt::zero()
    } else {
        BigInt::from_str_radix(&digits, radix)?
    };

    Ok(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use num::bigint::BigInt;
    use num::FromPrimitive;

    use super::{parse_integer, Error};

    macro_rules! t {
        ($token: expr, $pat:pat, $result:expr) => ({
            match parse_integer($token) {
                $pat => $result,
                other => {
                    println!("ERROR {:?}", other);
                    assert!(false)
                },
            }
        })
    }

    fn big(n: i64) -> BigInt {
        BigInt::from_i64(n).unwrap()
    }

    #[test]
    fn test_decimal() {
        t!("0", Ok(n), assert_eq!(n, big(0)));
        t!("42", Ok(n), assert_eq!(n, big(42)));
        t!("-17", Ok(n), assert_eq!(n, big(-17)));
        t!("+5", Ok(n), assert_eq!(n, big(5)));
        t!("1_000", Ok(n), assert_eq!(n, big(1000)));
    }

    #[test]
    fn test_prefixes() {
        t!("0x1F", Ok(n), assert_eq!(n, big(31)));
        t!("0XfF", Ok(n), assert_eq!(n, big(255)));
        t!("0o17", Ok(n), assert_eq!(n, big(15)));
        t!("017", Ok(n), assert_eq!(n, big(15)));
        t!("0b101", Ok(n), assert_eq!(n, big(5)));
        t!("-0x10", Ok(n), assert_eq!(n, big(-16)));
        t!("0x_1F", Ok(n), assert_eq!(n, big(31)));
    }

    #[test]
    fn test_unbounded() {
        let expected: BigInt = "99999999999999999999".parse().unwrap();
        t!("99999999999999999999", Ok(n), assert_eq!(n, expected));
    }

    #[test]
    fn test_invalid() {
        t!("", Err(Error::Empty), ());
        t!("-", Err(Error::Empty), ());
        t!("08", Err(Error::InvalidDigit('8', 8)), ());
        t!("0x", Err(Error::InvalidDigit('x', 8)), ());
        t!("0b12", Err(Error::InvalidDigit('2', 2)), ());
        t!("12a", Err(Error::InvalidDigit('a', 10)), ());
        t!("3.14", Err(Error::InvalidDigit('.', 10)), ());
        t!("_1", Err(Error::MisplacedUnderscore), ());
        t!("1_", Err(Error::MisplacedUnderscore), ());
        t!("1__0", Err(Error::MisplacedUnderscore), ());
    }
}
