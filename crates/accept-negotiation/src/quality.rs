//! Parsing of `q` parameter values
//!
//! Accepts decimal literals, hexadecimal literals with a binary exponent
//! (`0x1.8p-1`, underscores allowed between digits), and the special values
//! `inf`, `infinity` (optionally signed) and `nan`. A finite literal whose value
//! does not fit in an `f64` is out of range and rejected.

/// Parses a `q` value, returning `None` on a syntax or range error
pub(crate) fn parse_quality(value: &str) -> Option<f64> {
	if let Some(special) = parse_special(value) {
		return Some(special);
	}

	let (negative, unsigned) = split_sign(value);
	let magnitude = match unsigned
		.strip_prefix("0x")
		.or_else(|| unsigned.strip_prefix("0X"))
	{
		Some(hex) => parse_hex(hex)?,
		None => parse_decimal(unsigned)?,
	};

	// Out of range: the literal was finite but the value overflowed.
	if magnitude.is_infinite() {
		return None;
	}

	Some(if negative { -magnitude } else { magnitude })
}

fn split_sign(value: &str) -> (bool, &str) {
	match value.as_bytes().first() {
		Some(b'-') => (true, &value[1..]),
		Some(b'+') => (false, &value[1..]),
		_ => (false, value),
	}
}

fn parse_special(value: &str) -> Option<f64> {
	if value.eq_ignore_ascii_case("nan") {
		return Some(f64::NAN);
	}

	let (negative, unsigned) = split_sign(value);
	if unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity") {
		return Some(if negative {
			f64::NEG_INFINITY
		} else {
			f64::INFINITY
		});
	}

	None
}

fn parse_decimal(unsigned: &str) -> Option<f64> {
	// A second sign, or a spelled-out special value, is not a decimal literal.
	if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
		return None;
	}
	unsigned.parse::<f64>().ok()
}

/// Removes underscores that separate digits; any other underscore is an error.
fn strip_separators(
	digits: &str,
	is_digit: impl Fn(u8) -> bool,
	leading_ok: bool,
) -> Option<String> {
	let bytes = digits.as_bytes();
	let mut stripped = String::with_capacity(digits.len());
	for (i, &b) in bytes.iter().enumerate() {
		if b == b'_' {
			let before_ok = if i == 0 {
				leading_ok
			} else {
				is_digit(bytes[i - 1])
			};
			let after_ok = bytes.get(i + 1).is_some_and(|&next| is_digit(next));
			if !before_ok || !after_ok {
				return None;
			}
		} else {
			stripped.push(char::from(b));
		}
	}
	Some(stripped)
}

fn parse_hex(hex: &str) -> Option<f64> {
	let (mantissa, exponent) = hex.split_once(['p', 'P'])?;
	let mantissa = strip_separators(mantissa, |b| b.is_ascii_hexdigit(), true)?;
	let (negative_exponent, exponent) = split_sign(exponent);
	let exponent = strip_separators(exponent, |b| b.is_ascii_digit(), false)?;
	if exponent.is_empty() {
		return None;
	}

	let (integral, fraction) = mantissa.split_once('.').unwrap_or((mantissa.as_str(), ""));
	if integral.is_empty() && fraction.is_empty() {
		return None;
	}

	// Keep the first 16 significant hex digits; later ones only shift the exponent
	// (integral part) or fall below the precision of an f64.
	let mut bits: u64 = 0;
	let mut significant = 0usize;
	let mut shift: i64 = 0;
	for (i, c) in integral.chars().chain(fraction.chars()).enumerate() {
		let digit = u64::from(c.to_digit(16)?);
		let in_fraction = i >= integral.len();
		if significant < 16 {
			if bits != 0 || digit != 0 {
				significant += 1;
			}
			bits = bits * 16 + digit;
			if in_fraction {
				shift -= 4;
			}
		} else if !in_fraction {
			shift += 4;
		}
	}

	let magnitude = exponent.bytes().try_fold(0i64, |acc, b| {
		b.is_ascii_digit()
			.then(|| (acc * 10 + i64::from(b - b'0')).min(1_000_000))
	})?;
	let exponent = if negative_exponent { -magnitude } else { magnitude };

	Some(scale_by_power_of_two(bits as f64, exponent + shift))
}

fn scale_by_power_of_two(mut value: f64, mut exponent: i64) -> f64 {
	if value == 0.0 {
		return 0.0;
	}
	while exponent > 1000 {
		value *= 2f64.powi(1000);
		exponent -= 1000;
		if value.is_infinite() {
			return value;
		}
	}
	while exponent < -1000 {
		value *= 2f64.powi(-1000);
		exponent += 1000;
		if value == 0.0 {
			return value;
		}
	}
	value * 2f64.powi(exponent as i32)
}
