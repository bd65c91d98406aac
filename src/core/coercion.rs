use crate::core::RawCell;

/// Coerces one raw cell into a numeric sample.
///
/// Text has grouping commas removed and is parsed by its longest leading
/// float prefix, so unit suffixes such as `"12.5kPa"` still yield a value.
/// Anything that does not produce a finite number becomes a gap (`None`).
#[must_use]
pub fn coerce_cell(cell: &RawCell) -> Option<f64> {
    let value = match cell {
        RawCell::Number(value) => *value,
        RawCell::Text(text) => {
            let stripped: String = text.chars().filter(|ch| *ch != ',').collect();
            parse_float_prefix(&stripped)?
        }
        RawCell::Absent => return None,
    };
    value.is_finite().then_some(value)
}

#[must_use]
pub fn coerce_cells(cells: &[RawCell]) -> Vec<Option<f64>> {
    cells.iter().map(coerce_cell).collect()
}

/// Parses the longest prefix of `text` (after leading whitespace) that forms a
/// decimal float literal.
#[must_use]
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::{coerce_cell, parse_float_prefix};
    use crate::core::RawCell;

    #[test]
    fn strips_grouping_commas() {
        assert_eq!(coerce_cell(&RawCell::from("1,234.5")), Some(1234.5));
    }

    #[test]
    fn keeps_numeric_prefix_of_unit_suffixed_text() {
        assert_eq!(coerce_cell(&RawCell::from(" 12.5kPa")), Some(12.5));
        assert_eq!(parse_float_prefix("-3e2rpm"), Some(-300.0));
        assert_eq!(parse_float_prefix("7e"), Some(7.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
    }

    #[test]
    fn non_numeric_text_is_a_gap() {
        assert_eq!(coerce_cell(&RawCell::from("abc")), None);
        assert_eq!(coerce_cell(&RawCell::from("")), None);
        assert_eq!(coerce_cell(&RawCell::from("-")), None);
        assert_eq!(coerce_cell(&RawCell::from(".")), None);
        assert_eq!(coerce_cell(&RawCell::Absent), None);
    }

    #[test]
    fn non_finite_numbers_are_gaps() {
        assert_eq!(coerce_cell(&RawCell::Number(f64::NAN)), None);
        assert_eq!(coerce_cell(&RawCell::Number(f64::INFINITY)), None);
        assert_eq!(coerce_cell(&RawCell::Number(4.0)), Some(4.0));
    }
}
