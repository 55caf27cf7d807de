use serde::de::Visitor;
use serde_with::DeserializeAs;

/// Convert something like "$312.03" to 312.03
///
/// ## Example
/// ```txt
/// "$312.03" -> 312.03
/// "312.03"  -> 312.03
/// "312"     -> 312.0
/// "$1,600"  -> 1600.0
/// "-$200"   -> None
/// ```
pub(crate) fn parse_dollars<T: AsRef<str>>(s: T) -> Option<f64> {
    let s = s.as_ref();
    if s.contains('-') {
        return None;
    }

    s.chars()
        .filter(|c| c.is_numeric() || *c == '.')
        .collect::<String>()
        .parse::<f64>()
        .ok()
}

/// Accept a price written as a dollar string.
/// e.g. "$1,600" -> 1600.0
///
/// Meant to sit behind a `PickFirst`, so plain JSON numbers are taken as-is.
pub struct Dollars;

impl<'de> DeserializeAs<'de, f64> for Dollars {
    fn deserialize_as<D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Helper;

        impl<'de> Visitor<'de> for Helper {
            type Value = f64;

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                parse_dollars(v).ok_or_else(|| E::custom(format!("not a price: {:?}", v)))
            }

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a price, either a number or a string like \"$580\"")
            }
        }

        deserializer.deserialize_str(Helper)
    }
}

/// Round to the nearest integer, with halves going up (`-2.5 -> -2`, `2.5 -> 3`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to `places` decimals with [`round_half_up`].
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    round_half_up(value * scale) / scale
}

/// Rounded whole percentage/temperature/wattage. Negative values saturate to 0.
pub(crate) fn whole(value: f64) -> u32 {
    round_half_up(value).max(0.0) as u32
}

#[cfg(test)]
pub(crate) fn roughly_equal(a: f64, b: f64) -> bool {
    if a == b {
        true
    } else if ((a > 0.0) && (b < 0.0)) || ((a < 0.0) && (b > 0.0)) {
        false
    } else if ((a == 0.0) && (b != 0.0)) || ((a != 0.0) && (b == 0.0)) {
        false
    } else {
        fn dif(x: f64, y: f64) -> f64 {
            (x.abs().ln() - y.abs().ln()).abs()
        }

        dif(a, b) <= dif(1.0, 1.00001)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_with::{serde_as, PickFirst};

    use super::{parse_dollars, roughly_equal, round_half_up, round_to, Dollars};

    #[test]
    fn test_roughly_equal() {
        assert!(roughly_equal(0.0, 0.0));
        assert!(roughly_equal(0.02, 0.02000001));
        assert!(roughly_equal(0.1 + 0.2, 0.3));
        assert!(roughly_equal(-4000000.0, -4000000.2));

        assert!(!roughly_equal(0.02, 0.03));
        assert!(!roughly_equal(0.0, 0.00003));
        assert!(!roughly_equal(1000.0, 1001.0));
        assert!(!roughly_equal(2.0, -2.0));
    }

    #[test]
    fn test_parse_dollars() {
        assert_eq!(parse_dollars("$312.04").unwrap(), 312.04);
        assert_eq!(parse_dollars("8.8.4.4"), None);
        assert_eq!(parse_dollars("42").unwrap(), 42.00);
        assert_eq!(parse_dollars("$1,600").unwrap(), 1600.0);
        assert_eq!(parse_dollars("-$200"), None);
        assert_eq!(parse_dollars("$-200"), None);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(78.49), 78.0);
        assert!(roughly_equal(round_to(0.123456, 3), 0.123));
        assert!(roughly_equal(round_to(12.66, 1), 12.7));
    }

    #[serde_as]
    #[derive(Deserialize)]
    struct Priced {
        #[serde_as(as = "PickFirst<(_, Dollars)>")]
        price: f64,
    }

    #[test]
    fn test_dollars_adapter() {
        let number: Priced = serde_json::from_str(r#"{"price": 580}"#).unwrap();
        assert_eq!(number.price, 580.0);

        let string: Priced = serde_json::from_str(r#"{"price": "$1,600"}"#).unwrap();
        assert_eq!(string.price, 1600.0);

        assert!(serde_json::from_str::<Priced>(r#"{"price": "free"}"#).is_err());
        assert!(serde_json::from_str::<Priced>(r#"{"price": "-$200"}"#).is_err());
    }
}
