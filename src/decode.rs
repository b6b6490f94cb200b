//! JSON decoding of raw response bytes into caller-specified shapes.

use serde::de::DeserializeOwned;

use crate::error::{FetchError, Result};

/// Decodes a JSON payload into any `DeserializeOwned` shape.
///
/// Pure with respect to its input; nothing is shared between calls.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the bytes are not valid JSON or do not
/// structurally match `T`.
pub fn decode_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(FetchError::Decode)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Widget {
        name: String,
    }

    #[test]
    fn test_decode_matching_shape() {
        let widget: Widget = decode_slice(br#"{"name":"anemometer"}"#).unwrap();
        assert_eq!(
            widget,
            Widget {
                name: "anemometer".to_string()
            }
        );
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let widget: Widget = decode_slice(br#"{"name":"anemometer","spin":9}"#).unwrap();
        assert_eq!(widget.name, "anemometer");
    }

    #[test]
    fn test_decode_missing_required_field() {
        let err = decode_slice::<Widget>(br#"{"unexpectedField":1}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_decode_wrong_field_type() {
        let err = decode_slice::<Widget>(br#"{"name":42}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = decode_slice::<Widget>(b"not json").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
