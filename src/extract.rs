//! Pulling usable payloads out of model responses.
//!
//! Models are told to answer with a bare JSON object, but in practice they
//! wrap it in prose or a markdown code fence anyway, so the relay scans for
//! the object instead of parsing the whole reply.

use base64::Engine;

use crate::gemini::{InlineImage, Part};

#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("No JSON object found in the model response")]
    NoJsonObject,
    #[error("Model response contained malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("No image data in the model response")]
    NoImageData,
    #[error("Image payload is not valid base64: {0}")]
    BadImageData(#[from] base64::DecodeError),
}

/// Extract the JSON object embedded in free-form model text.
///
/// Takes the substring from the first `{` to the last `}` inclusive and
/// parses it. Known limitation: if the text contains braces outside the
/// intended object, or more than one object, the substring is garbage and
/// parsing fails. Kept as-is for compatibility with existing clients; a
/// schema-validating parser could replace this without touching the routes.
pub fn extract_json_object(text: &str) -> Result<serde_json::Value, ExtractError> {
    let start = text.find('{').ok_or(ExtractError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(ExtractError::NoJsonObject)?;
    if end < start {
        // A lone `}` before the first `{` delimits nothing.
        return Err(ExtractError::NoJsonObject);
    }
    Ok(serde_json::from_str(&text[start..=end])?)
}

/// Find the first content part carrying inline binary data and decode it.
pub fn first_inline_image(parts: &[Part]) -> Result<InlineImage, ExtractError> {
    let inline = parts
        .iter()
        .find_map(|part| part.inline_data.as_ref())
        .ok_or(ExtractError::NoImageData)?;
    let bytes = base64::engine::general_purpose::STANDARD.decode(&inline.data)?;
    Ok(InlineImage {
        mime_type: inline.mime_type.clone(),
        bytes,
    })
}

/// Render an image as a data URI, directly usable as an `<img>` source.
pub fn to_data_uri(image: &InlineImage) -> String {
    format!(
        "data:{};base64,{}",
        image.mime_type,
        // Data URIs take the standard alphabet, not URL_SAFE
        base64::engine::general_purpose::STANDARD.encode(&image.bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::InlineData;

    #[test]
    fn object_survives_surrounding_prose() {
        let text = r#"Here is it: {"dishName":"Kimchi Stew","recipe":"...","cookingTime":"30m"} Enjoy!"#;
        let value = extract_json_object(text).unwrap();
        assert_eq!(value["dishName"], "Kimchi Stew");
        assert_eq!(value["recipe"], "...");
        assert_eq!(value["cookingTime"], "30m");
    }

    #[test]
    fn object_survives_markdown_fence() {
        let text = "```json\n{\"dishName\": \"Bibimbap\"}\n```";
        let value = extract_json_object(text).unwrap();
        assert_eq!(value["dishName"], "Bibimbap");
    }

    #[test]
    fn missing_braces_is_no_object() {
        assert!(matches!(
            extract_json_object("The model refused to answer."),
            Err(ExtractError::NoJsonObject)
        ));
        assert!(matches!(
            extract_json_object("only an opening { here"),
            Err(ExtractError::NoJsonObject)
        ));
        assert!(matches!(
            extract_json_object("} backwards {"),
            Err(ExtractError::NoJsonObject)
        ));
    }

    #[test]
    fn broken_json_is_malformed() {
        assert!(matches!(
            extract_json_object("{\"dishName\": }"),
            Err(ExtractError::MalformedJson(_))
        ));
    }

    // Documents the known limitation: two objects in one reply span from the
    // first { to the last }, which is not valid JSON.
    #[test]
    fn two_objects_fail_to_parse() {
        assert!(matches!(
            extract_json_object(r#"{"a": 1} and {"b": 2}"#),
            Err(ExtractError::MalformedJson(_))
        ));
    }

    #[test]
    fn first_inline_part_wins() {
        let parts = vec![
            Part {
                text: Some("Here is your image".into()),
                inline_data: None,
            },
            Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: "image/png".into(),
                    data: base64::engine::general_purpose::STANDARD.encode(b"png-bytes"),
                }),
            },
        ];
        let image = first_inline_image(&parts).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.bytes, b"png-bytes");
    }

    #[test]
    fn text_only_parts_have_no_image() {
        let parts = vec![Part {
            text: Some("no picture today".into()),
            inline_data: None,
        }];
        assert!(matches!(
            first_inline_image(&parts),
            Err(ExtractError::NoImageData)
        ));
    }

    #[test]
    fn data_uri_combines_mime_and_payload() {
        let image = InlineImage {
            mime_type: "image/webp".into(),
            bytes: vec![1, 2, 3],
        };
        assert_eq!(to_data_uri(&image), "data:image/webp;base64,AQID");
    }
}
