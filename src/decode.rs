//! Response decoding
//!
//! Pulls inline attachments and the text transcript out of the first
//! candidate of a `generateContent` response.

use crate::ai::gemini::{GenerateContentResponse, InlinePayload};
use crate::models::{Attachment, DecodedResponse};
use crate::{Error, Result};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

/// Standard alphabet, padding optional.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a response into attachments and a newline-joined transcript.
///
/// Missing candidates, content or parts yield an empty result. Only the first
/// candidate is read. A part carrying both text and inline data contributes
/// to both outputs.
pub fn decode(response: &GenerateContentResponse) -> Result<DecodedResponse> {
    let Some(parts) = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|c| &c.parts)
    else {
        return Ok(DecodedResponse::default());
    };

    let mut attachments = Vec::new();
    let mut texts: Vec<&str> = Vec::new();

    for part in parts {
        if let Some(inline) = part.inline_data.as_ref() {
            if let Some(payload) = inline.data.as_ref().filter(|p| !p.is_empty()) {
                attachments.push(Attachment {
                    bytes: payload_bytes(payload)?,
                    mime_type: inline.mime_type.clone(),
                });
            }
        }

        if let Some(text) = part.text.as_deref().filter(|t| !t.is_empty()) {
            texts.push(text);
        }
    }

    tracing::debug!(
        "Decoded {} attachment(s) and {} text part(s)",
        attachments.len(),
        texts.len()
    );

    Ok(DecodedResponse {
        attachments,
        transcript: texts.join("\n"),
    })
}

/// Normalize an inline payload to raw bytes.
pub fn payload_bytes(payload: &InlinePayload) -> Result<Vec<u8>> {
    match payload {
        InlinePayload::Bytes(bytes) => Ok(bytes.clone()),
        InlinePayload::Base64(encoded) => {
            let compact: String = encoded
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect();
            LENIENT_BASE64
                .decode(compact)
                .map_err(|e| Error::InvalidPayload(format!("bad base64 image data: {}", e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gemini::{Candidate, Content, Part};
    use base64::Engine as _;
    use pretty_assertions::assert_eq;

    fn response_with(parts: Vec<Part>) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content { role: None, parts }),
            }],
        }
    }

    fn b64(bytes: &[u8]) -> InlinePayload {
        InlinePayload::Base64(base64::engine::general_purpose::STANDARD.encode(bytes))
    }

    #[test]
    fn test_empty_candidates() {
        let decoded = decode(&GenerateContentResponse::default()).unwrap();
        assert_eq!(decoded, DecodedResponse::default());
        assert!(decoded.attachments.is_empty());
        assert_eq!(decoded.transcript, "");
    }

    #[test]
    fn test_candidate_without_content_or_parts() {
        let no_content = GenerateContentResponse {
            candidates: vec![Candidate { content: None }],
        };
        assert_eq!(decode(&no_content).unwrap(), DecodedResponse::default());

        assert_eq!(
            decode(&response_with(vec![])).unwrap(),
            DecodedResponse::default()
        );
    }

    #[test]
    fn test_cat_scenario() {
        let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        let response = response_with(vec![
            Part::text("Here is your cat"),
            Part::inline("image/jpeg", b64(&jpeg)),
        ]);

        let decoded = decode(&response).unwrap();
        assert_eq!(
            decoded.attachments,
            vec![Attachment {
                bytes: jpeg,
                mime_type: "image/jpeg".to_string()
            }]
        );
        assert_eq!(decoded.transcript, "Here is your cat");
    }

    #[test]
    fn test_transcript_order_survives_interleaved_images() {
        let response = response_with(vec![
            Part::text("one"),
            Part::inline("image/png", b64(b"a")),
            Part::text("two"),
            Part::inline("image/png", b64(b"b")),
            Part::text(""),
            Part::text("three"),
        ]);

        let decoded = decode(&response).unwrap();
        assert_eq!(decoded.transcript, "one\ntwo\nthree");
        let bodies: Vec<&[u8]> = decoded
            .attachments
            .iter()
            .map(|a| a.bytes.as_slice())
            .collect();
        assert_eq!(bodies, vec![b"a".as_slice(), b"b".as_slice()]);
    }

    #[test]
    fn test_part_with_text_and_inline_data_feeds_both() {
        let mut part = Part::inline("image/webp", InlinePayload::Bytes(vec![1, 2, 3]));
        part.text = Some("caption".to_string());

        let decoded = decode(&response_with(vec![part])).unwrap();
        assert_eq!(decoded.attachments.len(), 1);
        assert_eq!(decoded.attachments[0].mime_type, "image/webp");
        assert_eq!(decoded.transcript, "caption");
    }

    #[test]
    fn test_empty_payload_is_skipped() {
        let response = response_with(vec![
            Part::inline("image/png", InlinePayload::Base64(String::new())),
            Part::inline("image/png", InlinePayload::Bytes(Vec::new())),
        ]);
        assert!(decode(&response).unwrap().attachments.is_empty());
    }

    #[test]
    fn test_null_and_missing_payloads_are_treated_as_empty() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "inlineData": { "mimeType": "image/png" } },
                        { "text": "kept" },
                        { "inlineData": { "mimeType": "image/png", "data": null } },
                        { "inlineData": null, "text": null }
                    ]
                }
            }]
        }))
        .unwrap();

        let decoded = decode(&response).unwrap();
        assert!(decoded.attachments.is_empty());
        assert_eq!(decoded.transcript, "kept");
    }

    #[test]
    fn test_null_parts_and_candidates_decode_to_empty() {
        for body in [
            serde_json::json!({ "candidates": null }),
            serde_json::json!({ "candidates": [{ "content": null }] }),
            serde_json::json!({ "candidates": [{ "content": { "parts": null } }] }),
        ] {
            let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
            assert_eq!(decode(&response).unwrap(), DecodedResponse::default());
        }
    }

    #[test]
    fn test_only_first_candidate_is_read() {
        let mut response = response_with(vec![Part::text("first")]);
        response.candidates.push(Candidate {
            content: Some(Content {
                role: None,
                parts: vec![
                    Part::text("second"),
                    Part::inline("image/png", InlinePayload::Bytes(vec![9])),
                ],
            }),
        });

        let decoded = decode(&response).unwrap();
        assert_eq!(decoded.transcript, "first");
        assert!(decoded.attachments.is_empty());
    }

    #[test]
    fn test_base64_and_raw_bytes_decode_identically() {
        let content = b"\x89PNG\r\n\x1a\n-image-body".to_vec();
        let from_b64 = payload_bytes(&b64(&content)).unwrap();
        let from_raw = payload_bytes(&InlinePayload::Bytes(content.clone())).unwrap();
        assert_eq!(from_b64, content);
        assert_eq!(from_raw, content);
    }

    #[test]
    fn test_base64_tolerates_missing_padding_and_line_breaks() {
        assert_eq!(
            payload_bytes(&InlinePayload::Base64("aGVsbG8".to_string())).unwrap(),
            b"hello"
        );
        assert_eq!(
            payload_bytes(&InlinePayload::Base64("aGVs\nbG8=\n".to_string())).unwrap(),
            b"hello"
        );
    }

    #[test]
    fn test_invalid_base64_is_reported() {
        let response = response_with(vec![Part::inline(
            "image/png",
            InlinePayload::Base64("!!!invalid-base64!!!".to_string()),
        )]);
        assert!(matches!(
            decode(&response).unwrap_err(),
            Error::InvalidPayload(_)
        ));
    }
}
