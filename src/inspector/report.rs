/// Human-readable rendering of payloads and failures
use super::payload::{display_string, truncate_chars, Payload};
use crate::constants::{PREVIEW_CHAR_LIMIT, WHIRLPOOLS_KEY};
use crate::errors::InspectorError;
use serde_json::Value;
use std::io::{self, Write};

/// Write the shape summary for a decoded payload
///
/// With `pool` set, the matching whirlpool entry (or a not-found notice)
/// follows the summary.
pub fn write_summary<W: Write>(out: &mut W, payload: &Payload, pool: Option<&str>) -> io::Result<()> {
    writeln!(out, "Type of the response: {}", payload.type_name())?;

    match payload {
        Payload::Object(map) => {
            writeln!(out, "The response is a dictionary. Here are the keys:")?;
            for key in map.keys() {
                writeln!(out, "- {}", key)?;
            }

            match payload.first_whirlpool() {
                Some(first) => {
                    writeln!(out, "\nFirst object in the '{}' list:", WHIRLPOOLS_KEY)?;
                    write_pretty(out, first)?;
                }
                None => writeln!(out, "\nNo '{}' list found or it's empty.", WHIRLPOOLS_KEY)?,
            }
        }
        Payload::Array(_) => match payload.first_item() {
            Some(first) => {
                writeln!(out, "The response is a list. Here's the first item:")?;
                write_pretty(out, first)?;
            }
            None => writeln!(out, "The response is an empty list.")?,
        },
        Payload::Other(value) => {
            writeln!(out, "The response is of an unexpected type: {}", payload.type_name())?;
            writeln!(out, "Here's a string representation of the data:")?;
            writeln!(out, "{}", truncate_chars(&display_string(value), PREVIEW_CHAR_LIMIT))?;
        }
    }

    if let Some(address) = pool {
        match payload.find_whirlpool(address) {
            Some(entry) => {
                writeln!(out, "\nWhirlpool {}:", address)?;
                write_pretty(out, entry)?;
            }
            None => writeln!(
                out,
                "\nWhirlpool {} not found in the '{}' list.",
                address, WHIRLPOOLS_KEY
            )?,
        }
    }

    Ok(())
}

/// Write the message for a failed inspection
pub fn write_failure<W: Write>(out: &mut W, err: &InspectorError) -> io::Result<()> {
    match err {
        InspectorError::Request(detail) => {
            writeln!(out, "An error occurred while making the request: {}", detail)
        }
        InspectorError::Parse { detail, raw_body } => {
            writeln!(out, "An error occurred while parsing the JSON response: {}", detail)?;
            writeln!(out, "Here's the raw response content:")?;
            writeln!(out, "{}", truncate_chars(raw_body, PREVIEW_CHAR_LIMIT))
        }
        InspectorError::Generic(detail) => writeln!(out, "An unexpected error occurred: {}", detail),
    }
}

/// Pretty-print a value with 2-space indentation
fn write_pretty<W: Write>(out: &mut W, value: &Value) -> io::Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
    writeln!(out, "{}", rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(payload: &Payload, pool: Option<&str>) -> String {
        let mut out = Vec::new();
        write_summary(&mut out, payload, pool).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn render_failure(err: &InspectorError) -> String {
        let mut out = Vec::new();
        write_failure(&mut out, err).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_object_with_whirlpools() {
        let payload = Payload::decode(
            r#"{"whirlpools": [{"address": "A", "tokenA": {"symbol": "SOL"}}, {"address": "B"}], "hasMore": false}"#,
        )
        .unwrap();

        let expected = "Type of the response: object\n\
The response is a dictionary. Here are the keys:\n\
- whirlpools\n\
- hasMore\n\
\n\
First object in the 'whirlpools' list:\n\
{\n  \"address\": \"A\",\n  \"tokenA\": {\n    \"symbol\": \"SOL\"\n  }\n}\n";
        assert_eq!(render(&payload, None), expected);
    }

    #[test]
    fn test_object_without_usable_whirlpools() {
        for body in [r#"{"pools": [1]}"#, r#"{"whirlpools": []}"#, r#"{"whirlpools": "x"}"#] {
            let output = render(&Payload::decode(body).unwrap(), None);
            assert!(output.contains("\nNo 'whirlpools' list found or it's empty.\n"), "{}", output);
            assert!(!output.contains("First object"), "{}", output);
            assert!(!output.contains('{'), "{}", output);
        }
    }

    #[test]
    fn test_array_prints_only_first_item() {
        let payload = Payload::classify(json!([{"id": 1}, {"id": 2}, {"id": 3}]));
        let output = render(&payload, None);

        assert_eq!(
            output,
            "Type of the response: array\nThe response is a list. Here's the first item:\n{\n  \"id\": 1\n}\n"
        );
    }

    #[test]
    fn test_empty_array() {
        let output = render(&Payload::classify(json!([])), None);
        assert_eq!(output, "Type of the response: array\nThe response is an empty list.\n");
    }

    #[test]
    fn test_scalar_payload() {
        let output = render(&Payload::classify(json!(42)), None);
        assert_eq!(
            output,
            "Type of the response: number\n\
The response is of an unexpected type: number\n\
Here's a string representation of the data:\n\
42\n"
        );
    }

    #[test]
    fn test_long_scalar_is_truncated() {
        let long = "x".repeat(PREVIEW_CHAR_LIMIT + 250);
        let output = render(&Payload::classify(Value::String(long)), None);
        let last_line = output.lines().last().unwrap();
        assert_eq!(last_line.chars().count(), PREVIEW_CHAR_LIMIT);
    }

    #[test]
    fn test_large_integers_print_unchanged() {
        let payload = Payload::decode(
            r#"{"whirlpools": [{"address": "A", "liquidity": 123456789012345678901234}]}"#,
        )
        .unwrap();
        let output = render(&payload, None);
        assert!(output.contains("\"liquidity\": 123456789012345678901234\n"), "{}", output);

        let scalar = render(&Payload::decode("12345678901234567890123").unwrap(), None);
        assert!(scalar.ends_with("\n12345678901234567890123\n"), "{}", scalar);
    }

    #[test]
    fn test_pool_lookup() {
        let payload = Payload::classify(json!({"whirlpools": [{"address": "A"}, {"address": "B"}]}));

        let found = render(&payload, Some("B"));
        assert!(found.ends_with("\nWhirlpool B:\n{\n  \"address\": \"B\"\n}\n"), "{}", found);

        let missing = render(&payload, Some("Z"));
        assert!(missing.ends_with("\nWhirlpool Z not found in the 'whirlpools' list.\n"), "{}", missing);
    }

    #[test]
    fn test_request_failure_message() {
        let output = render_failure(&InspectorError::Request("connection refused".to_string()));
        assert_eq!(output, "An error occurred while making the request: connection refused\n");
    }

    #[test]
    fn test_parse_failure_message_truncates_body() {
        let raw_body = "<html>".repeat(400);
        let err = InspectorError::Parse {
            detail: "expected value at line 1 column 1".to_string(),
            raw_body: raw_body.clone(),
        };
        let output = render_failure(&err);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            "An error occurred while parsing the JSON response: expected value at line 1 column 1"
        );
        assert_eq!(lines[1], "Here's the raw response content:");
        assert_eq!(lines[2], &raw_body[..PREVIEW_CHAR_LIMIT]);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_generic_failure_message() {
        let output = render_failure(&InspectorError::Generic("broken pipe".to_string()));
        assert_eq!(output, "An unexpected error occurred: broken pipe\n");
    }
}
