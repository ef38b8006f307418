use serde::Deserialize;

/// Envelope returned by every Bot API method.
#[derive(Clone, Debug, Deserialize)]
pub struct SendDocumentResponseDto {
    #[serde(default)]
    pub ok: bool,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_ok_is_false() {
        let dto: SendDocumentResponseDto = serde_json::from_str(r#"{"result": {}}"#).unwrap();
        assert!(!dto.ok);
    }

    #[test]
    fn parses_error_envelope() {
        let dto: SendDocumentResponseDto = serde_json::from_str(
            r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#,
        )
        .unwrap();
        assert!(!dto.ok);
        assert_eq!(dto.error_code, Some(400));
        assert_eq!(
            dto.description.as_deref(),
            Some("Bad Request: chat not found")
        );
    }
}
