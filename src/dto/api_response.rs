use serde::{Deserialize, Serialize};

/// Detalle de un error dentro de `ApiResponse`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

impl ErrorDto {
    pub fn of(message: impl Into<String>, parameter: Option<String>) -> Self {
        Self {
            message: Some(message.into()),
            parameter,
        }
    }
}

/// Cuerpo uniforme de respuesta de error. Los campos `None` no se serializan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDto>>,
}

impl ApiResponse {
    pub fn error(
        code: u16,
        message: impl Into<String>,
        identifier: impl Into<String>,
        timestamp: impl Into<String>,
        errors: Vec<ErrorDto>,
    ) -> Self {
        Self {
            code,
            message: Some(message.into()),
            identifier: Some(identifier.into()),
            timestamp: Some(timestamp.into()),
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_are_omitted() {
        let response = ApiResponse {
            code: 500,
            message: Some("Internal server error".to_string()),
            identifier: None,
            timestamp: None,
            errors: None,
        };

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body, json!({ "code": 500, "message": "Internal server error" }));
    }

    #[test]
    fn test_error_detail_shape() {
        let response = ApiResponse::error(
            400,
            "Bad request",
            "abc-123",
            "2025-01-01T00:00:00.000Z",
            vec![ErrorDto::of("name too short", Some("name".to_string()))],
        );

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["identifier"], "abc-123");
        assert_eq!(body["errors"][0]["message"], "name too short");
        assert_eq!(body["errors"][0]["parameter"], "name");
    }
}
