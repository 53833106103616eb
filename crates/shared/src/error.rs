use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),
}

/// Error body in the `{"detail": ...}` shape the employee backend answers with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub detail: ErrorDetail,
}

impl ApiError {
    pub fn message(&self) -> String {
        match &self.detail {
            ErrorDetail::Message(message) => message.clone(),
            ErrorDetail::Validation(issues) => issues
                .iter()
                .map(|issue| issue.msg.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Human-readable detail for a failed response body, if there is any.
pub fn error_detail_from_body(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<ApiError>(body) {
        Ok(api_err) => Some(api_err.message()),
        Err(_) => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_detail_string() {
        assert_eq!(
            error_detail_from_body(r#"{"detail":"employee not found."}"#).as_deref(),
            Some("employee not found.")
        );
    }

    #[test]
    fn joins_validation_messages() {
        let body = r#"{"detail":[
            {"loc":["body","emp_name"],"msg":"String should have at least 3 characters","type":"string_too_short"},
            {"loc":["body","email"],"msg":"Field required","type":"missing"}
        ]}"#;
        assert_eq!(
            error_detail_from_body(body).as_deref(),
            Some("String should have at least 3 characters; Field required")
        );
    }

    #[test]
    fn falls_back_to_raw_text() {
        assert_eq!(
            error_detail_from_body("  Internal Server Error\n").as_deref(),
            Some("Internal Server Error")
        );
        assert_eq!(error_detail_from_body("   "), None);
    }
}
