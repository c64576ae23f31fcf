//! Interpretation of API responses: HTTP status first, then the result code
//! embedded in the body.

use crate::config::{http_status, messages};
use crate::error::{LawApiError, Result};
use crate::types::{ResultCode, StructuredNode};
use crate::xml::structure_xml;

const RESULT_CODE_PATH: [&str; 3] = ["DataRoot", "Result", "Code"];
const RESULT_MESSAGE_PATH: [&str; 3] = ["DataRoot", "Result", "Message"];

/// Classify an HTTP status before the body is read.
///
/// `200` and `300` both continue: the API reports ambiguous matches inside
/// the body rather than as a transport failure.
///
/// # Examples
/// ```
/// use elaws_client::response::interpret_status;
/// use elaws_client::ErrorKind;
///
/// assert!(interpret_status(300).is_ok());
/// assert_eq!(interpret_status(404).unwrap_err().kind(), ErrorKind::NotFound);
/// ```
pub fn interpret_status(status: u16) -> Result<()> {
    match status {
        http_status::OK | http_status::MULTIPLE_CHOICES => Ok(()),
        http_status::BAD_REQUEST => Err(LawApiError::BadRequest(messages::BAD_REQUEST.into())),
        http_status::NOT_FOUND => Err(LawApiError::NotFound(messages::NOT_FOUND.into())),
        http_status::NOT_ACCEPTABLE => {
            Err(LawApiError::NotAcceptable(messages::NOT_ACCEPTABLE.into()))
        }
        http_status::INTERNAL_SERVER_ERROR => {
            Err(LawApiError::ServerError(messages::SERVER_ERROR.into()))
        }
        _ => Err(LawApiError::Network(messages::NETWORK_ERROR.into())),
    }
}

/// Read the embedded result code, if the body has one.
pub fn result_code(node: &StructuredNode) -> Option<ResultCode> {
    node.get_path(&RESULT_CODE_PATH)
        .and_then(StructuredNode::as_text)
        .map(ResultCode::parse)
}

/// Fail with `ServerError` when the body carries the error result code.
///
/// The error uses `DataRoot/Result/Message` when it is non-empty text, and the
/// generic server-error message otherwise. A missing code is not an error.
pub fn interpret_result_code(node: &StructuredNode) -> Result<()> {
    match result_code(node) {
        Some(ResultCode::Error) => {
            let message = node
                .get_path(&RESULT_MESSAGE_PATH)
                .and_then(StructuredNode::as_text)
                .filter(|m| !m.is_empty())
                .unwrap_or(messages::SERVER_ERROR);
            tracing::warn!(detail = message, "API reported an error result code");
            Err(LawApiError::ServerError(message.to_string()))
        }
        Some(ResultCode::MultipleChoices) => {
            tracing::info!("{}", messages::MULTIPLE_CHOICES);
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Interpret an already-received response end to end.
///
/// Runs the status check, parses and folds the body, then checks the
/// embedded result code. The body is not touched when the status fails.
pub fn interpret_response(status: u16, body: &str) -> Result<StructuredNode> {
    interpret_status(status)?;
    let node = structure_xml(body)?;
    interpret_result_code(&node)?;
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn body(code: &str, message: &str) -> String {
        format!(
            "<DataRoot><Result><Code>{code}</Code><Message>{message}</Message></Result>\
             <ApplData><Category>1</Category></ApplData></DataRoot>"
        )
    }

    #[test]
    fn test_interpret_status_success() {
        assert!(interpret_status(200).is_ok());
        assert!(interpret_status(300).is_ok());
    }

    #[test]
    fn test_interpret_status_mapping() {
        let cases = [
            (400, ErrorKind::BadRequest),
            (404, ErrorKind::NotFound),
            (406, ErrorKind::NotAcceptable),
            (500, ErrorKind::ServerError),
            (201, ErrorKind::NetworkError),
            (301, ErrorKind::NetworkError),
            (403, ErrorKind::NetworkError),
            (502, ErrorKind::NetworkError),
            (503, ErrorKind::NetworkError),
        ];
        for (status, kind) in cases {
            assert_eq!(interpret_status(status).unwrap_err().kind(), kind, "{status}");
        }
    }

    #[test]
    fn test_interpret_status_messages() {
        assert_eq!(
            interpret_status(404).unwrap_err().to_string(),
            messages::NOT_FOUND
        );
        assert_eq!(
            interpret_status(418).unwrap_err().to_string(),
            messages::NETWORK_ERROR
        );
    }

    #[test]
    fn test_result_code() {
        let node = structure_xml(&body("2", "")).unwrap();
        assert_eq!(result_code(&node), Some(ResultCode::MultipleChoices));

        let node = structure_xml("<DataRoot><ApplData/></DataRoot>").unwrap();
        assert_eq!(result_code(&node), None);
    }

    #[test]
    fn test_result_code_error_uses_message() {
        let node = structure_xml(&body("1", "custom error")).unwrap();
        let err = interpret_result_code(&node).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServerError);
        assert_eq!(err.to_string(), "custom error");
    }

    #[test]
    fn test_result_code_error_with_empty_message() {
        let node = structure_xml(&body("1", "")).unwrap();
        let err = interpret_result_code(&node).unwrap_err();
        assert_eq!(err.to_string(), messages::SERVER_ERROR);
    }

    #[test]
    fn test_result_code_error_without_message_element() {
        let node =
            structure_xml("<DataRoot><Result><Code>1</Code></Result></DataRoot>").unwrap();
        let err = interpret_result_code(&node).unwrap_err();
        assert_eq!(err.to_string(), messages::SERVER_ERROR);
    }

    #[test]
    fn test_result_code_non_error_values_succeed() {
        for code in ["0", "2", "99"] {
            let node = structure_xml(&body(code, "")).unwrap();
            assert!(interpret_result_code(&node).is_ok(), "code {code}");
        }

        let node = structure_xml("<Other/>").unwrap();
        assert!(interpret_result_code(&node).is_ok());
    }

    #[test]
    fn test_interpret_response_success() {
        let node = interpret_response(200, &body("0", "")).unwrap();
        assert_eq!(
            node.get_path(&["DataRoot", "ApplData", "Category"])
                .and_then(StructuredNode::as_text),
            Some("1")
        );
    }

    #[test]
    fn test_interpret_response_status_checked_before_body() {
        // Malformed body is never parsed when the status already failed
        let err = interpret_response(404, "<not xml").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_interpret_response_malformed_body() {
        let err = interpret_response(200, "<DataRoot>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::XmlParseError);
    }

    #[test]
    fn test_interpret_response_embedded_error() {
        let err = interpret_response(200, &body("1", "custom error")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServerError);
        assert_eq!(err.to_string(), "custom error");
    }
}
