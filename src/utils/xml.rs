//! XML encoding for `?format=xml` responses
//!
//! Every serialized field becomes one child element of `<response>`,
//! absent optional fields are omitted.

use quick_xml::se::Serializer;
use serde::Serialize;

use crate::models::errors::{AppError, AppResult, ErrorCode};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Root element name used by every XML response
pub const XML_ROOT: &str = "response";

/// Serialize `value` as an indented XML document with a `<response>` root.
pub fn to_xml<T: Serialize>(value: &T) -> AppResult<String> {
    let mut body = String::new();
    let mut serializer = Serializer::with_root(&mut body, Some(XML_ROOT))
        .map_err(|e| AppError::with_source(ErrorCode::ApiInternalError, "XML root", e))?;
    serializer.indent(' ', 2);
    value
        .serialize(serializer)
        .map_err(|e| AppError::with_source(ErrorCode::ApiInternalError, "XML encode error", e))?;

    Ok(format!("{}\n{}", XML_DECLARATION, body))
}
