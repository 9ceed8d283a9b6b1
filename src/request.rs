//! Request builder with defaults, sent through a caller-supplied transport.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::form_urlencoded;

use crate::error::RequestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
        };
        f.write_str(name)
    }
}

/// Expected response format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    Json,
    Html,
    Text,
    Xml,
    Script,
}

/// Optional settings for [`request`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    /// Explicit method. When unset it is inferred from the payload.
    pub method: Option<Method>,
    pub data_type: DataType,
    /// Payload object, URL-encoded with [`param`]
    pub data: Option<Value>,
    /// Already serialized form contents, sent before `data`
    pub forms: Vec<String>,
}

impl RequestOptions {
    pub fn with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    fn has_payload(&self) -> bool {
        !matches!(self.data, None | Some(Value::Null)) || !self.forms.is_empty()
    }
}

/// A fully resolved request, handed to a [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub url: String,
    pub method: Method,
    pub data_type: DataType,
    /// URL-encoded body, `None` for requests without payload or for GET
    pub body: Option<String>,
}

/// Whatever actually performs requests
pub trait Transport {
    type Output;

    fn send(&self, request: Request) -> Self::Output;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Output = T::Output;

    fn send(&self, request: Request) -> Self::Output {
        (**self).send(request)
    }
}

/// Build a [`Request`] from `url` and `options` without sending it.
///
/// The method defaults to GET, or POST when there is a payload and no
/// method was given. A GET payload goes to the query string.
pub fn build_request(url: &str, options: RequestOptions) -> Result<Request, RequestError> {
    if url.trim().is_empty() {
        return Err(RequestError::MissingUrl);
    }

    let method = options.method.unwrap_or(if options.has_payload() {
        Method::Post
    } else {
        Method::Get
    });

    let data = options.data.as_ref().map(param).unwrap_or_default();
    let body = options
        .forms
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(data.as_str()))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("&");

    let mut url = url.to_string();
    let body = match (method, body.is_empty()) {
        (_, true) => None,
        (Method::Get | Method::Head, false) => {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&body);
            None
        }
        (_, false) => Some(body),
    };

    log::debug!("request: {} {} (body: {} bytes)", method, url, body.as_ref().map_or(0, String::len));

    Ok(Request {
        url,
        method,
        data_type: options.data_type,
        body,
    })
}

/// Build a request and send it through `transport`.
pub fn request<T: Transport>(
    transport: &T,
    url: &str,
    options: RequestOptions,
) -> Result<T::Output, RequestError> {
    let request = build_request(url, options)?;
    Ok(transport.send(request))
}

/// URL-encode a JSON object: nested objects as `a[b]=c`, arrays as `a[]=1`.
///
/// Anything other than an object encodes to an empty string.
pub fn param(value: &Value) -> String {
    let Value::Object(map) = value else {
        return String::new();
    };

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in map {
        append_param(&mut serializer, key, value);
    }
    serializer.finish()
}

fn append_param(serializer: &mut form_urlencoded::Serializer<'_, String>, prefix: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, value) in map {
                append_param(serializer, &format!("{prefix}[{key}]"), value);
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if item.is_object() || item.is_array() {
                    append_param(serializer, &format!("{prefix}[{i}]"), item);
                } else {
                    append_param(serializer, &format!("{prefix}[]"), item);
                }
            }
        }
        Value::Null => {
            serializer.append_pair(prefix, "");
        }
        Value::String(s) => {
            serializer.append_pair(prefix, s);
        }
        other => {
            serializer.append_pair(prefix, &other.to_string());
        }
    }
}
