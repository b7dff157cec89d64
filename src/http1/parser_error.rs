// +-----------------------------------------------------------------------------------------------+
// | Copyright 2016 Sean Kerr                                                                      |
// |                                                                                               |
// | Licensed under the Apache License, Version 2.0 (the "License");                               |
// | you may not use this file except in compliance with the License.                              |
// | You may obtain a copy of the License at                                                       |
// |                                                                                               |
// |  http://www.apache.org/licenses/LICENSE-2.0                                                   |
// |                                                                                               |
// | Unless required by applicable law or agreed to in writing, software                           |
// | distributed under the License is distributed on an "AS IS" BASIS,                             |
// | WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.                      |
// | See the License for the specific language governing permissions and                           |
// | limitations under the License.                                                                |
// +-----------------------------------------------------------------------------------------------+
// | Author: Sean Kerr <sean@metatomic.io>                                                         |
// +-----------------------------------------------------------------------------------------------+

//! HTTP 1.x parser errors.

use crate::url::UrlError;

/// Error categories.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum ErrorKind {
    /// Malformed token or line.
    Syntax,

    /// Conflicting message length signals.
    Framing,

    /// A configured bound was breached.
    Limit,

    /// The parser cannot continue in its current state.
    State,
}

/// Parser errors.
#[derive(Clone,Copy,Debug,PartialEq,Eq,thiserror::Error)]
pub enum ParserError {
    /// Both `Transfer-Encoding` and `Content-Length`, or conflicting `Content-Length` values.
    #[error("ambiguous message framing")]
    AmbiguousFraming,

    /// Invalid chunk data terminator on byte `u8`.
    #[error("invalid chunk data terminator on byte {0}")]
    ChunkData(u8),

    /// Invalid chunk extension on byte `u8`.
    #[error("invalid chunk extension on byte {0}")]
    ChunkExtension(u8),

    /// Invalid chunk length on byte `u8`.
    #[error("invalid chunk length on byte {0}")]
    ChunkLength(u8),

    /// Chunk length overflow.
    #[error("chunk length overflow")]
    ChunkLengthOverflow,

    /// Invalid CRLF sequence on byte `u8`.
    #[error("invalid CRLF sequence on byte {0}")]
    CrlfSequence(u8),

    /// Parsing has failed.
    #[error("parsing has failed")]
    Dead,

    /// Request method is not a known method and extension methods are disabled.
    #[error("extension method not allowed")]
    ExtensionMethod,

    /// Invalid header name on byte `u8`.
    #[error("invalid header name on byte {0}")]
    HeaderName(u8),

    /// Header field, request target, or header section exceeds its configured size.
    #[error("header too large")]
    HeaderTooLarge,

    /// Invalid header value on byte `u8`.
    #[error("invalid header value on byte {0}")]
    HeaderValue(u8),

    /// Invalid `Content-Length` value.
    #[error("invalid content length")]
    InvalidContentLength,

    /// Invalid request method on byte `u8`.
    #[error("invalid method on byte {0}")]
    Method(u8),

    /// Invalid status on byte `u8`.
    #[error("invalid status on byte {0}")]
    Status(u8),

    /// Invalid status code on byte `u8`.
    #[error("invalid status code on byte {0}")]
    StatusCode(u8),

    /// Too many headers.
    #[error("too many headers")]
    TooManyHeaders,

    /// Request `Transfer-Encoding` does not end with `chunked`.
    #[error("request transfer encoding does not end with chunked")]
    TransferEncoding,

    /// Input ended in the middle of a message.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Invalid request target.
    #[error(transparent)]
    Url(#[from] UrlError),

    /// Invalid HTTP version on byte `u8`.
    #[error("invalid HTTP version on byte {0}")]
    Version(u8),
}

impl ParserError {
    /// Retrieve the error category.
    pub fn kind(&self) -> ErrorKind {
        match *self {
            ParserError::AmbiguousFraming
            | ParserError::TransferEncoding => ErrorKind::Framing,

            ParserError::ChunkLengthOverflow
            | ParserError::HeaderTooLarge
            | ParserError::TooManyHeaders => ErrorKind::Limit,

            ParserError::Dead
            | ParserError::UnexpectedEof => ErrorKind::State,

            _ => ErrorKind::Syntax
        }
    }
}
