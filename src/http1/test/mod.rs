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

use crate::fsm::Success;
use crate::http1::{ HeadInfo, HttpHandler, Parser, ParserError, ParserState, ParserType };
use crate::url::Url;

macro_rules! http1_setup {
    () => (
        http1_setup!(ParserType::Both)
    );

    ($parser_type:expr) => (
        (Parser::new($parser_type), DebugHandler::new())
    );
}

mod framing;
mod limits;
mod pause;

fn assert_callback<T: HttpHandler>(
    parser:  &mut Parser,
    handler: &mut T,
    stream:  &[u8],
    state:   ParserState,
    length:  usize
) {
    match parser.resume(handler, stream) {
        Ok(Success::Callback(length_)) => {
            assert_eq!(length, length_);
            assert_eq!(state, parser.state());
        },
        other => panic!("assert_callback() Ok() match failed: {:?}", other)
    }
}

fn assert_eos<T: HttpHandler>(
    parser:  &mut Parser,
    handler: &mut T,
    stream:  &[u8],
    state:   ParserState
) {
    match parser.resume(handler, stream) {
        Ok(Success::Eos(length)) => {
            assert_eq!(stream.len(), length);
            assert_eq!(state, parser.state());
        },
        other => panic!("assert_eos() Ok() match failed: {:?}", other)
    }
}

fn assert_error<T: HttpHandler>(
    parser:  &mut Parser,
    handler: &mut T,
    stream:  &[u8],
    error:   ParserError
) {
    match parser.resume(handler, stream) {
        Err(error_) => {
            assert_eq!(error, error_);
            assert_eq!(ParserState::Dead, parser.state());
            assert_eq!(Some(error), parser.error());
        },
        other => panic!("assert_error() Err() match failed: {:?}", other)
    }
}

fn assert_upgrade<T: HttpHandler>(
    parser:  &mut Parser,
    handler: &mut T,
    stream:  &[u8],
    length:  usize
) {
    match parser.resume(handler, stream) {
        Ok(Success::Upgrade(length_)) => {
            assert_eq!(length, length_);
            assert_eq!(ParserState::Upgraded, parser.state());
        },
        other => panic!("assert_upgrade() Ok() match failed: {:?}", other)
    }
}

/// Feed `stream` one byte at a time.
fn iter_assert_eos<T: HttpHandler>(
    parser:  &mut Parser,
    handler: &mut T,
    stream:  &[u8]
) {
    for byte in stream.iter() {
        match parser.resume(handler, &[*byte]) {
            Ok(Success::Eos(length)) => {
                assert_eq!(length, 1);
            },
            other => panic!("iter_assert_eos() Success::Eos match failed: {:?}", other)
        }
    }
}

/// `DebugHandler` records every callback of the most recent message.
#[derive(Default)]
pub struct DebugHandler {
    /// Body.
    pub body: Vec<u8>,

    /// Chunk lengths in the order they were located.
    pub chunk_lengths: Vec<u64>,

    /// Head details.
    pub head: Option<HeadInfo>,

    /// Headers.
    pub headers: Vec<(Vec<u8>, Vec<u8>)>,

    /// Amount of messages that have begun.
    pub message_begin: usize,

    /// Amount of messages that have finished.
    pub message_finished: usize,

    /// Request method.
    pub method: Vec<u8>,

    /// Indicates that response bodies are skipped.
    pub skip_body: bool,

    /// Response status.
    pub status: Vec<u8>,

    /// Response status code.
    pub status_code: u16,

    /// Trailers.
    pub trailers: Vec<(Vec<u8>, Vec<u8>)>,

    /// Request URL.
    pub url: Vec<u8>,

    /// Request URL fragment.
    pub url_fragment: Vec<u8>,

    /// Request URL path.
    pub url_path: Vec<u8>,

    /// Request URL query.
    pub url_query: Vec<u8>,

    /// HTTP major version.
    pub version_major: u8,

    /// HTTP minor version.
    pub version_minor: u8
}

impl DebugHandler {
    /// Create a new `DebugHandler`.
    pub fn new() -> DebugHandler {
        DebugHandler::default()
    }

    /// Retrieve the value of the first header named `name`.
    pub fn header(&self, name: &[u8]) -> Option<&[u8]> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_slice())
    }
}

impl HttpHandler for DebugHandler {
    fn on_body(&mut self, data: &[u8]) -> bool {
        self.body.extend_from_slice(data);
        true
    }

    fn on_chunk_length(&mut self, length: u64) -> bool {
        self.chunk_lengths.push(length);
        true
    }

    fn on_header(&mut self, name: &[u8], value: &[u8]) -> bool {
        self.headers.push((name.to_vec(), value.to_vec()));
        true
    }

    fn on_headers_finished(&mut self, head: &HeadInfo) -> bool {
        self.head = Some(*head);
        true
    }

    fn on_message_begin(&mut self) -> bool {
        self.message_begin += 1;
        true
    }

    fn on_message_finished(&mut self) -> bool {
        self.message_finished += 1;
        true
    }

    fn on_method(&mut self, method: &[u8]) -> bool {
        self.method = method.to_vec();
        true
    }

    fn on_status(&mut self, status: &[u8]) -> bool {
        self.status = status.to_vec();
        true
    }

    fn on_status_code(&mut self, code: u16) -> bool {
        self.status_code = code;
        true
    }

    fn on_trailer(&mut self, name: &[u8], value: &[u8]) -> bool {
        self.trailers.push((name.to_vec(), value.to_vec()));
        true
    }

    fn on_url(&mut self, url: &Url) -> bool {
        self.url          = url.as_bytes().to_vec();
        self.url_path     = url.path().unwrap_or_default().to_vec();
        self.url_query    = url.query().unwrap_or_default().to_vec();
        self.url_fragment = url.fragment().unwrap_or_default().to_vec();
        true
    }

    fn on_version(&mut self, major: u8, minor: u8) -> bool {
        self.version_major = major;
        self.version_minor = minor;
        true
    }

    fn skip_body(&mut self) -> bool {
        self.skip_body
    }
}
