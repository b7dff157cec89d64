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

//! Handler implementations.

use crate::http1::{ HeadInfo, HttpHandler };
use crate::url::Url;

/// A parsed HTTP message.
#[derive(Clone,Debug,Default,PartialEq,Eq)]
pub struct Message {
    /// Body with any chunk framing removed.
    pub body: Vec<u8>,

    /// Indicates that the message has been parsed in full.
    pub complete: bool,

    /// Request target fragment.
    pub fragment: Option<Vec<u8>>,

    /// Headers in the order they were located.
    pub headers: Vec<(Vec<u8>, Vec<u8>)>,

    /// Indicates that the connection may be reused after this message.
    pub keep_alive: bool,

    /// Request method.
    pub method: Option<Vec<u8>>,

    /// Request target path.
    pub path: Option<Vec<u8>>,

    /// Request target query.
    pub query: Option<Vec<u8>>,

    /// Response reason phrase.
    pub reason: Vec<u8>,

    /// Response status code.
    pub status_code: Option<u16>,

    /// Trailers in the order they were located.
    pub trailers: Vec<(Vec<u8>, Vec<u8>)>,

    /// Indicates that the connection switches protocols after this message.
    pub upgrade: bool,

    /// Request target.
    pub url: Vec<u8>,

    /// HTTP version as `(major, minor)`.
    pub version: (u8, u8),
}

impl Message {
    /// Retrieve the first header value named `name`, compared case-insensitively.
    ///
    /// Repeated fields such as `Set-Cookie` are available through
    /// [`headers_named()`](#method.headers_named).
    pub fn header(&self, name: &[u8]) -> Option<&[u8]> {
        find(&self.headers, name)
    }

    /// Retrieve every header value named `name` in the order received.
    pub fn headers_named<'a>(&'a self, name: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
        self.headers.iter()
                    .filter(move |(field, _)| field.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value.as_slice())
    }

    /// Indicates that the message is a request.
    pub fn is_request(&self) -> bool {
        self.method.is_some()
    }

    /// Retrieve the first trailer value named `name`, compared case-insensitively.
    pub fn trailer(&self, name: &[u8]) -> Option<&[u8]> {
        find(&self.trailers, name)
    }
}

fn find<'a>(fields: &'a [(Vec<u8>, Vec<u8>)], name: &[u8]) -> Option<&'a [u8]> {
    fields.iter()
          .find(|(field, _)| field.eq_ignore_ascii_case(name))
          .map(|(_, value)| value.as_slice())
}

// -------------------------------------------------------------------------------------------------

/// `MessageHandler` collects every message it is fed into a [`Message`](struct.Message.html).
///
/// # Examples
///
/// ```
/// use http_feed::handler::MessageHandler;
/// use http_feed::http1::{ Parser, ParserType };
///
/// let mut handler = MessageHandler::new();
/// let mut parser  = Parser::new(ParserType::Both);
///
/// parser.resume(&mut handler, b"GET /a?b=c HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
///
/// let message = &handler.messages()[0];
///
/// assert_eq!(message.path.as_deref(), Some(&b"/a"[..]));
/// assert_eq!(message.header(b"host"), Some(&b"example.com"[..]));
/// assert!(message.complete);
/// ```
#[derive(Debug,Default)]
pub struct MessageHandler {
    messages:  Vec<Message>,
    skip_body: bool,
}

impl MessageHandler {
    /// Create a new `MessageHandler`.
    pub fn new() -> MessageHandler {
        MessageHandler::default()
    }

    /// Retrieve the messages collected so far.
    ///
    /// The last message may still be incomplete.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Declare that responses carry no body, such as the response to a `HEAD` request.
    pub fn set_skip_body(&mut self, skip_body: bool) {
        self.skip_body = skip_body;
    }

    /// Remove and retrieve the messages collected so far.
    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    fn current(&mut self) -> &mut Message {
        if self.messages.is_empty() {
            self.messages.push(Message::default());
        }

        let index = self.messages.len() - 1;

        &mut self.messages[index]
    }
}

impl HttpHandler for MessageHandler {
    fn on_body(&mut self, data: &[u8]) -> bool {
        self.current().body.extend_from_slice(data);
        true
    }

    fn on_header(&mut self, name: &[u8], value: &[u8]) -> bool {
        self.current().headers.push((name.to_vec(), value.to_vec()));
        true
    }

    fn on_headers_finished(&mut self, head: &HeadInfo) -> bool {
        let message = self.current();

        message.keep_alive = head.keep_alive;
        message.upgrade    = head.upgrade;
        true
    }

    fn on_message_begin(&mut self) -> bool {
        self.messages.push(Message::default());
        true
    }

    fn on_message_finished(&mut self) -> bool {
        self.current().complete = true;
        true
    }

    fn on_method(&mut self, method: &[u8]) -> bool {
        self.current().method = Some(method.to_vec());
        true
    }

    fn on_status(&mut self, status: &[u8]) -> bool {
        self.current().reason = status.to_vec();
        true
    }

    fn on_status_code(&mut self, code: u16) -> bool {
        self.current().status_code = Some(code);
        true
    }

    fn on_trailer(&mut self, name: &[u8], value: &[u8]) -> bool {
        self.current().trailers.push((name.to_vec(), value.to_vec()));
        true
    }

    fn on_url(&mut self, url: &Url) -> bool {
        let message = self.current();

        message.url      = url.as_bytes().to_vec();
        message.path     = url.path().map(<[u8]>::to_vec);
        message.query    = url.query().map(<[u8]>::to_vec);
        message.fragment = url.fragment().map(<[u8]>::to_vec);
        true
    }

    fn on_version(&mut self, major: u8, minor: u8) -> bool {
        self.current().version = (major, minor);
        true
    }

    fn skip_body(&mut self) -> bool {
        self.skip_body
    }
}
