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

//! HTTP 1.x handler trait and head details.

use crate::url::Url;

/// Body framing, decided once the header section has been parsed.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyFraming {
    /// No body.
    None,

    /// Body of the given length.
    Length(u64),

    /// Chunked transfer encoding.
    Chunked,

    /// Body ends when the connection closes.
    UntilClose,
}

/// Head details passed to
/// [`HttpHandler::on_headers_finished()`](trait.HttpHandler.html#method.on_headers_finished).
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadInfo {
    /// Body framing.
    pub framing: BodyFraming,

    /// Indicates that the connection may be reused once the message is complete.
    pub keep_alive: bool,

    /// Indicates that the connection switches protocols after this message.
    pub upgrade: bool,
}

/// Type that handles HTTP/1.1 parser events.
///
/// Every callback has a default implementation that does nothing and returns `true`, so an
/// implementation only overrides the events it cares about.
#[allow(unused_variables)]
pub trait HttpHandler {
    /// Callback that is executed when body data has been located.
    ///
    /// This may be executed multiple times in order to supply the entire body. Chunk framing has
    /// already been removed.
    ///
    /// **Returns:**
    ///
    /// `true` when parsing should continue, `false` to exit the parser function prematurely with
    /// [`Success::Callback`](../fsm/enum.Success.html#variant.Callback).
    ///
    /// **Called From:**
    ///
    /// [`Parser::resume()`](struct.Parser.html#method.resume)
    fn on_body(&mut self, data: &[u8]) -> bool {
        true
    }

    /// Callback that is executed when a chunk length has been located.
    ///
    /// A zero length marks the last chunk. Trailers follow.
    ///
    /// **Returns:**
    ///
    /// `true` when parsing should continue, `false` to exit the parser function prematurely with
    /// [`Success::Callback`](../fsm/enum.Success.html#variant.Callback).
    fn on_chunk_length(&mut self, length: u64) -> bool {
        true
    }

    /// Callback that is executed when a header has been located.
    ///
    /// The name keeps its original case. Folded lines have been merged into the value with a
    /// single space, and surrounding white space is removed.
    ///
    /// **Returns:**
    ///
    /// `true` when parsing should continue, `false` to exit the parser function prematurely with
    /// [`Success::Callback`](../fsm/enum.Success.html#variant.Callback).
    fn on_header(&mut self, name: &[u8], value: &[u8]) -> bool {
        true
    }

    /// Callback that is executed when header parsing has completed.
    ///
    /// **Returns:**
    ///
    /// `true` when parsing should continue, `false` to exit the parser function prematurely with
    /// [`Success::Callback`](../fsm/enum.Success.html#variant.Callback).
    fn on_headers_finished(&mut self, head: &HeadInfo) -> bool {
        true
    }

    /// Callback that is executed when a new message begins.
    fn on_message_begin(&mut self) -> bool {
        true
    }

    /// Callback that is executed when a message has been completely parsed.
    ///
    /// This is only executed for messages whose framing has been fully satisfied.
    fn on_message_finished(&mut self) -> bool {
        true
    }

    /// Callback that is executed when a request method has been located.
    fn on_method(&mut self, method: &[u8]) -> bool {
        true
    }

    /// Callback that is executed when a response status has been located.
    ///
    /// The status may be empty.
    fn on_status(&mut self, status: &[u8]) -> bool {
        true
    }

    /// Callback that is executed when a response status code has been located.
    fn on_status_code(&mut self, code: u16) -> bool {
        true
    }

    /// Callback that is executed when a trailer has been located.
    ///
    /// Trailers never influence message framing.
    fn on_trailer(&mut self, name: &[u8], value: &[u8]) -> bool {
        true
    }

    /// Callback that is executed when a request target has been located.
    ///
    /// The target is parsed into its components before this is executed.
    fn on_url(&mut self, url: &Url) -> bool {
        true
    }

    /// Callback that is executed when the HTTP version has been located.
    fn on_version(&mut self, major: u8, minor: u8) -> bool {
        true
    }

    /// Indicates that the current response has no body regardless of its headers.
    ///
    /// This is consulted for responses once the header section has been parsed, and should return
    /// `true` for responses to `HEAD` requests.
    fn skip_body(&mut self) -> bool {
        false
    }
}
