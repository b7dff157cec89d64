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

//! HTTP 1.x parser states.

use crate::fsm::ParserValue;
use crate::http1::http_handler::HttpHandler;
use crate::http1::parser::Parser;
use crate::http1::parser_error::ParserError;
use byte_slice::ByteStream;

/// Parser states.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
#[repr(u8)]
pub enum ParserState {
    /// An error was returned from a call to `Parser::resume()`.
    Dead,

    /// Stripping empty lines before a message.
    StripDetect,

    /// Beginning a message.
    MessageBegin,

    /// Detect request/response byte 1.
    Detect1,

    /// Detect request/response byte 2.
    Detect2,

    /// Detect request/response byte 3.
    Detect3,

    /// Detect request/response byte 4.
    Detect4,

    /// Detect request/response byte 5.
    Detect5,

    // ---------------------------------------------------------------------------------------------
    // REQUEST
    // ---------------------------------------------------------------------------------------------

    /// Parsing request method.
    RequestMethod,

    /// Parsing request URL.
    RequestUrl,

    /// Parsing request HTTP version byte 1.
    RequestHttp1,

    /// Parsing request HTTP version byte 2.
    RequestHttp2,

    /// Parsing request HTTP version byte 3.
    RequestHttp3,

    /// Parsing request HTTP version byte 4.
    RequestHttp4,

    /// Parsing request HTTP version byte 5.
    RequestHttp5,

    /// Parsing request HTTP major version.
    RequestVersionMajor,

    /// Parsing request HTTP version period.
    RequestVersionPeriod,

    /// Parsing request HTTP minor version.
    RequestVersionMinor,

    /// Parsing carriage return after request HTTP version.
    RequestVersionCr,

    // ---------------------------------------------------------------------------------------------
    // RESPONSE
    // ---------------------------------------------------------------------------------------------

    /// Parsing response HTTP version byte 1.
    ResponseHttp1,

    /// Parsing response HTTP version byte 2.
    ResponseHttp2,

    /// Parsing response HTTP version byte 3.
    ResponseHttp3,

    /// Parsing response HTTP version byte 4.
    ResponseHttp4,

    /// Parsing response HTTP version byte 5.
    ResponseHttp5,

    /// Parsing response HTTP major version.
    ResponseVersionMajor,

    /// Parsing response HTTP version period.
    ResponseVersionPeriod,

    /// Parsing response HTTP minor version.
    ResponseVersionMinor,

    /// Parsing space after response HTTP version.
    ResponseVersionSpace,

    /// Parsing response status code byte 1.
    ResponseStatusCode1,

    /// Parsing response status code byte 2.
    ResponseStatusCode2,

    /// Parsing response status code byte 3.
    ResponseStatusCode3,

    /// Parsing byte following the response status code.
    ResponseStatusCodeEnd,

    /// Parsing response status.
    ResponseStatus,

    /// Parsing line feed after the initial line.
    InitialLf,

    // ---------------------------------------------------------------------------------------------
    // HEADERS
    // ---------------------------------------------------------------------------------------------

    /// Parsing the first byte of a header line.
    HeaderLineStart,

    /// Parsing header name.
    HeaderName,

    /// Stripping linear white space before header value.
    StripHeaderValue,

    /// Parsing header value.
    HeaderValue,

    /// Stripping linear white space of a folded header line.
    HeaderFold,

    /// Parsing line feed after header value.
    HeaderLf,

    /// Parsing line feed that ends the header section.
    HeadersLf,

    /// Header section has been parsed.
    HeadersFinished,

    // ---------------------------------------------------------------------------------------------
    // BODY
    // ---------------------------------------------------------------------------------------------

    /// Parsing body of a known length.
    BodyIdentity,

    /// Parsing body until the connection closes.
    BodyUntilClose,

    // ---------------------------------------------------------------------------------------------
    // CHUNKED
    // ---------------------------------------------------------------------------------------------

    /// Parsing chunk length byte 1.
    ChunkLength1,

    /// Parsing chunk length byte 2+.
    ChunkLength2,

    /// Stripping linear white space after chunk length.
    ChunkLengthSpace,

    /// Skipping chunk extensions.
    ChunkExtension,

    /// Parsing line feed after chunk length.
    ChunkLengthLf,

    /// Parsing chunk data.
    ChunkData,

    /// Parsing carriage return after chunk data.
    ChunkDataCr,

    /// Parsing line feed after chunk data.
    ChunkDataLf,

    // ---------------------------------------------------------------------------------------------
    // FINISHED
    // ---------------------------------------------------------------------------------------------

    /// Message has been parsed.
    MessageFinished,

    /// Connection switched protocols. Remaining bytes belong to the new protocol.
    Upgraded,

    /// End of input has been signaled.
    Finished,
}

impl ParserState {
    /// Indicates that this state parses the start line, a header line, or a trailer line.
    pub fn is_head(&self) -> bool {
        matches!(
            *self,
            ParserState::Detect1
            | ParserState::Detect2
            | ParserState::Detect3
            | ParserState::Detect4
            | ParserState::Detect5
            | ParserState::RequestMethod
            | ParserState::RequestUrl
            | ParserState::RequestHttp1
            | ParserState::RequestHttp2
            | ParserState::RequestHttp3
            | ParserState::RequestHttp4
            | ParserState::RequestHttp5
            | ParserState::RequestVersionMajor
            | ParserState::RequestVersionPeriod
            | ParserState::RequestVersionMinor
            | ParserState::RequestVersionCr
            | ParserState::ResponseHttp1
            | ParserState::ResponseHttp2
            | ParserState::ResponseHttp3
            | ParserState::ResponseHttp4
            | ParserState::ResponseHttp5
            | ParserState::ResponseVersionMajor
            | ParserState::ResponseVersionPeriod
            | ParserState::ResponseVersionMinor
            | ParserState::ResponseVersionSpace
            | ParserState::ResponseStatusCode1
            | ParserState::ResponseStatusCode2
            | ParserState::ResponseStatusCode3
            | ParserState::ResponseStatusCodeEnd
            | ParserState::ResponseStatus
            | ParserState::InitialLf
            | ParserState::HeaderLineStart
            | ParserState::HeaderName
            | ParserState::StripHeaderValue
            | ParserState::HeaderValue
            | ParserState::HeaderFold
            | ParserState::HeaderLf
            | ParserState::HeadersLf
        )
    }
}

/// Execute the state function of the current parser state.
#[inline]
pub(crate) fn dispatch<T: HttpHandler>(
    parser:  &mut Parser,
    handler: &mut T,
    context: &mut ByteStream
) -> Result<ParserValue, ParserError> {
    match parser.state() {
        ParserState::Dead                  => parser.dead(handler, context),
        ParserState::StripDetect           => parser.strip_detect(handler, context),
        ParserState::MessageBegin          => parser.message_begin(handler, context),
        ParserState::Detect1               => parser.detect1(handler, context),
        ParserState::Detect2               => parser.detect2(handler, context),
        ParserState::Detect3               => parser.detect3(handler, context),
        ParserState::Detect4               => parser.detect4(handler, context),
        ParserState::Detect5               => parser.detect5(handler, context),
        ParserState::RequestMethod         => parser.request_method(handler, context),
        ParserState::RequestUrl            => parser.request_url(handler, context),
        ParserState::RequestHttp1          => parser.request_http1(handler, context),
        ParserState::RequestHttp2          => parser.request_http2(handler, context),
        ParserState::RequestHttp3          => parser.request_http3(handler, context),
        ParserState::RequestHttp4          => parser.request_http4(handler, context),
        ParserState::RequestHttp5          => parser.request_http5(handler, context),
        ParserState::RequestVersionMajor   => parser.request_version_major(handler, context),
        ParserState::RequestVersionPeriod  => parser.request_version_period(handler, context),
        ParserState::RequestVersionMinor   => parser.request_version_minor(handler, context),
        ParserState::RequestVersionCr      => parser.request_version_cr(handler, context),
        ParserState::ResponseHttp1         => parser.response_http1(handler, context),
        ParserState::ResponseHttp2         => parser.response_http2(handler, context),
        ParserState::ResponseHttp3         => parser.response_http3(handler, context),
        ParserState::ResponseHttp4         => parser.response_http4(handler, context),
        ParserState::ResponseHttp5         => parser.response_http5(handler, context),
        ParserState::ResponseVersionMajor  => parser.response_version_major(handler, context),
        ParserState::ResponseVersionPeriod => parser.response_version_period(handler, context),
        ParserState::ResponseVersionMinor  => parser.response_version_minor(handler, context),
        ParserState::ResponseVersionSpace  => parser.response_version_space(handler, context),
        ParserState::ResponseStatusCode1   => parser.response_status_code1(handler, context),
        ParserState::ResponseStatusCode2   => parser.response_status_code2(handler, context),
        ParserState::ResponseStatusCode3   => parser.response_status_code3(handler, context),
        ParserState::ResponseStatusCodeEnd => parser.response_status_code_end(handler, context),
        ParserState::ResponseStatus        => parser.response_status(handler, context),
        ParserState::InitialLf             => parser.initial_lf(handler, context),
        ParserState::HeaderLineStart       => parser.header_line_start(handler, context),
        ParserState::HeaderName            => parser.header_name(handler, context),
        ParserState::StripHeaderValue      => parser.strip_header_value(handler, context),
        ParserState::HeaderValue           => parser.header_value(handler, context),
        ParserState::HeaderFold            => parser.header_fold(handler, context),
        ParserState::HeaderLf              => parser.header_lf(handler, context),
        ParserState::HeadersLf             => parser.headers_lf(handler, context),
        ParserState::HeadersFinished       => parser.headers_finished(handler, context),
        ParserState::BodyIdentity          => parser.body_identity(handler, context),
        ParserState::BodyUntilClose        => parser.body_until_close(handler, context),
        ParserState::ChunkLength1          => parser.chunk_length1(handler, context),
        ParserState::ChunkLength2          => parser.chunk_length2(handler, context),
        ParserState::ChunkLengthSpace      => parser.chunk_length_space(handler, context),
        ParserState::ChunkExtension        => parser.chunk_extension(handler, context),
        ParserState::ChunkLengthLf         => parser.chunk_length_lf(handler, context),
        ParserState::ChunkData             => parser.chunk_data(handler, context),
        ParserState::ChunkDataCr           => parser.chunk_data_cr(handler, context),
        ParserState::ChunkDataLf           => parser.chunk_data_lf(handler, context),
        ParserState::MessageFinished       => parser.message_finished(handler, context),
        ParserState::Upgraded              => parser.upgraded(handler, context),
        ParserState::Finished              => parser.finished(handler, context),
    }
}
