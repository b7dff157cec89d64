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

//! HTTP 1.x parser.

use crate::byte::{ is_field_value, is_token };
use crate::fsm::{ ParserValue, Success };
use crate::http1::config::ParserConfig;
use crate::http1::http_handler::{ BodyFraming, HeadInfo, HttpHandler };
use crate::http1::method::Method;
use crate::http1::parser_error::ParserError;
use crate::http1::parser_state::{ dispatch, ParserState };
use crate::http1::parser_type::ParserType;
use byte_slice::ByteStream;
use crate::url::{ Url, UrlError, UrlFields, UrlParser };

use tracing::{ debug, trace };

// Flags that store message details gathered from the header section.
const F_CHUNKED:               u16 = 1;
const F_CONNECTION_CLOSE:      u16 = 1 << 1;
const F_CONNECTION_KEEP_ALIVE: u16 = 1 << 2;
const F_CONNECTION_UPGRADE:    u16 = 1 << 3;
const F_HEADER_PENDING:        u16 = 1 << 4;
const F_TRAILING:              u16 = 1 << 5;
const F_TRANSFER_ENCODING:     u16 = 1 << 6;
const F_UPGRADE:               u16 = 1 << 7;
const F_UPGRADE_HEADER:        u16 = 1 << 8;

/// Indicates that `$flag` is set.
macro_rules! has_flag {
    ($parser:expr, $flag:expr) => (
        ($parser.flags & $flag) == $flag
    );
}

/// Set `$flag`.
macro_rules! set_flag {
    ($parser:expr, $flag:expr) => ({
        $parser.flags |= $flag;
    });
}

/// Unset `$flag`.
macro_rules! unset_flag {
    ($parser:expr, $flag:expr) => ({
        $parser.flags &= !$flag;
    });
}

/// Match a single literal byte and transition to `$state`, or exit with `$error`.
macro_rules! literal {
    ($parser:expr, $context:expr, $byte:expr, $state:ident, $error:ident) => ({
        exit_if_eos!($parser, $context);
        bs_next!($context);

        if $context.byte == $byte {
            transition!($parser, $context, $state);
        }

        exit_error!($error, $context.byte);
    });
}

mod chunked;

// -------------------------------------------------------------------------------------------------

/// HTTP 1.x parser.
///
/// The parser is fed with [`resume()`](#method.resume) each time data arrives, and executes the
/// [`HttpHandler`](trait.HttpHandler.html) callbacks as soon as each piece of the message has been
/// located. Pipelined messages are parsed back to back without any need to reset the parser.
///
/// Memory use is bounded by the configured field and head sizes. Body data is never buffered.
///
/// # Examples
///
/// ```
/// use http_feed::fsm::Success;
/// use http_feed::http1::{ HttpHandler, Parser, ParserType };
///
/// struct Handler {
///     body: Vec<u8>,
/// }
///
/// impl HttpHandler for Handler {
///     fn on_body(&mut self, data: &[u8]) -> bool {
///         self.body.extend_from_slice(data);
///         true
///     }
/// }
///
/// let mut handler = Handler { body: Vec::new() };
/// let mut parser  = Parser::new(ParserType::Request);
///
/// let stream = b"POST / HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
///
/// assert_eq!(parser.resume(&mut handler, stream), Ok(Success::Eos(stream.len())));
/// assert_eq!(handler.body, b"hello");
/// ```
pub struct Parser {
    /// Total byte count processed since the last reset.
    byte_count: usize,

    /// Configuration.
    config: ParserConfig,

    /// Content length of the current message.
    content_length: Option<u64>,

    /// Error that killed the parser.
    error: Option<ParserError>,

    /// Offset of the last byte consumed before the error was found.
    error_offset: Option<usize>,

    /// Length of the current chunk extensions.
    extension_length: usize,

    /// Message flags.
    flags: u16,

    /// Body framing of the current message.
    framing: BodyFraming,

    /// Size of the current head or trailer section.
    head_size: usize,

    /// Amount of headers and trailers in the current message.
    header_count: usize,

    /// HTTP major version.
    http_major: u8,

    /// HTTP minor version.
    http_minor: u8,

    /// Remaining body or chunk length.
    length: u64,

    /// Type of the current message.
    message_type: ParserType,

    /// Request method.
    method: Option<Method>,

    /// Parser type.
    parser_type: ParserType,

    /// Current state.
    state: ParserState,

    /// Response status code.
    status_code: Option<u16>,

    /// Method, header name, or status storage.
    token: Vec<u8>,

    /// Request target.
    url: Vec<u8>,

    /// Request target component boundaries.
    url_fields: Option<UrlFields>,

    /// Request target parser.
    url_parser: UrlParser,

    /// Header value storage.
    value: Vec<u8>,
}

impl Parser {
    /// Create a new `Parser` with the default configuration.
    pub fn new(parser_type: ParserType) -> Parser {
        Parser::with_config(parser_type, ParserConfig::default())
    }

    /// Create a new `Parser` with `config`.
    pub fn with_config(parser_type: ParserType, config: ParserConfig) -> Parser {
        Parser {
            byte_count:       0,
            config,
            content_length:   None,
            error:            None,
            error_offset:     None,
            extension_length: 0,
            flags:            0,
            framing:          BodyFraming::None,
            head_size:        0,
            header_count:     0,
            http_major:       0,
            http_minor:       0,
            length:           0,
            message_type:     parser_type,
            method:           None,
            parser_type,
            state:            ParserState::StripDetect,
            status_code:      None,
            token:            Vec::new(),
            url:              Vec::new(),
            url_fields:       None,
            url_parser:       UrlParser::new(false),
            value:            Vec::new(),
        }
    }

    /// Retrieve the total byte count processed since the last reset.
    ///
    /// The byte count is updated when `resume()` completes. This means that if a call to
    /// `byte_count()` is executed from within a callback, it will be accurate within
    /// `stream.len()` bytes.
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }

    /// Retrieve the configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Retrieve the content length of the current message.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Retrieve the error that killed the parser.
    pub fn error(&self) -> Option<ParserError> {
        self.error
    }

    /// Retrieve the offset of the last byte consumed before the error was found.
    ///
    /// The offset counts all bytes processed since the last reset.
    pub fn error_offset(&self) -> Option<usize> {
        self.error_offset
    }

    /// Retrieve the body framing of the current message.
    ///
    /// This is `BodyFraming::None` until the header section has been parsed.
    pub fn framing(&self) -> BodyFraming {
        self.framing
    }

    /// Retrieve the HTTP major version.
    pub fn http_major(&self) -> u8 {
        self.http_major
    }

    /// Retrieve the HTTP minor version.
    pub fn http_minor(&self) -> u8 {
        self.http_minor
    }

    /// Indicates that the current message body is chunked.
    pub fn is_chunked(&self) -> bool {
        self.framing == BodyFraming::Chunked
    }

    /// Indicates that the connection may be reused after the current message.
    ///
    /// HTTP/1.1 defaults to `true` and HTTP/1.0 to `false`. An explicit `Connection: close` or
    /// `Connection: keep-alive` overrides the default, and a body that ends with the connection is
    /// never kept alive.
    pub fn keep_alive(&self) -> bool {
        if self.framing == BodyFraming::UntilClose || has_flag!(self, F_CONNECTION_CLOSE) {
            false
        } else if has_flag!(self, F_CONNECTION_KEEP_ALIVE) {
            true
        } else {
            self.http_major > 1 || (self.http_major == 1 && self.http_minor > 0)
        }
    }

    /// Retrieve the type of the current message.
    ///
    /// With `ParserType::Both` this stays `ParserType::Both` until the message type is detected.
    pub fn message_type(&self) -> ParserType {
        self.message_type
    }

    /// Retrieve the request method.
    pub fn method(&self) -> Option<&Method> {
        self.method.as_ref()
    }

    /// Retrieve the parser type.
    pub fn parser_type(&self) -> ParserType {
        self.parser_type
    }

    /// Retrieve the current state.
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Retrieve the response status code.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Indicates that the connection switches protocols after the current message.
    pub fn upgrade(&self) -> bool {
        has_flag!(self, F_UPGRADE)
    }

    /// Retrieve the request target.
    pub fn url(&self) -> Option<Url<'_>> {
        self.url_fields
            .as_ref()
            .map(|fields| Url::new(&self.url, fields))
    }

    /// Signal the end of input.
    ///
    /// A body that ends with the connection is finished, and `on_message_finished()` is executed.
    /// Between messages this does nothing. Anywhere else the message is incomplete and
    /// `ParserError::UnexpectedEof` is returned.
    ///
    /// # Arguments
    ///
    /// **`handler`**
    ///
    /// The handler implementation.
    pub fn finish<T: HttpHandler>(&mut self, handler: &mut T) -> Result<Success, ParserError> {
        if self.state == ParserState::Dead {
            return Err(ParserError::Dead);
        }

        if self.state == ParserState::HeadersFinished
        || self.state == ParserState::MessageFinished {
            // these states consume no bytes, so finish their work first
            if let Success::Callback(length) = self.parse(handler, &mut ByteStream::new(&[]))? {
                return Ok(Success::Callback(length));
            }
        }

        match self.state {
            ParserState::StripDetect | ParserState::Finished => {
                self.state = ParserState::Finished;

                Ok(Success::Finished(0))
            },
            ParserState::Upgraded => {
                Ok(Success::Upgrade(0))
            },
            ParserState::BodyUntilClose => {
                self.state = ParserState::Finished;

                trace!(offset = self.byte_count, "message finished by end of input");

                handler.on_message_finished();

                Ok(Success::Finished(0))
            },
            _ => {
                self.fail(ParserError::UnexpectedEof);

                Err(ParserError::UnexpectedEof)
            }
        }
    }

    /// Main parser loop.
    #[inline]
    fn parse<T: HttpHandler>(&mut self, handler: &mut T, context: &mut ByteStream)
    -> Result<Success, ParserError> {
        loop {
            let head   = self.state.is_head();
            let index  = context.stream_index;
            let mut result = dispatch(self, handler, context);

            if head {
                self.head_size += context.stream_index - index;

                if self.head_size > self.config.get_max_head_size() && result.is_ok() {
                    result = Err(ParserError::HeaderTooLarge);
                }
            }

            match result {
                Ok(ParserValue::Continue) => {
                },
                Ok(ParserValue::Exit(success)) => {
                    self.byte_count += context.stream_index;

                    return Ok(success);
                },
                Err(error) => {
                    self.byte_count += context.stream_index;

                    self.fail(error);

                    return Err(error);
                }
            }
        }
    }

    /// Reset `Parser` to its initial state for `parser_type`.
    ///
    /// The configuration is kept. This recovers the parser after an error, an upgrade, or the end
    /// of input.
    pub fn reset(&mut self, parser_type: ParserType) {
        self.parser_type  = parser_type;
        self.byte_count   = 0;
        self.error        = None;
        self.error_offset = None;
        self.state        = ParserState::StripDetect;

        self.begin_message();

        trace!(?parser_type, "parser reset");
    }

    /// Resume parsing an additional slice of data.
    ///
    /// # Arguments
    ///
    /// **`handler`**
    ///
    /// The handler implementation.
    ///
    /// **`stream`**
    ///
    /// The stream of data to be parsed.
    ///
    /// **Returns:**
    ///
    /// `Success::Eos` once all of `stream` has been consumed, `Success::Callback` when a callback
    /// paused parsing, and `Success::Upgrade` when the connection switched protocols. After an
    /// error, `ParserError::Dead` is returned until the parser is reset.
    #[inline]
    pub fn resume<T: HttpHandler>(&mut self, handler: &mut T, stream: &[u8])
    -> Result<Success, ParserError> {
        if self.state == ParserState::Dead {
            return Err(ParserError::Dead);
        }

        self.parse(handler, &mut ByteStream::new(stream))
    }

    // ---------------------------------------------------------------------------------------------
    // MESSAGE DETAILS
    // ---------------------------------------------------------------------------------------------

    /// Clear all details of the previous message.
    fn begin_message(&mut self) {
        self.content_length   = None;
        self.extension_length = 0;
        self.flags            = 0;
        self.framing          = BodyFraming::None;
        self.head_size        = 0;
        self.header_count     = 0;
        self.http_major       = 0;
        self.http_minor       = 0;
        self.length           = 0;
        self.message_type     = self.parser_type;
        self.method           = None;
        self.status_code      = None;
        self.url_fields       = None;

        self.token.clear();
        self.url.clear();
        self.value.clear();
    }

    /// Execute the header callback for the pending header.
    fn deliver_header<T: HttpHandler>(&mut self, handler: &mut T) -> Result<bool, ParserError> {
        trim_end(&mut self.value);

        self.header_count += 1;

        unset_flag!(self, F_HEADER_PENDING);

        let result = if has_flag!(self, F_TRAILING) {
            handler.on_trailer(&self.token, &self.value)
        } else {
            self.inspect_header()?;

            handler.on_header(&self.token, &self.value)
        };

        self.token.clear();
        self.value.clear();

        Ok(result)
    }

    /// Store the parser error.
    fn fail(&mut self, error: ParserError) {
        let offset = self.byte_count.saturating_sub(1);

        debug!(%error, offset, state = ?self.state, "parsing failed");

        self.error        = Some(error);
        self.error_offset = Some(offset);
        self.state        = ParserState::Dead;
    }

    /// Decide body framing, keep-alive, and upgrade once the header section has been parsed.
    fn finish_head<T: HttpHandler>(&mut self, handler: &mut T) -> Result<HeadInfo, ParserError> {
        let request = self.message_type == ParserType::Request;
        let strict  = self.config.get_strict_framing();

        let upgrade = if request {
            (has_flag!(self, F_UPGRADE_HEADER) && has_flag!(self, F_CONNECTION_UPGRADE))
            || self.method == Some(Method::Connect)
        } else {
            self.status_code == Some(101)
        };

        if has_flag!(self, F_TRANSFER_ENCODING) && self.content_length.is_some() {
            if strict {
                return Err(ParserError::AmbiguousFraming);
            }

            // transfer encoding wins
            self.content_length = None;
        }

        self.framing = if upgrade {
            BodyFraming::None
        } else if !request && (self.is_bodiless_status() || handler.skip_body()) {
            BodyFraming::None
        } else if has_flag!(self, F_CHUNKED) {
            BodyFraming::Chunked
        } else if has_flag!(self, F_TRANSFER_ENCODING) {
            if request && strict {
                return Err(ParserError::TransferEncoding);
            }

            BodyFraming::UntilClose
        } else if let Some(length) = self.content_length {
            if length == 0 {
                BodyFraming::None
            } else {
                BodyFraming::Length(length)
            }
        } else if request {
            BodyFraming::None
        } else {
            BodyFraming::UntilClose
        };

        if upgrade {
            set_flag!(self, F_UPGRADE);
        }

        Ok(HeadInfo {
            framing:    self.framing,
            keep_alive: self.keep_alive(),
            upgrade,
        })
    }

    /// Record the headers that decide framing, keep-alive, and upgrade.
    fn inspect_header(&mut self) -> Result<(), ParserError> {
        if self.token.eq_ignore_ascii_case(b"connection") {
            for option in self.value.split(|&byte| byte == b',') {
                let option = option.trim_ascii();

                if option.eq_ignore_ascii_case(b"close") {
                    set_flag!(self, F_CONNECTION_CLOSE);
                } else if option.eq_ignore_ascii_case(b"keep-alive") {
                    set_flag!(self, F_CONNECTION_KEEP_ALIVE);
                } else if option.eq_ignore_ascii_case(b"upgrade") {
                    set_flag!(self, F_CONNECTION_UPGRADE);
                }
            }
        } else if self.token.eq_ignore_ascii_case(b"content-length") {
            let length = parse_content_length(&self.value)
                         .ok_or(ParserError::InvalidContentLength)?;

            match self.content_length {
                Some(current) if current != length => {
                    return Err(ParserError::AmbiguousFraming);
                },
                _ => {
                    self.content_length = Some(length);
                }
            }
        } else if self.token.eq_ignore_ascii_case(b"transfer-encoding") {
            set_flag!(self, F_TRANSFER_ENCODING);

            // chunked must be the final coding
            let chunked = self.value
                              .rsplit(|&byte| byte == b',')
                              .next()
                              .is_some_and(|coding| {
                                  coding.trim_ascii().eq_ignore_ascii_case(b"chunked")
                              });

            if chunked {
                set_flag!(self, F_CHUNKED);
            } else {
                unset_flag!(self, F_CHUNKED);
            }
        } else if self.token.eq_ignore_ascii_case(b"upgrade") {
            set_flag!(self, F_UPGRADE_HEADER);
        }

        Ok(())
    }

    /// Indicates that the response status never carries a body.
    fn is_bodiless_status(&self) -> bool {
        match self.status_code {
            Some(code) => (100..200).contains(&code) || code == 204 || code == 304,
            None       => false
        }
    }

    // ---------------------------------------------------------------------------------------------
    // DETECTION STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    pub(crate) fn strip_detect<T: HttpHandler>(&mut self, _handler: &mut T,
                                               context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            exit_if_eos!(self, context);
            bs_next!(context);

            if context.byte != b'\r' && context.byte != b'\n' {
                break;
            }
        }

        bs_replay!(context);

        transition!(self, context, MessageBegin);
    }

    #[inline]
    pub(crate) fn message_begin<T: HttpHandler>(&mut self, handler: &mut T,
                                                context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        self.begin_message();

        match self.parser_type {
            ParserType::Both     => set_state!(self, Detect1),
            ParserType::Request  => set_state!(self, RequestMethod),
            ParserType::Response => set_state!(self, ResponseHttp1)
        }

        trace!(
            parser_type = ?self.parser_type,
            offset = self.byte_count + context.stream_index,
            "message begin"
        );

        callback_result!(self, context, handler.on_message_begin());
    }

    #[inline]
    pub(crate) fn detect1<T: HttpHandler>(&mut self, handler: &mut T, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        self.detect(handler, context, b'H', ParserState::Detect2)
    }

    #[inline]
    pub(crate) fn detect2<T: HttpHandler>(&mut self, handler: &mut T, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        self.detect(handler, context, b'T', ParserState::Detect3)
    }

    #[inline]
    pub(crate) fn detect3<T: HttpHandler>(&mut self, handler: &mut T, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        self.detect(handler, context, b'T', ParserState::Detect4)
    }

    #[inline]
    pub(crate) fn detect4<T: HttpHandler>(&mut self, handler: &mut T, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        self.detect(handler, context, b'P', ParserState::Detect5)
    }

    #[inline]
    pub(crate) fn detect5<T: HttpHandler>(&mut self, _handler: &mut T, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte == b'/' {
            self.token.clear();

            self.message_type = ParserType::Response;

            transition!(self, context, ResponseVersionMajor);
        }

        bs_replay!(context);

        self.message_type = ParserType::Request;

        transition!(self, context, RequestMethod);
    }

    /// Match the next byte of `HTTP/`. The matched bytes are kept as the start of a request method
    /// in case the message turns out to be a request.
    #[inline]
    fn detect<T: HttpHandler>(&mut self, _handler: &mut T, context: &mut ByteStream, byte: u8,
                              state: ParserState)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte == byte {
            self.token.push(byte);

            self.state = state;

            transition!(self, context);
        }

        bs_replay!(context);

        self.message_type = ParserType::Request;

        transition!(self, context, RequestMethod);
    }

    // ---------------------------------------------------------------------------------------------
    // REQUEST STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    pub(crate) fn request_method<T: HttpHandler>(&mut self, handler: &mut T,
                                                 context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        collect_tokens!(
            self,
            context,
            token,
            self.config.get_max_field_length(),

            // stop on these bytes
            context.byte == b' ',

            // on invalid byte
            Method
        );

        if self.token.is_empty() {
            exit_error!(Method, context.byte);
        }

        let method = Method::from_bytes(&self.token);

        if method.is_extension() && !self.config.get_allow_extension_methods() {
            exit_error!(ExtensionMethod);
        }

        self.url_parser = UrlParser::new(method == Method::Connect);
        self.method     = Some(method);

        set_state!(self, RequestUrl);

        let result = handler.on_method(&self.token);

        self.token.clear();

        callback_result!(self, context, result);
    }

    #[inline]
    pub(crate) fn request_url<T: HttpHandler>(&mut self, handler: &mut T, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            if bs_is_eos!(context) {
                self.url.extend_from_slice(bs_slice!(context));

                exit_eos!(self, context);
            }

            bs_next!(context);

            if context.byte == b' ' {
                break;
            }

            self.url_parser.next(context.byte)?;

            if self.url_parser.len() > self.config.get_max_field_length() {
                exit_error!(HeaderTooLarge);
            }
        }

        if self.url_parser.is_empty() {
            return Err(UrlError::Character(context.byte).into());
        }

        self.url.extend_from_slice(bs_slice_ignore!(context));

        let fields = self.url_parser.finish(&self.url)?;

        self.url_fields = Some(fields);

        set_state!(self, RequestHttp1);

        callback_result!(self, context, handler.on_url(&Url::new(&self.url, &fields)));
    }

    #[inline]
    pub(crate) fn request_http1<T: HttpHandler>(&mut self, handler: &mut T,
                                                context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if bs_has_bytes!(context, 9)
        && (bs_starts_with9!(context, b"HTTP/1.1\r")
        ||  bs_starts_with9!(context, b"HTTP/1.0\r")) {
            bs_jump!(context, 9);

            self.http_major = 1;
            self.http_minor = context.stream[context.stream_index - 2] - b'0';

            callback_transition!(
                self,
                handler,
                context,
                on_version,
                (self.http_major, self.http_minor),
                InitialLf
            );
        }

        literal!(self, context, b'H', RequestHttp2, Version);
    }

    #[inline]
    pub(crate) fn request_http2<T: HttpHandler>(&mut self, _handler: &mut T,
                                                context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        literal!(self, context, b'T', RequestHttp3, Version);
    }

    #[inline]
    pub(crate) fn request_http3<T: HttpHandler>(&mut self, _handler: &mut T,
                                                context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        literal!(self, context, b'T', RequestHttp4, Version);
    }

    #[inline]
    pub(crate) fn request_http4<T: HttpHandler>(&mut self, _handler: &mut T,
                                                context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        literal!(self, context, b'P', RequestHttp5, Version);
    }

    #[inline]
    pub(crate) fn request_http5<T: HttpHandler>(&mut self, _handler: &mut T,
                                                context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        literal!(self, context, b'/', RequestVersionMajor, Version);
    }

    #[inline]
    pub(crate) fn request_version_major<T: HttpHandler>(&mut self, _handler: &mut T,
                                                        context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_digit!(context.byte) {
            self.http_major = context.byte - b'0';

            transition!(self, context, RequestVersionPeriod);
        }

        exit_error!(Version, context.byte);
    }

    #[inline]
    pub(crate) fn request_version_period<T: HttpHandler>(&mut self, _handler: &mut T,
                                                         context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        literal!(self, context, b'.', RequestVersionMinor, Version);
    }

    #[inline]
    pub(crate) fn request_version_minor<T: HttpHandler>(&mut self, _handler: &mut T,
                                                        context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_digit!(context.byte) {
            self.http_minor = context.byte - b'0';

            transition!(self, context, RequestVersionCr);
        }

        exit_error!(Version, context.byte);
    }

    #[inline]
    pub(crate) fn request_version_cr<T: HttpHandler>(&mut self, handler: &mut T,
                                                     context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte == b'\r' {
            callback_transition!(
                self,
                handler,
                context,
                on_version,
                (self.http_major, self.http_minor),
                InitialLf
            );
        }

        exit_error!(Version, context.byte);
    }

    // ---------------------------------------------------------------------------------------------
    // RESPONSE STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    pub(crate) fn response_http1<T: HttpHandler>(&mut self, handler: &mut T,
                                                 context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        if bs_has_bytes!(context, 9)
        && (bs_starts_with9!(context, b"HTTP/1.1 ")
        ||  bs_starts_with9!(context, b"HTTP/1.0 ")) {
            bs_jump!(context, 9);

            self.http_major = 1;
            self.http_minor = context.stream[context.stream_index - 2] - b'0';

            callback_transition!(
                self,
                handler,
                context,
                on_version,
                (self.http_major, self.http_minor),
                ResponseStatusCode1
            );
        }

        literal!(self, context, b'H', ResponseHttp2, Version);
    }

    #[inline]
    pub(crate) fn response_http2<T: HttpHandler>(&mut self, _handler: &mut T,
                                                 context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        literal!(self, context, b'T', ResponseHttp3, Version);
    }

    #[inline]
    pub(crate) fn response_http3<T: HttpHandler>(&mut self, _handler: &mut T,
                                                 context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        literal!(self, context, b'T', ResponseHttp4, Version);
    }

    #[inline]
    pub(crate) fn response_http4<T: HttpHandler>(&mut self, _handler: &mut T,
                                                 context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        literal!(self, context, b'P', ResponseHttp5, Version);
    }

    #[inline]
    pub(crate) fn response_http5<T: HttpHandler>(&mut self, _handler: &mut T,
                                                 context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        literal!(self, context, b'/', ResponseVersionMajor, Version);
    }

    #[inline]
    pub(crate) fn response_version_major<T: HttpHandler>(&mut self, _handler: &mut T,
                                                         context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_digit!(context.byte) {
            self.http_major = context.byte - b'0';

            transition!(self, context, ResponseVersionPeriod);
        }

        exit_error!(Version, context.byte);
    }

    #[inline]
    pub(crate) fn response_version_period<T: HttpHandler>(&mut self, _handler: &mut T,
                                                          context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        literal!(self, context, b'.', ResponseVersionMinor, Version);
    }

    #[inline]
    pub(crate) fn response_version_minor<T: HttpHandler>(&mut self, _handler: &mut T,
                                                         context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_digit!(context.byte) {
            self.http_minor = context.byte - b'0';

            transition!(self, context, ResponseVersionSpace);
        }

        exit_error!(Version, context.byte);
    }

    #[inline]
    pub(crate) fn response_version_space<T: HttpHandler>(&mut self, handler: &mut T,
                                                         context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte == b' ' {
            callback_transition!(
                self,
                handler,
                context,
                on_version,
                (self.http_major, self.http_minor),
                ResponseStatusCode1
            );
        }

        exit_error!(Version, context.byte);
    }

    #[inline]
    pub(crate) fn response_status_code1<T: HttpHandler>(&mut self, _handler: &mut T,
                                                        context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_digit!(context.byte) {
            self.status_code = Some(u16::from(context.byte - b'0'));

            transition!(self, context, ResponseStatusCode2);
        }

        exit_error!(StatusCode, context.byte);
    }

    #[inline]
    pub(crate) fn response_status_code2<T: HttpHandler>(&mut self, _handler: &mut T,
                                                        context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        self.status_code_digit(context, ParserState::ResponseStatusCode3)
    }

    #[inline]
    pub(crate) fn response_status_code3<T: HttpHandler>(&mut self, _handler: &mut T,
                                                        context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        self.status_code_digit(context, ParserState::ResponseStatusCodeEnd)
    }

    #[inline]
    fn status_code_digit(&mut self, context: &mut ByteStream, state: ParserState)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_digit!(context.byte) {
            let digit = u16::from(context.byte - b'0');

            self.status_code = self.status_code.map(|code| code * 10 + digit);
            self.state       = state;

            transition!(self, context);
        }

        exit_error!(StatusCode, context.byte);
    }

    #[inline]
    pub(crate) fn response_status_code_end<T: HttpHandler>(&mut self, handler: &mut T,
                                                           context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte == b'\r' {
            // status is empty, let the status state find the carriage return
            bs_replay!(context);
        } else if context.byte != b' ' {
            exit_error!(StatusCode, context.byte);
        }

        callback_transition!(
            self,
            handler,
            context,
            on_status_code,
            (self.status_code.unwrap_or_default()),
            ResponseStatus
        );
    }

    #[inline]
    pub(crate) fn response_status<T: HttpHandler>(&mut self, handler: &mut T,
                                                  context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        collect_field!(
            self,
            context,
            token,
            self.config.get_max_field_length(),
            Status
        );

        set_state!(self, InitialLf);

        let result = handler.on_status(&self.token);

        self.token.clear();

        callback_result!(self, context, result);
    }

    #[inline]
    pub(crate) fn initial_lf<T: HttpHandler>(&mut self, _handler: &mut T, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        literal!(self, context, b'\n', HeaderLineStart, CrlfSequence);
    }

    // ---------------------------------------------------------------------------------------------
    // HEADER STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    pub(crate) fn header_line_start<T: HttpHandler>(&mut self, handler: &mut T,
                                                    context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_space!(context.byte) {
            if has_flag!(self, F_HEADER_PENDING) {
                // obsolete line folding
                transition!(self, context, HeaderFold);
            }

            exit_error!(HeaderName, context.byte);
        }

        if context.byte == b'\r' {
            set_state!(self, HeadersLf);
        } else {
            bs_replay!(context);
            set_state!(self, HeaderName);
        }

        if has_flag!(self, F_HEADER_PENDING) {
            let result = self.deliver_header(handler)?;

            callback_result!(self, context, result);
        }

        transition!(self, context);
    }

    #[inline]
    pub(crate) fn header_name<T: HttpHandler>(&mut self, _handler: &mut T, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        collect_tokens!(
            self,
            context,
            token,
            self.config.get_max_field_length(),

            // stop on these bytes
            context.byte == b':',

            // on invalid byte
            HeaderName
        );

        if self.token.is_empty() {
            exit_error!(HeaderName, context.byte);
        } else if self.header_count >= self.config.get_max_header_count() {
            exit_error!(TooManyHeaders);
        }

        set_flag!(self, F_HEADER_PENDING);

        transition!(self, context, StripHeaderValue);
    }

    #[inline]
    pub(crate) fn strip_header_value<T: HttpHandler>(&mut self, _handler: &mut T,
                                                     context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        consume_linear_space!(self, context);

        transition!(self, context, HeaderValue);
    }

    #[inline]
    pub(crate) fn header_value<T: HttpHandler>(&mut self, _handler: &mut T,
                                               context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        collect_field!(
            self,
            context,
            value,
            self.config.get_max_field_length(),
            HeaderValue
        );

        transition!(self, context, HeaderLf);
    }

    #[inline]
    pub(crate) fn header_fold<T: HttpHandler>(&mut self, _handler: &mut T, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        consume_linear_space!(self, context);

        trim_end(&mut self.value);

        if !self.value.is_empty() {
            self.value.push(b' ');
        }

        transition!(self, context, HeaderValue);
    }

    #[inline]
    pub(crate) fn header_lf<T: HttpHandler>(&mut self, _handler: &mut T, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        literal!(self, context, b'\n', HeaderLineStart, CrlfSequence);
    }

    #[inline]
    pub(crate) fn headers_lf<T: HttpHandler>(&mut self, _handler: &mut T, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte == b'\n' {
            if has_flag!(self, F_TRAILING) {
                transition!(self, context, MessageFinished);
            }

            transition!(self, context, HeadersFinished);
        }

        exit_error!(CrlfSequence, context.byte);
    }

    #[inline]
    pub(crate) fn headers_finished<T: HttpHandler>(&mut self, handler: &mut T,
                                                   context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        let head = self.finish_head(handler)?;

        match head.framing {
            BodyFraming::None => {
                set_state!(self, MessageFinished);
            },
            BodyFraming::Length(length) => {
                self.length = length;

                set_state!(self, BodyIdentity);
            },
            BodyFraming::Chunked => {
                set_state!(self, ChunkLength1);
            },
            BodyFraming::UntilClose => {
                set_state!(self, BodyUntilClose);
            }
        }

        debug!(
            framing = ?head.framing,
            keep_alive = head.keep_alive,
            upgrade = head.upgrade,
            headers = self.header_count,
            "headers finished"
        );

        callback_result!(self, context, handler.on_headers_finished(&head));
    }

    // ---------------------------------------------------------------------------------------------
    // BODY STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    pub(crate) fn body_identity<T: HttpHandler>(&mut self, handler: &mut T,
                                                context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);

        let available = bs_available!(context);

        if available as u64 >= self.length {
            bs_jump!(context, self.length as usize);

            self.length = 0;

            set_state!(self, MessageFinished);
        } else {
            bs_jump!(context, available);

            self.length -= available as u64;
        }

        callback_result!(self, context, handler.on_body(bs_slice!(context)));
    }

    #[inline]
    pub(crate) fn body_until_close<T: HttpHandler>(&mut self, handler: &mut T,
                                                   context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);

        let available = bs_available!(context);

        bs_jump!(context, available);

        callback_result!(self, context, handler.on_body(bs_slice!(context)));
    }

    // ---------------------------------------------------------------------------------------------
    // FINISHED STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    pub(crate) fn message_finished<T: HttpHandler>(&mut self, handler: &mut T,
                                                   context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        let upgrade = has_flag!(self, F_UPGRADE);

        if upgrade {
            set_state!(self, Upgraded);
        } else {
            set_state!(self, StripDetect);
        }

        trace!(offset = self.byte_count + context.stream_index, "message finished");

        let result = handler.on_message_finished();

        if upgrade {
            debug!(offset = self.byte_count + context.stream_index, "protocol upgrade");

            exit_upgrade!(self, context);
        }

        callback_result!(self, context, result);
    }

    #[inline]
    pub(crate) fn upgraded<T: HttpHandler>(&mut self, _handler: &mut T, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_upgrade!(self, context);
    }

    #[inline]
    pub(crate) fn finished<T: HttpHandler>(&mut self, _handler: &mut T, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_finished!(self, context);
    }

    #[inline]
    pub(crate) fn dead<T: HttpHandler>(&mut self, _handler: &mut T, _context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_error!(Dead);
    }
}

/// Parse a `Content-Length` value.
fn parse_content_length(value: &[u8]) -> Option<u64> {
    let value = value.trim_ascii();

    if value.is_empty() {
        return None;
    }

    value.iter().try_fold(0u64, |length, &byte| {
        if is_digit!(byte) {
            length.checked_mul(10)?.checked_add(u64::from(byte - b'0'))
        } else {
            None
        }
    })
}

/// Remove trailing linear white space.
fn trim_end(buffer: &mut Vec<u8>) {
    while let Some(&byte) = buffer.last() {
        if !is_space!(byte) {
            break;
        }

        buffer.pop();
    }
}
