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

use http_feed::fsm::Success;
use http_feed::handler::MessageHandler;
use http_feed::http1::{ ErrorKind, Parser, ParserConfig, ParserError, ParserState, ParserType };

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_test_writer()
                .try_init();
}

fn parse(parser_type: ParserType, stream: &[u8]) -> (Parser, MessageHandler) {
    init_tracing();

    let mut handler = MessageHandler::new();
    let mut parser  = Parser::new(parser_type);

    assert_eq!(parser.resume(&mut handler, stream), Ok(Success::Eos(stream.len())));

    (parser, handler)
}

#[test]
fn request_with_body() {
    let (parser, handler) = parse(
        ParserType::Both,
        b"GET /test?ok=1 HTTP/1.1\r\n\
          User-Agent: curl/7.18.0\r\n\
          Host: 0.0.0.0:5000\r\n\
          Accept: */*\r\n\
          Content-Length: 5\r\n\
          Content-Type: text/plain\r\n\
          \r\n\
          World"
    );

    let message = &handler.messages()[0];

    assert_eq!(handler.messages().len(), 1);
    assert_eq!(message.method.as_deref(), Some(&b"GET"[..]));
    assert_eq!(message.url, b"/test?ok=1");
    assert_eq!(message.path.as_deref(), Some(&b"/test"[..]));
    assert_eq!(message.query.as_deref(), Some(&b"ok=1"[..]));
    assert_eq!(message.fragment, None);
    assert_eq!(message.version, (1, 1));
    assert_eq!(message.header(b"content-type"), Some(&b"text/plain"[..]));
    assert_eq!(message.header(b"HOST"), Some(&b"0.0.0.0:5000"[..]));
    assert_eq!(message.body, b"World");
    assert!(message.keep_alive);
    assert!(message.complete);
    assert!(message.is_request());

    assert_eq!(parser.http_major(), 1);
    assert_eq!(parser.http_minor(), 1);
    assert_eq!(parser.status_code(), None);
}

#[test]
fn chunked_response() {
    let (parser, handler) = parse(
        ParserType::Response,
        b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n5\r\nWorld\r\n0\r\n\r\n"
    );

    let message = &handler.messages()[0];

    assert_eq!(message.status_code, Some(200));
    assert_eq!(message.reason, b"OK");
    assert_eq!(message.body, b"World");
    assert!(message.complete);
    assert!(!message.is_request());
    assert!(parser.is_chunked());
}

#[test]
fn truncated_then_resumed() {
    init_tracing();

    let mut handler = MessageHandler::new();
    let mut parser  = Parser::new(ParserType::Request);

    assert_eq!(
        parser.resume(&mut handler, b"GET / HTTP/1.1\r\nHost: examp"),
        Ok(Success::Eos(27))
    );

    assert!(handler.messages()[0].headers.is_empty());

    assert_eq!(parser.resume(&mut handler, b"le.com\r\n\r\n"), Ok(Success::Eos(10)));

    let message = &handler.messages()[0];

    assert_eq!(message.header(b"host"), Some(&b"example.com"[..]));
    assert!(message.complete);
    assert_eq!(parser.byte_count(), 37);
}

#[test]
fn repeated_headers() {
    let (_, handler) = parse(
        ParserType::Response,
        b"HTTP/1.1 200 OK\r\n\
          Set-Cookie: a=1\r\n\
          Content-Length: 0\r\n\
          set-cookie: b=2\r\n\
          \r\n"
    );

    let message = &handler.messages()[0];

    assert_eq!(message.header(b"Set-Cookie"), Some(&b"a=1"[..]));
    assert_eq!(
        message.headers_named(b"set-cookie").collect::<Vec<_>>(),
        vec![&b"a=1"[..], &b"b=2"[..]]
    );
    assert_eq!(message.headers_named(b"Location").count(), 0);
}

#[test]
fn keep_alive_connection() {
    let (_, handler) = parse(
        ParserType::Request,
        b"POST /upload HTTP/1.1\r\nContent-Length: 4\r\n\r\ndata\
          GET /chunks HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n\
          2\r\nab\r\n0\r\nX-Sum: 1\r\n\r\n\
          GET /bye HTTP/1.0\r\n\r\n"
    );

    let messages = handler.messages();

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].body, b"data");
    assert_eq!(messages[1].body, b"ab");
    assert_eq!(messages[1].trailer(b"x-sum"), Some(&b"1"[..]));
    assert!(messages[1].keep_alive);
    assert!(!messages[2].keep_alive);
    assert!(messages.iter().all(|message| message.complete));
}

#[test]
fn upgrade_leaves_remaining_bytes() {
    init_tracing();

    let mut handler = MessageHandler::new();
    let mut parser  = Parser::new(ParserType::Request);

    let stream = b"GET /ws HTTP/1.1\r\nConnection: Upgrade\r\nUpgrade: websocket\r\n\r\nframe";

    let length = match parser.resume(&mut handler, stream) {
        Ok(Success::Upgrade(length)) => length,
        other => panic!("unexpected result: {:?}", other)
    };

    assert_eq!(&stream[length..], b"frame");
    assert!(parser.upgrade());
    assert!(handler.messages()[0].upgrade);
    assert!(handler.messages()[0].complete);
}

#[test]
fn response_until_close() {
    init_tracing();

    let mut handler = MessageHandler::new();
    let mut parser  = Parser::new(ParserType::Response);

    parser.resume(&mut handler, b"HTTP/1.0 200 OK\r\n\r\nsome ").unwrap();
    parser.resume(&mut handler, b"content").unwrap();

    assert!(!handler.messages()[0].complete);

    assert_eq!(parser.finish(&mut handler), Ok(Success::Finished(0)));

    let message = &handler.messages()[0];

    assert_eq!(message.body, b"some content");
    assert!(message.complete);
    assert!(!message.keep_alive);
}

#[test]
fn head_response() {
    init_tracing();

    let mut handler = MessageHandler::new();
    let mut parser  = Parser::new(ParserType::Response);

    handler.set_skip_body(true);

    let stream = b"HTTP/1.1 200 OK\r\nContent-Length: 512\r\n\r\n\
                   HTTP/1.1 204 No Content\r\n\r\n";

    assert_eq!(parser.resume(&mut handler, stream), Ok(Success::Eos(stream.len())));

    let messages = handler.take_messages();

    assert_eq!(messages.len(), 2);
    assert!(messages[0].body.is_empty());
    assert_eq!(messages[1].status_code, Some(204));
    assert!(handler.messages().is_empty());
}

#[test]
fn error_reporting() {
    init_tracing();

    let mut handler = MessageHandler::new();
    let mut parser  = Parser::new(ParserType::Request);

    parser.resume(&mut handler, b"GET / HTTP/1.1\r\n").unwrap();

    let error = parser.resume(&mut handler, b"Host: a\r\nBad\x01Name: b\r\n\r\n").unwrap_err();

    assert_eq!(error, ParserError::HeaderName(0x01));
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(parser.state(), ParserState::Dead);
    assert_eq!(parser.error_offset(), Some(28));
    assert_eq!(error.to_string(), ParserError::HeaderName(0x01).to_string());

    assert_eq!(parser.resume(&mut handler, b"\r\n"), Err(ParserError::Dead));
    assert_eq!(parser.finish(&mut handler), Err(ParserError::Dead));

    parser.reset(ParserType::Request);

    assert_eq!(parser.byte_count(), 0);
    assert_eq!(parser.resume(&mut handler, b"GET / HTTP/1.1\r\n\r\n"), Ok(Success::Eos(18)));
}

#[test]
fn configured_limits() {
    init_tracing();

    let config = ParserConfig::default()
                 .max_header_count(1)
                 .max_field_length(16);

    let mut handler = MessageHandler::new();
    let mut parser  = Parser::with_config(ParserType::Request, config.clone());

    assert_eq!(parser.config(), &config);
    assert_eq!(
        parser.resume(&mut handler, b"GET / HTTP/1.1\r\nA: 1\r\nB: 2\r\n\r\n"),
        Err(ParserError::TooManyHeaders)
    );
    assert_eq!(ParserError::TooManyHeaders.kind(), ErrorKind::Limit);
}

#[test]
fn version_constants() {
    assert_eq!(http_feed::VERSION_MAJOR, "0");
    assert_eq!(http_feed::VERSION_MINOR, "1");
    assert_eq!(http_feed::VERSION_PATCH, "0");
}
