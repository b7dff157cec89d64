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

use crate::http1::test::*;
use crate::http1::{ BodyFraming, ErrorKind, ParserConfig };

fn lenient(parser_type: ParserType) -> Parser {
    Parser::with_config(parser_type, ParserConfig::default().strict_framing(false))
}

#[test]
fn chunked_not_final() {
    let (mut p, mut h) = http1_setup!(ParserType::Request);

    assert_error(
        &mut p,
        &mut h,
        b"POST / HTTP/1.1\r\nTransfer-Encoding: chunked, gzip\r\n\r\n",
        ParserError::TransferEncoding
    );
}

#[test]
fn chunked_final() {
    let (mut p, mut h) = http1_setup!(ParserType::Request);

    assert_eos(
        &mut p,
        &mut h,
        b"POST / HTTP/1.1\r\nTransfer-Encoding: gzip, chunked\r\n\r\n",
        ParserState::ChunkLength1
    );

    assert_eq!(p.framing(), BodyFraming::Chunked);
}

#[test]
fn connection_close() {
    let (mut p, mut h) = http1_setup!(ParserType::Request);

    assert_eos(
        &mut p,
        &mut h,
        b"GET / HTTP/1.1\r\nConnection: keep-alive, close\r\n\r\n",
        ParserState::StripDetect
    );

    assert!(!p.keep_alive());
    assert_eq!(h.head.map(|head| head.keep_alive), Some(false));
}

#[test]
fn content_length_duplicate() {
    let (mut p, mut h) = http1_setup!(ParserType::Request);

    assert_eos(
        &mut p,
        &mut h,
        b"POST / HTTP/1.1\r\nContent-Length: 3\r\nContent-Length: 3\r\n\r\nabc",
        ParserState::StripDetect
    );

    assert_eq!(h.body, b"abc");

    let (mut p, mut h) = http1_setup!(ParserType::Request);

    assert_error(
        &mut p,
        &mut h,
        b"POST / HTTP/1.1\r\nContent-Length: 3\r\nContent-Length: 4\r\n\r\n",
        ParserError::AmbiguousFraming
    );
}

#[test]
fn content_length_invalid() {
    for value in [&b"abc"[..], b"-1", b"1 2", b"", b"99999999999999999999999"] {
        let (mut p, mut h) = http1_setup!(ParserType::Request);

        let mut stream = b"POST / HTTP/1.1\r\nContent-Length: ".to_vec();

        stream.extend_from_slice(value);
        stream.extend_from_slice(b"\r\n\r\n");

        assert_error(&mut p, &mut h, &stream, ParserError::InvalidContentLength);
    }
}

#[test]
fn content_length_zero() {
    let (mut p, mut h) = http1_setup!(ParserType::Request);

    assert_eos(
        &mut p,
        &mut h,
        b"POST / HTTP/1.1\r\nContent-Length: 0\r\n\r\n",
        ParserState::StripDetect
    );

    assert_eq!(p.framing(), BodyFraming::None);
    assert_eq!(p.content_length(), Some(0));
    assert_eq!(h.message_finished, 1);
}

#[test]
fn request_without_length() {
    let (mut p, mut h) = http1_setup!(ParserType::Request);

    assert_eos(
        &mut p,
        &mut h,
        b"POST / HTTP/1.1\r\nHost: a\r\n\r\n",
        ParserState::StripDetect
    );

    assert_eq!(p.framing(), BodyFraming::None);
    assert_eq!(h.message_finished, 1);
}

#[test]
fn transfer_encoding_and_content_length() {
    let stream = b"POST / HTTP/1.1\r\nContent-Length: 5\r\nTransfer-Encoding: chunked\r\n\r\n";

    let (mut p, mut h) = http1_setup!(ParserType::Request);

    assert_error(&mut p, &mut h, stream, ParserError::AmbiguousFraming);

    assert_eq!(ParserError::AmbiguousFraming.kind(), ErrorKind::Framing);

    let mut p = lenient(ParserType::Request);

    assert_eos(&mut p, &mut h, stream, ParserState::ChunkLength1);

    assert_eq!(p.content_length(), None);
    assert_eq!(p.framing(), BodyFraming::Chunked);
}

#[test]
fn transfer_encoding_request() {
    let stream = b"POST / HTTP/1.1\r\nTransfer-Encoding: gzip\r\n\r\nabc";

    let (mut p, mut h) = http1_setup!(ParserType::Request);

    assert_error(&mut p, &mut h, stream, ParserError::TransferEncoding);

    let mut p = lenient(ParserType::Request);

    assert_eos(&mut p, &mut h, stream, ParserState::BodyUntilClose);

    assert_eq!(p.framing(), BodyFraming::UntilClose);
    assert_eq!(h.body, b"abc");
}

#[test]
fn transfer_encoding_response() {
    let (mut p, mut h) = http1_setup!(ParserType::Response);

    assert_eos(
        &mut p,
        &mut h,
        b"HTTP/1.1 200 OK\r\nTransfer-Encoding: gzip\r\n\r\nabc",
        ParserState::BodyUntilClose
    );

    assert_eq!(p.framing(), BodyFraming::UntilClose);
    assert!(!p.keep_alive());
}
