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
use crate::http1::{ ErrorKind, ParserConfig };

fn setup(config: ParserConfig) -> (Parser, DebugHandler) {
    (Parser::with_config(ParserType::Request, config), DebugHandler::new())
}

#[test]
fn field_length() {
    let config = ParserConfig::default().max_field_length(4);

    let (mut p, mut h) = setup(config.clone());

    assert_error(&mut p, &mut h, b"GET /abcd", ParserError::HeaderTooLarge);

    let (mut p, mut h) = setup(config.clone());

    assert_error(&mut p, &mut h, b"GET /abc HTTP/1.1\r\nHost: abcde", ParserError::HeaderTooLarge);

    let (mut p, mut h) = setup(config.clone());

    assert_error(&mut p, &mut h, b"PROPFIND", ParserError::HeaderTooLarge);

    let (mut p, mut h) = setup(config);

    assert_eos(
        &mut p,
        &mut h,
        b"GET /abc HTTP/1.1\r\nHost: abcd\r\n\r\n",
        ParserState::StripDetect
    );
}

#[test]
fn head_size() {
    let config = ParserConfig::default().max_head_size(40);

    let (mut p, mut h) = setup(config.clone());

    assert_error(
        &mut p,
        &mut h,
        b"GET / HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\n\r\n",
        ParserError::HeaderTooLarge
    );

    assert_eq!(ParserError::HeaderTooLarge.kind(), ErrorKind::Limit);

    // the limit holds no matter how the head is split
    let (mut p, mut h) = setup(config.clone());

    for byte in b"GET / HTTP/1.1\r\nHost: example.com\r\n".iter() {
        assert!(p.resume(&mut h, &[*byte]).is_ok());
    }

    assert_error(&mut p, &mut h, b"Accept: */*\r\n", ParserError::HeaderTooLarge);

    // body bytes do not count
    let (mut p, mut h) = setup(config);

    let mut stream = b"POST / HTTP/1.1\r\nContent-Length: 100\r\n\r\n".to_vec();

    stream.extend_from_slice(&[b'x'; 100]);

    assert_eos(&mut p, &mut h, &stream, ParserState::StripDetect);

    assert_eq!(h.body.len(), 100);
}

#[test]
fn header_count() {
    let config = ParserConfig::default().max_header_count(2);

    let (mut p, mut h) = setup(config.clone());

    assert_eos(&mut p, &mut h, b"GET / HTTP/1.1\r\nA: 1\r\nB: 2\r\n\r\n", ParserState::StripDetect);

    // the count restarts with each message
    assert_eos(&mut p, &mut h, b"GET / HTTP/1.1\r\nA: 1\r\nB: 2\r\n\r\n", ParserState::StripDetect);

    let (mut p, mut h) = setup(config);

    assert_error(
        &mut p,
        &mut h,
        b"GET / HTTP/1.1\r\nA: 1\r\nB: 2\r\nC: 3\r\n\r\n",
        ParserError::TooManyHeaders
    );
}

#[test]
fn trailer_section() {
    let config = ParserConfig::default().max_head_size(64);

    let (mut p, mut h) = setup(config);

    assert_eos(
        &mut p,
        &mut h,
        b"POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n",
        ParserState::ChunkLength1
    );

    let mut stream = b"0\r\nX-Trailer: ".to_vec();

    stream.extend_from_slice(&[b'a'; 80]);
    stream.extend_from_slice(b"\r\n\r\n");

    assert_error(&mut p, &mut h, &stream, ParserError::HeaderTooLarge);
}
