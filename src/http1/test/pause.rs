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
use crate::http1::test::*;

#[derive(Default)]
struct PauseHandler {
    body:           Vec<u8>,
    finished:       usize,
    pause_begin:    bool,
    pause_body:     bool,
    pause_finished: bool,
    pause_headers:  bool,
}

impl HttpHandler for PauseHandler {
    fn on_body(&mut self, data: &[u8]) -> bool {
        self.body.extend_from_slice(data);
        !self.pause_body
    }

    fn on_headers_finished(&mut self, _head: &HeadInfo) -> bool {
        !self.pause_headers
    }

    fn on_message_begin(&mut self) -> bool {
        !self.pause_begin
    }

    fn on_message_finished(&mut self) -> bool {
        self.finished += 1;
        !self.pause_finished
    }
}

#[test]
fn body() {
    let mut h = PauseHandler { pause_body: true, ..PauseHandler::default() };
    let mut p = Parser::new(ParserType::Request);

    let stream = b"POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n3\r\nabc\r\n";

    assert_callback(&mut p, &mut h, stream, ParserState::ChunkDataCr, stream.len() - 2);
    assert_eos(&mut p, &mut h, b"\r\n", ParserState::ChunkLength1);

    assert_eq!(h.body, b"abc");
}

#[test]
fn headers_finished() {
    let mut h = PauseHandler { pause_headers: true, ..PauseHandler::default() };
    let mut p = Parser::new(ParserType::Request);

    let stream = b"POST / HTTP/1.1\r\nContent-Length: 3\r\n\r\nabc";

    assert_callback(&mut p, &mut h, stream, ParserState::BodyIdentity, stream.len() - 3);

    h.pause_headers = false;

    assert_eos(&mut p, &mut h, b"abc", ParserState::StripDetect);

    assert_eq!(h.body, b"abc");
    assert_eq!(h.finished, 1);
}

#[test]
fn headers_finished_then_finish() {
    let mut h = PauseHandler { pause_headers: true, ..PauseHandler::default() };
    let mut p = Parser::new(ParserType::Request);

    let stream = b"GET / HTTP/1.1\r\n\r\n";

    assert_callback(&mut p, &mut h, stream, ParserState::MessageFinished, stream.len());

    assert_eq!(p.finish(&mut h), Ok(Success::Finished(0)));
    assert_eq!(h.finished, 1);
}

#[test]
fn message_begin() {
    let mut h = PauseHandler { pause_begin: true, ..PauseHandler::default() };
    let mut p = Parser::new(ParserType::Both);

    let stream = b"GET / HTTP/1.1\r\n\r\n";

    assert_callback(&mut p, &mut h, stream, ParserState::Detect1, 0);
    assert_eos(&mut p, &mut h, stream, ParserState::StripDetect);

    assert_eq!(h.finished, 1);
}

#[test]
fn message_finished() {
    let mut h = PauseHandler { pause_finished: true, ..PauseHandler::default() };
    let mut p = Parser::new(ParserType::Request);

    let first  = b"GET /a HTTP/1.1\r\n\r\n";
    let second = b"GET /b HTTP/1.1\r\n\r\n";
    let stream = [&first[..], &second[..]].concat();

    assert_callback(&mut p, &mut h, &stream, ParserState::StripDetect, first.len());
    assert_callback(&mut p, &mut h, second, ParserState::StripDetect, second.len());

    assert_eq!(h.finished, 2);
    assert_eq!(p.url().map(|url| url.as_bytes().to_vec()), Some(b"/b".to_vec()));
}
