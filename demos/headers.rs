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
use http_feed::http1::{ Parser, ParserType };

fn main() {
    // init handler and parser
    let mut h = MessageHandler::new();
    let mut p = Parser::new(ParserType::Both);

    // the head arrives in two pieces
    let stream: &[u8] = b"GET /url?page=2 HTTP/1.0\r\n\
                          Header1: Value 1\r\n\
                          Set-Cookie: a=1\r\n\
                          Set-Cookie: b=2\r\n\r\n";

    let (first, second) = stream.split_at(20);

    for piece in [first, second] {
        match p.resume(&mut h, piece) {
            Ok(Success::Eos(_)) => {},
            Ok(other) => println!("stopped early: {:?}", other),
            Err(error) => {
                println!("error at byte {:?}: {}", p.error_offset(), error);
                return;
            }
        }
    }

    for message in h.messages() {
        println!("{} {} HTTP/{}.{}",
                 String::from_utf8_lossy(message.method.as_deref().unwrap_or_default()),
                 String::from_utf8_lossy(&message.url),
                 message.version.0,
                 message.version.1);

        for (name, value) in &message.headers {
            println!("  {}: {}", String::from_utf8_lossy(name), String::from_utf8_lossy(value));
        }

        for cookie in message.headers_named(b"set-cookie") {
            println!("cookie: {}", String::from_utf8_lossy(cookie));
        }

        println!("keep-alive: {}", message.keep_alive);
    }
}
