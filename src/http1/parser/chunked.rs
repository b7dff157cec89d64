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

//! Chunked transfer coding states.

use super::{ Parser, F_TRAILING };

use crate::byte::is_field_value;
use crate::fsm::{ ParserValue, Success };
use crate::http1::http_handler::HttpHandler;
use crate::http1::parser_error::ParserError;
use crate::http1::parser_state::ParserState;
use byte_slice::ByteStream;

impl Parser {
    /// Add a hexadecimal digit to the chunk length.
    #[inline]
    fn push_chunk_digit(&mut self, byte: u8) -> Result<(), ParserError> {
        let digit = u64::from(hex_to_byte!(byte));

        match self.length.checked_mul(16).and_then(|length| length.checked_add(digit)) {
            Some(length) if length <= self.config.get_max_chunk_size() => {
                self.length = length;

                Ok(())
            },
            _ => {
                Err(ParserError::ChunkLengthOverflow)
            }
        }
    }

    #[inline]
    pub(crate) fn chunk_length1<T: HttpHandler>(&mut self, _handler: &mut T,
                                                context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_hex!(context.byte) {
            self.length           = 0;
            self.extension_length = 0;

            self.push_chunk_digit(context.byte)?;

            transition!(self, context, ChunkLength2);
        }

        exit_error!(ChunkLength, context.byte);
    }

    #[inline]
    pub(crate) fn chunk_length2<T: HttpHandler>(&mut self, _handler: &mut T,
                                                context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        loop {
            exit_if_eos!(self, context);
            bs_next!(context);

            if !is_hex!(context.byte) {
                break;
            }

            self.push_chunk_digit(context.byte)?;
        }

        match context.byte {
            b'\r' => transition!(self, context, ChunkLengthLf),
            b';' => transition!(self, context, ChunkExtension),
            b' ' | b'\t' => transition!(self, context, ChunkLengthSpace),
            byte => exit_error!(ChunkLength, byte)
        }
    }

    #[inline]
    pub(crate) fn chunk_length_space<T: HttpHandler>(&mut self, _handler: &mut T,
                                                     context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        consume_linear_space!(self, context);
        bs_next!(context);

        match context.byte {
            b'\r' => transition!(self, context, ChunkLengthLf),
            b';' => transition!(self, context, ChunkExtension),
            byte => exit_error!(ChunkLength, byte)
        }
    }

    #[inline]
    pub(crate) fn chunk_extension<T: HttpHandler>(&mut self, _handler: &mut T,
                                                  context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        // extensions are skipped
        loop {
            exit_if_eos!(self, context);
            bs_next!(context);

            if context.byte == b'\r' {
                transition!(self, context, ChunkLengthLf);
            } else if !is_field_value(context.byte) {
                exit_error!(ChunkExtension, context.byte);
            }

            self.extension_length += 1;

            if self.extension_length > self.config.get_max_field_length() {
                exit_error!(HeaderTooLarge);
            }
        }
    }

    #[inline]
    pub(crate) fn chunk_length_lf<T: HttpHandler>(&mut self, handler: &mut T,
                                                  context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte != b'\n' {
            exit_error!(CrlfSequence, context.byte);
        }

        if self.length == 0 {
            // last chunk, trailers follow
            set_flag!(self, F_TRAILING);

            self.head_size = 0;

            set_state!(self, HeaderLineStart);
        } else {
            set_state!(self, ChunkData);
        }

        callback_result!(self, context, handler.on_chunk_length(self.length));
    }

    #[inline]
    pub(crate) fn chunk_data<T: HttpHandler>(&mut self, handler: &mut T, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);

        let available = bs_available!(context);

        if available as u64 >= self.length {
            bs_jump!(context, self.length as usize);

            self.length = 0;

            set_state!(self, ChunkDataCr);
        } else {
            bs_jump!(context, available);

            self.length -= available as u64;
        }

        callback_result!(self, context, handler.on_body(bs_slice!(context)));
    }

    #[inline]
    pub(crate) fn chunk_data_cr<T: HttpHandler>(&mut self, _handler: &mut T,
                                                context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte == b'\r' {
            transition!(self, context, ChunkDataLf);
        }

        exit_error!(ChunkData, context.byte);
    }

    #[inline]
    pub(crate) fn chunk_data_lf<T: HttpHandler>(&mut self, _handler: &mut T,
                                                context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte == b'\n' {
            transition!(self, context, ChunkLength1);
        }

        exit_error!(ChunkData, context.byte);
    }
}
