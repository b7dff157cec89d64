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

//! Stream collection macros.

/// Collect bytes into the parser owned `$buffer` until `$stop` yields `true`.
///
/// Exit with `$error` when a byte fails `$allow`, and with `ParserError::HeaderTooLarge` when the
/// buffer would grow beyond `$limit` bytes. At end of stream the collected bytes are stored and the
/// parser exits with `Success::Eos`. The stop byte is not stored.
macro_rules! collect_buffer {
    ($parser:expr, $context:expr, $buffer:ident, $limit:expr, $stop:expr, $allow:expr,
     $error:ident) => ({
        loop {
            if bs_is_eos!($context) {
                $parser.$buffer.extend_from_slice(bs_slice!($context));

                exit_eos!($parser, $context);
            }

            bs_next!($context);

            if $stop {
                break;
            } else if !$allow {
                exit_error!($error, $context.byte);
            } else if $parser.$buffer.len() + ($context.stream_index - $context.mark_index)
                      > $limit {
                exit_error!(HeaderTooLarge);
            }
        }

        $parser.$buffer.extend_from_slice(bs_slice_ignore!($context));
    });
}

/// Collect all token bytes into `$buffer`.
///
/// Exit the collection loop when `$stop` yields `true`.
macro_rules! collect_tokens {
    ($parser:expr, $context:expr, $buffer:ident, $limit:expr, $stop:expr, $error:ident) => ({
        collect_buffer!(
            $parser,
            $context,
            $buffer,
            $limit,
            $stop,
            is_token($context.byte),
            $error
        );
    });
}

/// Collect all field value bytes into `$buffer`.
///
/// Exit the collection loop when a carriage return is found.
macro_rules! collect_field {
    ($parser:expr, $context:expr, $buffer:ident, $limit:expr, $error:ident) => ({
        collect_buffer!(
            $parser,
            $context,
            $buffer,
            $limit,
            $context.byte == b'\r',
            is_field_value($context.byte),
            $error
        );
    });
}

/// Consume all linear white space bytes.
///
/// Exit the collection loop when a non-linear white space byte is found. The byte is replayed.
macro_rules! consume_linear_space {
    ($parser:expr, $context:expr) => ({
        loop {
            exit_if_eos!($parser, $context);
            bs_next!($context);

            if !is_space!($context.byte) {
                bs_replay!($context);

                break;
            }
        }
    });
}
