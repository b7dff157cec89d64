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

//! HTTP 1.x parser configuration.

/// Parser configuration.
///
/// The configuration is handed to [`Parser::with_config()`](struct.Parser.html#method.with_config)
/// and stays fixed for the lifetime of the parser.
///
/// # Examples
///
/// ```
/// use http_feed::http1::ParserConfig;
///
/// let config = ParserConfig::default()
///              .max_header_count(32)
///              .allow_extension_methods(true);
///
/// assert_eq!(config.get_max_header_count(), 32);
/// assert!(config.get_strict_framing());
/// ```
#[derive(Clone,Debug,PartialEq,Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    allow_extension_methods: bool,
    max_chunk_size:          u64,
    max_field_length:        usize,
    max_head_size:           usize,
    max_header_count:        usize,
    strict_framing:          bool,
}

impl Default for ParserConfig {
    fn default() -> ParserConfig {
        ParserConfig {
            allow_extension_methods: false,
            max_chunk_size:          0xFFFF_FFFF,
            max_field_length:        8 * 1024,
            max_head_size:           80 * 1024,
            max_header_count:        128,
            strict_framing:          true,
        }
    }
}

impl ParserConfig {
    /// Accept request methods outside of the known set.
    #[must_use]
    pub fn allow_extension_methods(mut self, allow: bool) -> ParserConfig {
        self.allow_extension_methods = allow;
        self
    }

    /// Largest declared chunk size.
    #[must_use]
    pub fn max_chunk_size(mut self, size: u64) -> ParserConfig {
        self.max_chunk_size = size;
        self
    }

    /// Largest header name, header value, method, request target, reason phrase, or chunk
    /// extension.
    #[must_use]
    pub fn max_field_length(mut self, length: usize) -> ParserConfig {
        self.max_field_length = length;
        self
    }

    /// Largest start line plus header section, and largest trailer section.
    #[must_use]
    pub fn max_head_size(mut self, size: usize) -> ParserConfig {
        self.max_head_size = size;
        self
    }

    /// Largest amount of headers and trailers per message.
    #[must_use]
    pub fn max_header_count(mut self, count: usize) -> ParserConfig {
        self.max_header_count = count;
        self
    }

    /// Reject messages with ambiguous framing instead of picking one length signal.
    #[must_use]
    pub fn strict_framing(mut self, strict: bool) -> ParserConfig {
        self.strict_framing = strict;
        self
    }

    /// Indicates that extension methods are accepted.
    pub fn get_allow_extension_methods(&self) -> bool {
        self.allow_extension_methods
    }

    /// Retrieve the largest declared chunk size.
    pub fn get_max_chunk_size(&self) -> u64 {
        self.max_chunk_size
    }

    /// Retrieve the largest field length.
    pub fn get_max_field_length(&self) -> usize {
        self.max_field_length
    }

    /// Retrieve the largest head size.
    pub fn get_max_head_size(&self) -> usize {
        self.max_head_size
    }

    /// Retrieve the largest amount of headers.
    pub fn get_max_header_count(&self) -> usize {
        self.max_header_count
    }

    /// Indicates that ambiguous framing is rejected.
    pub fn get_strict_framing(&self) -> bool {
        self.strict_framing
    }
}
