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

//! URL sub-parser.
//!
//! The request target is fed one byte at a time while the request line is being parsed. Component
//! boundaries are tracked as `(offset, length)` pairs into the target so that they survive the
//! target being split across any number of streams. No percent-decoding or normalization is done.

use crate::byte::{ is_authority, is_host, is_url };

/// URL errors.
#[derive(Clone,Copy,Debug,PartialEq,Eq,thiserror::Error)]
pub enum UrlError {
    /// `CONNECT` target is not exactly `host:port`.
    #[error("CONNECT target must be host:port")]
    Authority,

    /// Invalid URL on byte `u8`.
    #[error("invalid URL on byte {0}")]
    Character(u8),

    /// Missing or invalid host.
    #[error("invalid URL host")]
    Host,

    /// URL ended before a path or host was found.
    #[error("incomplete URL")]
    Incomplete,

    /// Missing or invalid port.
    #[error("invalid URL port")]
    Port,
}

/// URL components.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UrlField {
    /// Schema, such as `http`.
    Schema,

    /// Host name or address. IPv6 addresses are reported without brackets.
    Host,

    /// Port.
    Port,

    /// Path.
    Path,

    /// Query string, without the leading `?`.
    Query,

    /// Fragment, without the leading `#`.
    Fragment,

    /// User information preceding `@`.
    UserInfo,
}

/// Component boundaries of a parsed URL.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UrlFields {
    fields: [Option<(usize, usize)>; 7],
    ipv6:   bool,
    port:   Option<u16>,
}

impl UrlFields {
    /// Retrieve the `(offset, length)` pair of `field`.
    pub fn get(&self, field: UrlField) -> Option<(usize, usize)> {
        self.fields[field as usize]
    }

    /// Indicates that the host is a bracketed IPv6 address.
    pub fn is_ipv6(&self) -> bool {
        self.ipv6
    }

    /// Retrieve the numeric port.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    fn extend(&mut self, field: UrlField) {
        if let Some((_, ref mut length)) = self.fields[field as usize] {
            *length += 1;
        }
    }

    fn set(&mut self, field: UrlField, offset: usize, length: usize) {
        self.fields[field as usize] = Some((offset, length));
    }
}

// -------------------------------------------------------------------------------------------------

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
enum UrlState {
    Start,
    Schema,
    SchemaSlash,
    SchemaSlashSlash,
    ServerStart,
    Server,
    ServerWithAt,
    Path,
    QueryStart,
    Query,
    FragmentStart,
    Fragment,
}

impl UrlState {
    fn field(self) -> Option<UrlField> {
        match self {
            UrlState::Schema                         => Some(UrlField::Schema),
            UrlState::Server | UrlState::ServerWithAt => Some(UrlField::Host),
            UrlState::Path                           => Some(UrlField::Path),
            UrlState::Query                          => Some(UrlField::Query),
            UrlState::Fragment                       => Some(UrlField::Fragment),
            _                                        => None
        }
    }

    fn next(self, byte: u8) -> Option<UrlState> {
        match self {
            UrlState::Start => {
                if byte == b'/' || byte == b'*' {
                    Some(UrlState::Path)
                } else if byte.is_ascii_alphabetic() {
                    Some(UrlState::Schema)
                } else {
                    None
                }
            },
            UrlState::Schema => {
                if byte.is_ascii_alphanumeric() || byte == b'+' || byte == b'-' || byte == b'.' {
                    Some(UrlState::Schema)
                } else if byte == b':' {
                    Some(UrlState::SchemaSlash)
                } else {
                    None
                }
            },
            UrlState::SchemaSlash if byte == b'/' => Some(UrlState::SchemaSlashSlash),
            UrlState::SchemaSlashSlash if byte == b'/' => Some(UrlState::ServerStart),
            UrlState::SchemaSlash | UrlState::SchemaSlashSlash => None,
            UrlState::ServerWithAt if byte == b'@' => None,
            UrlState::ServerStart | UrlState::Server | UrlState::ServerWithAt => {
                match byte {
                    b'/'                     => Some(UrlState::Path),
                    b'?'                     => Some(UrlState::QueryStart),
                    b'@'                     => Some(UrlState::ServerWithAt),
                    _ if is_authority(byte)  => Some(UrlState::Server),
                    _                        => None
                }
            },
            UrlState::Path => {
                match byte {
                    b'?'              => Some(UrlState::QueryStart),
                    b'#'              => Some(UrlState::FragmentStart),
                    _ if is_url(byte) => Some(UrlState::Path),
                    _                 => None
                }
            },
            UrlState::QueryStart | UrlState::Query => {
                match byte {
                    b'#'                            => Some(UrlState::FragmentStart),
                    _ if byte == b'?' || is_url(byte) => Some(UrlState::Query),
                    _                               => None
                }
            },
            UrlState::FragmentStart => {
                match byte {
                    b'#'                            => Some(UrlState::FragmentStart),
                    _ if byte == b'?' || is_url(byte) => Some(UrlState::Fragment),
                    _                               => None
                }
            },
            UrlState::Fragment => {
                if byte == b'?' || byte == b'#' || is_url(byte) {
                    Some(UrlState::Fragment)
                } else {
                    None
                }
            }
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Incremental URL parser.
///
/// Feed each target byte with [`next()`](#method.next), then call
/// [`finish()`](#method.finish) with the complete target to split the authority into user
/// information, host and port.
#[derive(Clone,Debug)]
pub struct UrlParser {
    connect: bool,
    fields:  UrlFields,
    index:   usize,
    last:    Option<UrlField>,
    state:   UrlState,
}

impl UrlParser {
    /// Create a new `UrlParser`.
    ///
    /// When `connect` is `true` the target is expected in authority-form.
    pub fn new(connect: bool) -> UrlParser {
        UrlParser {
            connect,
            fields:  UrlFields::default(),
            index:   0,
            last:    None,
            state:   if connect { UrlState::ServerStart } else { UrlState::Start },
        }
    }

    /// Retrieve the amount of bytes parsed so far.
    pub fn len(&self) -> usize {
        self.index
    }

    /// Indicates that no bytes have been parsed.
    pub fn is_empty(&self) -> bool {
        self.index == 0
    }

    /// Parse the next target byte.
    pub fn next(&mut self, byte: u8) -> Result<(), UrlError> {
        let state = self.state.next(byte).ok_or(UrlError::Character(byte))?;
        let field = state.field();

        if let Some(field) = field {
            if self.last == Some(field) {
                self.fields.extend(field);
            } else {
                self.fields.set(field, self.index, 1);
            }
        }

        self.index += 1;
        self.last   = field;
        self.state  = state;

        Ok(())
    }

    /// Finish parsing and retrieve the component boundaries.
    ///
    /// `url` must hold every byte previously passed to `next()`.
    pub fn finish(&self, url: &[u8]) -> Result<UrlFields, UrlError> {
        debug_assert_eq!(url.len(), self.index);

        match self.state {
            UrlState::Start | UrlState::Schema | UrlState::SchemaSlash
            | UrlState::SchemaSlashSlash => {
                return Err(UrlError::Incomplete);
            },
            _ => {}
        }

        let mut fields = self.fields;

        if let Some((offset, length)) = fields.get(UrlField::Host) {
            parse_authority(url, offset, length, &mut fields)?;
        } else if self.connect || fields.get(UrlField::Schema).is_some() {
            return Err(UrlError::Host);
        }

        if self.connect {
            if fields.port.is_none() {
                return Err(UrlError::Port);
            }

            if fields.get(UrlField::Schema).is_some()
            || fields.get(UrlField::Path).is_some()
            || fields.get(UrlField::Query).is_some()
            || fields.get(UrlField::Fragment).is_some()
            || fields.get(UrlField::UserInfo).is_some() {
                return Err(UrlError::Authority);
            }
        }

        Ok(fields)
    }
}

/// Split the authority span at `offset` into user information, host and port.
fn parse_authority(url: &[u8], offset: usize, length: usize, fields: &mut UrlFields)
-> Result<(), UrlError> {
    let server = &url[offset..offset + length];
    let mut start = 0;

    if let Some(at) = server.iter().position(|&byte| byte == b'@') {
        if server[..at].iter().any(|&byte| byte == b'[' || byte == b']') {
            return Err(UrlError::Host);
        }

        if at > 0 {
            fields.set(UrlField::UserInfo, offset, at);
        }

        start = at + 1;
    }

    let host = &server[start..];
    let base = offset + start;

    let rest = if host.first() == Some(&b'[') {
        let close = host.iter()
                        .position(|&byte| byte == b']')
                        .ok_or(UrlError::Host)?;

        if !is_ipv6(&host[1..close]) {
            return Err(UrlError::Host);
        }

        fields.ipv6 = true;
        fields.set(UrlField::Host, base + 1, close - 1);

        close + 1
    } else {
        let end = host.iter()
                      .position(|&byte| byte == b':')
                      .unwrap_or(host.len());

        if end == 0 || !host[..end].iter().all(|&byte| is_host(byte)) {
            return Err(UrlError::Host);
        }

        fields.set(UrlField::Host, base, end);

        end
    };

    if rest == host.len() {
        return Ok(());
    } else if host[rest] != b':' {
        return Err(UrlError::Host);
    }

    let digits = &host[rest + 1..];

    if digits.is_empty() || digits.len() > 5 || !digits.iter().all(|&byte| is_digit!(byte)) {
        return Err(UrlError::Port);
    }

    let port = digits.iter()
                     .fold(0u32, |port, &byte| port * 10 + u32::from(byte - b'0'));

    if port > u32::from(u16::MAX) {
        return Err(UrlError::Port);
    }

    fields.port = Some(port as u16);
    fields.set(UrlField::Port, base + rest + 1, digits.len());

    Ok(())
}

/// Indicates that `address` is an IPv6 address, optionally carrying a `%` zone identifier.
fn is_ipv6(address: &[u8]) -> bool {
    let (address, zone) = match address.iter().position(|&byte| byte == b'%') {
        Some(index) => (&address[..index], Some(&address[index + 1..])),
        None        => (address, None)
    };

    if address.is_empty()
    || !address.iter().all(|&byte| byte.is_ascii_hexdigit() || byte == b':' || byte == b'.') {
        return false;
    }

    match zone {
        Some(zone) => !zone.is_empty() && zone.iter().all(|&byte| is_host(byte)),
        None       => true
    }
}

/// Parse a complete request target.
///
/// # Arguments
///
/// **`url`**
///
/// The request target.
///
/// **`connect`**
///
/// Indicates that the target belongs to a `CONNECT` request and must be in authority-form.
///
/// # Examples
///
/// ```
/// use http_feed::url::{ parse_url, Url };
///
/// let fields = parse_url(b"http://example.com:8080/index.html?a=1#top", false).unwrap();
/// let url    = Url::new(b"http://example.com:8080/index.html?a=1#top", &fields);
///
/// assert_eq!(url.schema(), Some(&b"http"[..]));
/// assert_eq!(url.port(), Some(8080));
/// assert_eq!(url.path(), Some(&b"/index.html"[..]));
/// assert_eq!(url.query(), Some(&b"a=1"[..]));
/// assert_eq!(url.fragment(), Some(&b"top"[..]));
/// ```
pub fn parse_url(url: &[u8], connect: bool) -> Result<UrlFields, UrlError> {
    let mut parser = UrlParser::new(connect);

    for &byte in url {
        parser.next(byte)?;
    }

    parser.finish(url)
}

// -------------------------------------------------------------------------------------------------

/// Host types.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Host<'a> {
    /// Registered host name.
    Hostname(&'a [u8]),

    /// IPv4 address.
    IPv4(&'a [u8]),

    /// IPv6 address, without brackets.
    IPv6(&'a [u8]),
}

/// Parsed URL.
///
/// A view that pairs the URL bytes with their component boundaries.
#[derive(Clone,Copy,Debug)]
pub struct Url<'a> {
    bytes:  &'a [u8],
    fields: &'a UrlFields,
}

impl<'a> Url<'a> {
    /// Create a new `Url` from the URL bytes and the boundaries parsed from them.
    pub fn new(bytes: &'a [u8], fields: &'a UrlFields) -> Url<'a> {
        Url {
            bytes,
            fields,
        }
    }

    /// Retrieve the complete URL.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Retrieve the bytes of `field`.
    pub fn field(&self, field: UrlField) -> Option<&'a [u8]> {
        self.fields
            .get(field)
            .map(|(offset, length)| &self.bytes[offset..offset + length])
    }

    /// Retrieve the component boundaries.
    pub fn fields(&self) -> &'a UrlFields {
        self.fields
    }

    /// Retrieve the fragment.
    pub fn fragment(&self) -> Option<&'a [u8]> {
        self.field(UrlField::Fragment)
    }

    /// Retrieve the host.
    pub fn host(&self) -> Option<Host<'a>> {
        let host = self.field(UrlField::Host)?;

        if self.fields.is_ipv6() {
            Some(Host::IPv6(host))
        } else if is_ipv4(host) {
            Some(Host::IPv4(host))
        } else {
            Some(Host::Hostname(host))
        }
    }

    /// Retrieve the path.
    pub fn path(&self) -> Option<&'a [u8]> {
        self.field(UrlField::Path)
    }

    /// Retrieve the port.
    pub fn port(&self) -> Option<u16> {
        self.fields.port()
    }

    /// Retrieve the query string.
    pub fn query(&self) -> Option<&'a [u8]> {
        self.field(UrlField::Query)
    }

    /// Retrieve the schema.
    pub fn schema(&self) -> Option<&'a [u8]> {
        self.field(UrlField::Schema)
    }

    /// Retrieve the user information.
    pub fn userinfo(&self) -> Option<&'a [u8]> {
        self.field(UrlField::UserInfo)
    }
}

fn is_ipv4(host: &[u8]) -> bool {
    let mut count = 0;

    for octet in host.split(|&byte| byte == b'.') {
        count += 1;

        if octet.is_empty() || octet.len() > 3 || !octet.iter().all(|&byte| is_digit!(byte)) {
            return false;
        }

        let value = octet.iter()
                         .fold(0u16, |value, &byte| value * 10 + u16::from(byte - b'0'));

        if value > 255 {
            return false;
        }
    }

    count == 4
}
