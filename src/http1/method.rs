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

//! HTTP 1.x request methods.

use std::fmt;

/// Request method.
#[derive(Clone,Debug,PartialEq,Eq,Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    Acl,
    Bind,
    Checkout,
    Connect,
    Copy,
    Delete,
    Get,
    Head,
    Link,
    Lock,
    MSearch,
    Merge,
    Mkactivity,
    Mkcalendar,
    Mkcol,
    Move,
    Notify,
    Options,
    Patch,
    Post,
    Propfind,
    Proppatch,
    Purge,
    Put,
    Rebind,
    Report,
    Search,
    Source,
    Subscribe,
    Trace,
    Unbind,
    Unlink,
    Unlock,
    Unsubscribe,

    /// Method outside of the known set.
    Extension(String),
}

impl Method {
    /// Parse a method token.
    ///
    /// Unknown tokens become `Method::Extension`. Known methods are case-sensitive.
    pub fn from_bytes(token: &[u8]) -> Method {
        match token {
            b"ACL"         => Method::Acl,
            b"BIND"        => Method::Bind,
            b"CHECKOUT"    => Method::Checkout,
            b"CONNECT"     => Method::Connect,
            b"COPY"        => Method::Copy,
            b"DELETE"      => Method::Delete,
            b"GET"         => Method::Get,
            b"HEAD"        => Method::Head,
            b"LINK"        => Method::Link,
            b"LOCK"        => Method::Lock,
            b"M-SEARCH"    => Method::MSearch,
            b"MERGE"       => Method::Merge,
            b"MKACTIVITY"  => Method::Mkactivity,
            b"MKCALENDAR"  => Method::Mkcalendar,
            b"MKCOL"       => Method::Mkcol,
            b"MOVE"        => Method::Move,
            b"NOTIFY"      => Method::Notify,
            b"OPTIONS"     => Method::Options,
            b"PATCH"       => Method::Patch,
            b"POST"        => Method::Post,
            b"PROPFIND"    => Method::Propfind,
            b"PROPPATCH"   => Method::Proppatch,
            b"PURGE"       => Method::Purge,
            b"PUT"         => Method::Put,
            b"REBIND"      => Method::Rebind,
            b"REPORT"      => Method::Report,
            b"SEARCH"      => Method::Search,
            b"SOURCE"      => Method::Source,
            b"SUBSCRIBE"   => Method::Subscribe,
            b"TRACE"       => Method::Trace,
            b"UNBIND"      => Method::Unbind,
            b"UNLINK"      => Method::Unlink,
            b"UNLOCK"      => Method::Unlock,
            b"UNSUBSCRIBE" => Method::Unsubscribe,
            other          => Method::Extension(String::from_utf8_lossy(other).into_owned())
        }
    }

    /// Retrieve the method token.
    pub fn as_str(&self) -> &str {
        match *self {
            Method::Acl          => "ACL",
            Method::Bind         => "BIND",
            Method::Checkout     => "CHECKOUT",
            Method::Connect      => "CONNECT",
            Method::Copy         => "COPY",
            Method::Delete       => "DELETE",
            Method::Get          => "GET",
            Method::Head         => "HEAD",
            Method::Link         => "LINK",
            Method::Lock         => "LOCK",
            Method::MSearch      => "M-SEARCH",
            Method::Merge        => "MERGE",
            Method::Mkactivity   => "MKACTIVITY",
            Method::Mkcalendar   => "MKCALENDAR",
            Method::Mkcol        => "MKCOL",
            Method::Move         => "MOVE",
            Method::Notify       => "NOTIFY",
            Method::Options      => "OPTIONS",
            Method::Patch        => "PATCH",
            Method::Post         => "POST",
            Method::Propfind     => "PROPFIND",
            Method::Proppatch    => "PROPPATCH",
            Method::Purge        => "PURGE",
            Method::Put          => "PUT",
            Method::Rebind       => "REBIND",
            Method::Report       => "REPORT",
            Method::Search       => "SEARCH",
            Method::Source       => "SOURCE",
            Method::Subscribe    => "SUBSCRIBE",
            Method::Trace        => "TRACE",
            Method::Unbind       => "UNBIND",
            Method::Unlink       => "UNLINK",
            Method::Unlock       => "UNLOCK",
            Method::Unsubscribe  => "UNSUBSCRIBE",
            Method::Extension(ref token) => token
        }
    }

    /// Indicates that this is an extension method.
    pub fn is_extension(&self) -> bool {
        matches!(*self, Method::Extension(_))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
