//! Request token resolution
//!
//! A request may carry its token in a cookie, one of several headers, or the
//! body. Sources are tried in [`TokenSource::PRECEDENCE`] order and the first
//! non-empty value wins.

/// Name of the cookie, custom header and body field carrying a token
pub const TOKEN_FIELD: &str = "token";

const AUTHORIZATION_HEADER: &str = "authorization";
const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Read access to the places a request can carry a token
pub trait TokenCarrier {
    /// Cookie value by name
    fn cookie(&self, name: &str) -> Option<String>;

    /// Header value by case-insensitive name
    fn header(&self, name: &str) -> Option<String>;

    /// String field of the parsed body
    fn body_field(&self, name: &str) -> Option<String>;
}

/// One place a token can be found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenSource {
    /// `token` cookie
    Cookie,
    /// `Authorization` header, scheme prefix stripped
    Authorization,
    /// `x-access-token` header
    AccessTokenHeader,
    /// `token` header
    TokenHeader,
    /// `token` body field
    Body,
}

impl TokenSource {
    /// Order in which sources are consulted
    pub const PRECEDENCE: [TokenSource; 5] = [
        TokenSource::Cookie,
        TokenSource::Authorization,
        TokenSource::AccessTokenHeader,
        TokenSource::TokenHeader,
        TokenSource::Body,
    ];

    /// Reads this source, treating empty values as absent
    pub fn extract<C>(self, carrier: &C) -> Option<String>
    where
        C: TokenCarrier + ?Sized,
    {
        let value = match self {
            TokenSource::Cookie => carrier.cookie(TOKEN_FIELD),
            TokenSource::Authorization => carrier
                .header(AUTHORIZATION_HEADER)
                .map(|value| authorization_credentials(&value)),
            TokenSource::AccessTokenHeader => carrier.header(ACCESS_TOKEN_HEADER),
            TokenSource::TokenHeader => carrier.header(TOKEN_FIELD),
            TokenSource::Body => carrier.body_field(TOKEN_FIELD),
        };

        value.filter(|value| !value.is_empty())
    }
}

/// Credentials part of an `Authorization` value
///
/// The second space-separated field: `"Bearer abc"` and `"Bearer abc def"`
/// both yield `"abc"`. When that field is missing or empty (`"abc"`,
/// `"Bearer "`, `"Bearer  abc"`) the value is returned whole.
pub fn authorization_credentials(value: &str) -> String {
    value
        .split(' ')
        .nth(1)
        .filter(|credentials| !credentials.is_empty())
        .unwrap_or(value)
        .to_string()
}

/// Returns the first token found, or `None` for anonymous requests
pub fn resolve_token<C>(carrier: &C) -> Option<String>
where
    C: TokenCarrier + ?Sized,
{
    resolve_token_with_source(carrier).map(|(_, token)| token)
}

/// Like [`resolve_token`], also reporting which source matched
pub fn resolve_token_with_source<C>(carrier: &C) -> Option<(TokenSource, String)>
where
    C: TokenCarrier + ?Sized,
{
    TokenSource::PRECEDENCE
        .iter()
        .find_map(|source| source.extract(carrier).map(|token| (*source, token)))
}
