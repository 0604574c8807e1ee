//! Email verification and password reset links

use crate::domain::value_objects::{LinkSubject, TokenLifetime};
use crate::errors::DomainResult;

use super::service::TokenService;

/// Endpoint that consumes email verification tokens
pub const VERIFICATION_PATH: &str = "/v1.0/api/auth/verify";

/// Endpoint that consumes password reset tokens
pub const PASSWORD_RESET_PATH: &str = "/v1.0/api/auth/reset-password/email";

/// Hostname that gets the listening port appended in verification links
pub const LOCAL_HOSTNAME: &str = "localhost";

/// Lifetime of password reset tokens
pub const PASSWORD_RESET_LIFETIME: TokenLifetime = TokenLifetime::from_hours(5);

/// What link building needs to know about the inbound request
pub trait LinkContext {
    /// Protocol scheme, e.g. `https`
    fn scheme(&self) -> String;

    /// Declared hostname without port
    fn hostname(&self) -> String;

    /// Raw `Host` header, port included when the client sent one
    fn host_header(&self) -> Option<String>;
}

impl TokenService {
    /// Builds an email verification link over a default-lifetime token
    ///
    /// Local requests may omit the port, so `localhost` gets the listening
    /// port appended; any other hostname is used as given.
    pub fn build_verification_link<C>(&self, ctx: &C, subject: &LinkSubject) -> DomainResult<String>
    where
        C: LinkContext + ?Sized,
    {
        let token = self.issue(&subject.to_payload())?;
        let hostname = ctx.hostname();
        let host = if hostname == LOCAL_HOSTNAME {
            format!("{}:{}", hostname, self.port())
        } else {
            hostname
        };

        Ok(format!("{}://{}{}?token={}", ctx.scheme(), host, VERIFICATION_PATH, token))
    }

    /// Builds a password reset link over a five hour token
    ///
    /// Uses the `Host` header verbatim, falling back to the hostname when the
    /// request carried none.
    pub fn build_password_reset_link<C>(
        &self,
        ctx: &C,
        subject: &LinkSubject,
    ) -> DomainResult<String>
    where
        C: LinkContext + ?Sized,
    {
        let token = self.issue_with_lifetime(&subject.to_payload(), PASSWORD_RESET_LIFETIME)?;
        let host = ctx.host_header().unwrap_or_else(|| ctx.hostname());

        Ok(format!("{}://{}{}?token={}", ctx.scheme(), host, PASSWORD_RESET_PATH, token))
    }
}
