//! Page Accessors
//!
//! The initiator never touches browser globals directly. Everything it needs
//! from the page comes through these traits, implemented over `web_sys` in
//! `crewup-web` and by test doubles here.

/// The browser page hosting the checkout buttons
pub trait Page {
    /// Path plus query string of the current page, e.g. `/pricing/?ref=nav`
    fn location(&self) -> String;

    /// Send the browser to `url`
    fn navigate(&self, url: &str);

    /// Blocking user-facing message
    fn alert(&self, message: &str);

    /// Raw `document.cookie` string
    fn cookies(&self) -> String;
}

/// Client-side hint of whether the user is signed in.
///
/// The server does the real check; this only avoids a pointless request.
pub trait AuthIndicator {
    fn is_authenticated(&self) -> bool;
}

impl<F> AuthIndicator for F
where
    F: Fn() -> bool,
{
    fn is_authenticated(&self) -> bool {
        self()
    }
}

/// Fixed authentication state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticAuth(pub bool);

impl AuthIndicator for StaticAuth {
    fn is_authenticated(&self) -> bool {
        self.0
    }
}

/// Login URL that returns to `location` afterwards
pub fn login_redirect_url(login_url: &str, location: &str) -> String {
    format!("{login_url}?next={}", urlencoding::encode(location))
}
