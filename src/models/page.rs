//! Pages the router can mount.

/// A routable page.
///
/// Page bodies live in `components::pages`; this type only identifies them so
/// the route table stays plain data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page: `/`
    Home,
    /// Account overview
    Account,
    /// Account deletion confirmation
    DeleteAccount,
    /// Sign-out flow
    SignOut,
    /// Identity provider redirect target
    AuthCallback,
    /// Email subscription verification
    VerifySubscription,
}

impl Page {
    /// Every page, in route table order.
    #[cfg(test)]
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Account,
        Page::DeleteAccount,
        Page::SignOut,
        Page::AuthCallback,
        Page::VerifySubscription,
    ];

    /// Title shown in the navbar while this page is mounted.
    ///
    /// The home page leaves the title region empty.
    pub fn title(self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::Account => Some("Account"),
            Self::DeleteAccount => Some("Delete Account"),
            Self::SignOut => Some("Sign Out"),
            Self::AuthCallback => Some("Signing In"),
            Self::VerifySubscription => Some("Verify Subscription"),
        }
    }

    /// Heading rendered at the top of the page body.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Home => "Welcome to SaintSpace",
            Self::Account => "Your Account",
            Self::DeleteAccount => "Delete Your Account",
            Self::SignOut => "Signing Out",
            Self::AuthCallback => "Completing Sign In",
            Self::VerifySubscription => "Verifying Your Subscription",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_has_no_title() {
        assert_eq!(Page::Home.title(), None);
        for page in Page::ALL.into_iter().filter(|p| *p != Page::Home) {
            assert!(page.title().is_some(), "{page:?} should have a title");
        }
    }
}
