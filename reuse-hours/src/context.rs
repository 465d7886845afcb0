use crate::localization::{Localize, NoLocation};

/// All the context attached to an hours expression that can alter its
/// evaluation semantics.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Context<L = NoLocation> {
    pub locale: L,
}

impl<L> Context<L> {
    /// Attach a new locale component to this context.
    ///
    /// ```
    /// use reuse_hours::Context;
    /// use reuse_hours::localization::TzLocation;
    ///
    /// let ctx = Context::default().with_locale(TzLocation::new(chrono::Utc));
    /// assert_eq!(ctx.locale.get_timezone(), &chrono::Utc);
    /// ```
    pub fn with_locale<L2: Localize>(self, locale: L2) -> Context<L2> {
        Context { locale }
    }
}

impl Default for Context<NoLocation> {
    fn default() -> Self {
        Self { locale: NoLocation }
    }
}
