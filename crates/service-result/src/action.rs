//! Follow-up actions a caller can take after a request.

use serde::{Deserialize, Serialize};

/// Caller-supplied descriptor of a next step, such as retrying a failed
/// request or viewing a newly created resource.
///
/// The envelope never interprets `href` or `method`; both are passed through
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct FollowUpAction {
    id: String,
    title: String,
    href: String,
    method: String,
}

impl FollowUpAction {
    /// Create an action from its four descriptive parts.
    ///
    /// # Examples
    /// ```
    /// use service_result::FollowUpAction;
    ///
    /// let action = FollowUpAction::new("retry", "Try again", "https://api.example/orders", "POST");
    /// assert_eq!(action.method(), "POST");
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        href: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            href: href.into(),
            method: method.into(),
        }
    }

    /// Identifier for the action.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// User-facing label.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Address of the target resource.
    #[must_use]
    pub fn href(&self) -> &str {
        self.href.as_str()
    }

    /// Method the target resource accepts.
    #[must_use]
    pub fn method(&self) -> &str {
        self.method.as_str()
    }
}

/// Builds [`FollowUpAction`] values in place on a caller-owned list.
pub trait ActionsExt {
    /// Append an action built from its four parts.
    fn append_action(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        href: impl Into<String>,
        method: impl Into<String>,
    );
}

impl ActionsExt for Vec<FollowUpAction> {
    fn append_action(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        href: impl Into<String>,
        method: impl Into<String>,
    ) {
        self.push(FollowUpAction::new(id, title, href, method));
    }
}
