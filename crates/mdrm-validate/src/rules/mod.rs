pub(crate) mod historical;
pub(crate) mod range;
pub(crate) mod relational;

/// Body of a verdict before it is attached to a rule: either the check
/// held, or it failed with a message fit for an end user.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Check {
    Pass,
    Fail(String),
}
