use std::str::FromStr;

/// Policy for intermediate messages that are not set while walking a path
/// for an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreatePolicy {
    /// Fail with [`FieldError::IntermediateNotSet`](crate::FieldError::IntermediateNotSet).
    #[default]
    FailIfAbsent,
    /// Allocate an empty message of the declared type, attach it to the
    /// parent and keep walking.
    CreateMissing,
}

impl FromStr for CreatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fail" => Ok(CreatePolicy::FailIfAbsent),
            "create" => Ok(CreatePolicy::CreateMissing),
            other => Err(format!(
                "unknown create policy '{other}', expected 'fail' or 'create'"
            )),
        }
    }
}
