use serde_derive::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
    Skip,
    #[serde(rename = "not executed")]
    NotExecuted,
}

impl Status {
    /// Spec level status. A failure wins over a skip.
    pub fn from_flags(failed: bool, skipped: bool) -> Self {
        if failed {
            Status::Fail
        } else if skipped {
            Status::Skip
        } else {
            Status::Pass
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    Assertion,
    Verification,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_dominates_skipped() {
        assert_eq!(Status::from_flags(true, true), Status::Fail);
        assert_eq!(Status::from_flags(true, false), Status::Fail);
        assert_eq!(Status::from_flags(false, true), Status::Skip);
        assert_eq!(Status::from_flags(false, false), Status::Pass);
    }

    #[test]
    fn test_status_names() {
        assert_eq!(serde_yaml::to_string(&Status::NotExecuted).unwrap(), "not executed\n");
        assert_eq!(serde_yaml::to_string(&Status::Skip).unwrap(), "skip\n");
        assert_eq!(serde_yaml::to_string(&ErrorType::Verification).unwrap(), "verification\n");
    }
}
