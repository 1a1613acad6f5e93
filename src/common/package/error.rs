use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("package index refresh failed ({}): {}", describe_status(.status), .stderr.trim())]
    UpdateFailed { status: Option<i32>, stderr: String },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_failed_message() {
        let err = BackendError::UpdateFailed {
            status: Some(100),
            stderr: "E: Could not get lock\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "package index refresh failed (exit code 100): E: Could not get lock"
        );

        let err = BackendError::UpdateFailed {
            status: None,
            stderr: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
    }
}
