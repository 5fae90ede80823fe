pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), String> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

/// Requires one of `codes` inside the local-area parentheses, e.g. `(11)`.
/// Values without a local segment pass.
pub fn local_code_in(codes: &[&str], message: impl Into<String>) -> Validator {
    let message = message.into();
    let codes: Vec<String> = codes.iter().map(|code| code.to_string()).collect();
    Box::new(move |value: &str| {
        let Some(open) = value.find('(') else {
            return Ok(());
        };
        let Some(close) = value[open..].find(')') else {
            return Err(message.clone());
        };
        let code = &value[open + 1..open + close];
        if codes.iter().any(|allowed| allowed == code) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_failure_wins() {
        let validators = vec![
            required("required"),
            local_code_in(&["11", "21"], "unknown area"),
        ];
        assert_eq!(run_validators(&validators, " "), Err("required".to_string()));
        assert_eq!(
            run_validators(&validators, "(31) 9876-5432"),
            Err("unknown area".to_string())
        );
        assert_eq!(run_validators(&validators, "(21) 9876-5432"), Ok(()));
    }

    #[test]
    fn local_code_skips_values_without_local_segment() {
        let validator = local_code_in(&["11"], "unknown area");
        assert_eq!(validator("9876-5432"), Ok(()));
        assert_eq!(validator("(11"), Err("unknown area".to_string()));
    }
}
