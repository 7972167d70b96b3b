use makuta_client::ClientError;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = Vec::with_capacity(error.recovery_steps.len() + 4);
    lines.push(format!("Error: {}", error.code));
    lines.push(format!("  {}", error.message));
    lines.push(String::new());
    lines.push("What to do next:".to_string());

    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}
