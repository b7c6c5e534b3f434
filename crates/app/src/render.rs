//! Plain-text presentation of quiz results.

use drivetest_domain::{AnswerCheck, HealthStatus, ImageRef, Test};

/// Formats a test for the terminal, one numbered line per answer.
pub fn render_test(test: &Test) -> String {
    let mut lines = vec![format!("Test {}", test.id()), test.description().to_string()];
    lines.extend(
        test.answers()
            .iter()
            .enumerate()
            .map(|(index, answer)| format!("  {}. {answer}", index + 1)),
    );
    if let Some(image) = test.image() {
        lines.push(format!("Image: {}", describe_image(image)));
    }
    lines.push(String::new());
    lines.join("\n")
}

fn describe_image(image: &ImageRef) -> String {
    match (image.as_url(), image.decode_base64()) {
        (Some(url), _) => url.to_string(),
        (None, Ok(bytes)) => format!("{} bytes inline", bytes.len()),
        (None, Err(_)) => image.as_str().to_string(),
    }
}

/// Formats an answer verdict. Unknown shapes are printed as JSON.
pub fn render_check(check: &AnswerCheck) -> String {
    match (check.description(), check.scores()) {
        (Some(description), Some(scores)) => format!("{description} (+{scores} points)"),
        (Some(description), None) => description.to_string(),
        _ => check.raw().to_string(),
    }
}

/// Formats the server health message.
pub fn render_health(status: &HealthStatus) -> String {
    status.message.clone()
}
