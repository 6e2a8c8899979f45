use crate::checker::{CheckReport, Outcome};

pub fn header() -> String {
	format!("API Test Results:\n{}", "-".repeat(40))
}

/// One line per check: indicator, path padded to 20, then either
/// `<status> <elapsed>s` or `ERROR <message>`.
pub fn render_line(report: &CheckReport) -> String {
	match &report.outcome {
		Outcome::Done { status, elapsed, passed } => {
			let indicator = if *passed { "✅" } else { "❌" };
			format!("{} {:<20} {:<10} {:.2}s", indicator, report.path, status, elapsed.as_secs_f64())
		}
		Outcome::Transport { error } => format!("❌ {:<20} ERROR {}", report.path, error),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;

	fn done(path: &str, status: u16, millis: u64, passed: bool) -> CheckReport {
		CheckReport {
			path: path.into(),
			outcome: Outcome::Done { status, elapsed: Duration::from_millis(millis), passed },
		}
	}

	#[test]
	fn pass_line_uses_fixed_widths_and_two_decimals() {
		let line = render_line(&done("/api/user", 200, 120, true));
		assert_eq!(line, "✅ /api/user            200        0.12s");
	}

	#[test]
	fn failed_status_line_keeps_the_status_code() {
		let line = render_line(&done("/api/top-genres", 404, 50, false));
		assert_eq!(line, "❌ /api/top-genres      404        0.05s");
	}

	#[test]
	fn transport_line_shows_error_text_instead_of_timing() {
		let report = CheckReport {
			path: "/api/user".into(),
			outcome: Outcome::Transport { error: "connection refused".into() },
		};
		assert_eq!(render_line(&report), "❌ /api/user            ERROR connection refused");
	}

	#[test]
	fn header_is_title_plus_forty_dash_rule() {
		let header = header();
		let lines: Vec<&str> = header.lines().collect();
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0], "API Test Results:");
		assert_eq!(lines[1], "-".repeat(40));
	}
}
