//! Startup banner.

use std::io::{self, Write};

/// Columns between the left and right borders.
const INNER_WIDTH: usize = 78;

const TITLE: &str = "Stub VPS Server — Change Notification Receiver";
const STATUS: &str = "Status: Waiting for notifications...";

/// URL a local client posts notifications to.
#[must_use]
pub fn changelog_url(port: u16) -> String {
    format!("http://localhost:{port}/changelog")
}

fn rule(left: char, right: char) -> String {
    format!("{left}{}{right}", "─".repeat(INNER_WIDTH))
}

fn row(content: &str) -> String {
    // Padding counts chars, so the em-dash in the title takes one column.
    format!("│ {content:<width$}│", width = INNER_WIDTH - 1)
}

/// Render the bordered banner announcing the listening URL.
#[must_use]
pub fn render_banner(port: u16) -> String {
    let lines = [
        rule('┌', '┐'),
        row(TITLE),
        rule('├', '┤'),
        row(&format!("Listening on: {}", changelog_url(port))),
        row(STATUS),
        rule('└', '┘'),
    ];
    let mut banner = lines.join("\n");
    banner.push_str("\n\n");
    banner
}

/// Print the banner to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_banner(port: u16) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(render_banner(port).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_show_listening_url_with_port() {
        let banner = render_banner(4000);
        assert!(banner.contains("│ Listening on: http://localhost:4000/changelog "));
    }

    #[test]
    fn should_render_every_line_eighty_columns_wide() {
        for port in [1, 3456, 65535] {
            let banner = render_banner(port);
            for line in banner.lines().filter(|line| !line.is_empty()) {
                assert_eq!(line.chars().count(), 80, "line {line:?}");
            }
        }
    }

    #[test]
    fn should_frame_banner_with_box_corners() {
        let banner = render_banner(3456);
        let lines: Vec<&str> = banner.lines().collect();
        assert!(lines[0].starts_with('┌') && lines[0].ends_with('┐'));
        assert!(lines[2].starts_with('├') && lines[2].ends_with('┤'));
        assert!(lines[5].starts_with('└') && lines[5].ends_with('┘'));
        assert!(banner.ends_with("┘\n\n"));
    }

    #[test]
    fn should_include_title_and_status() {
        let banner = render_banner(3456);
        assert!(banner.contains(TITLE));
        assert!(banner.contains(STATUS));
    }

    #[test]
    fn should_build_changelog_url() {
        assert_eq!(changelog_url(3456), "http://localhost:3456/changelog");
    }
}
