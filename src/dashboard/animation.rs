//! The count-up display: one second total, a frame every 16 ms, linear
//! from the starting value to the fetched one.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;

use crate::stats::StatsSummary;

pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
pub const ANIMATION_DURATION: Duration = Duration::from_millis(1000);

/// One interpolated value per frame. The final frame lands exactly on
/// `end`, whatever floating point does to the intermediate steps.
pub fn frames(start: f64, end: f64) -> Vec<f64> {
    let steps = (ANIMATION_DURATION.as_millis() / FRAME_INTERVAL.as_millis()) as usize;
    let mut values = Vec::with_capacity(steps);
    for step in 1..=steps {
        let t = step as f64 / steps as f64;
        values.push(start + (end - start) * t);
    }
    values[steps - 1] = end;
    values
}

/// WPM renders as a whole number, accuracy with one decimal. An accuracy of
/// zero means no record carried one; the column shows a placeholder instead
/// of a made-up figure.
pub fn format_line(wpm: f64, accuracy: f64) -> String {
    let wpm = wpm.round() as i64;
    match accuracy > 0.0 {
        true => format!("wpm {wpm:>4}   acc {accuracy:>5.1}%"),
        false => format!("wpm {wpm:>4}   acc    --"),
    }
}

pub async fn render(summary: &StatsSummary) -> Result<()> {
    let wpm_frames = frames(0.0, summary.highest_wpm);
    let accuracy_frames = frames(0.0, summary.highest_accuracy);

    let mut stdout = std::io::stdout();
    for (wpm, accuracy) in wpm_frames.iter().zip(&accuracy_frames) {
        write!(stdout, "\r{}", format_line(*wpm, *accuracy))?;
        stdout.flush()?;
        tokio::time::sleep(FRAME_INTERVAL).await;
    }
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_frame_per_tick_over_the_fixed_duration() {
        assert_eq!(frames(0.0, 63.0).len(), 62);
    }

    #[test]
    fn the_last_frame_is_exactly_the_target() {
        // 0.1 + 96.9 rounds past 97.0 in f64; the contract holds anyway.
        assert_eq!(*frames(0.1, 97.0).last().unwrap(), 97.0);
        assert_eq!(*frames(0.0, 63.0).last().unwrap(), 63.0);
        assert_eq!(*frames(80.0, 60.0).last().unwrap(), 60.0);
    }

    #[test]
    fn frames_move_monotonically_toward_the_target() {
        let rising = frames(0.0, 63.0);
        assert!(rising.windows(2).all(|pair| pair[0] <= pair[1]));

        let falling = frames(97.0, 60.0);
        assert!(falling.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn a_degenerate_animation_sits_on_the_value() {
        let flat = frames(63.0, 63.0);
        assert!(flat.iter().all(|value| *value == 63.0));
    }

    #[test]
    fn line_formatting_rounds_wpm_and_keeps_one_accuracy_decimal() {
        assert_eq!(format_line(62.5, 97.04), "wpm   63   acc  97.0%");
        assert_eq!(format_line(5.0, 100.0), "wpm    5   acc 100.0%");
    }

    #[test]
    fn zero_accuracy_renders_a_placeholder() {
        assert_eq!(format_line(80.0, 0.0), "wpm   80   acc    --");
    }
}
