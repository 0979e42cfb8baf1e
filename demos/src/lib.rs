// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the `understory_slider` demos.
//!
//! Run:
//! - `cargo run -p understory_slider_demos --example slider_basics`
//! - `RUST_LOG=understory_slider=trace cargo run -p understory_slider_demos --example vertical_slider`

use tracing_subscriber::EnvFilter;
use understory_slider::SliderSnapshot;

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Draws a slider as a line of text, `cells` characters wide.
///
/// The filled part is `ratio * cells` long, mirroring a fill bar whose width
/// is a percentage of the track.
#[must_use]
pub fn render(snapshot: &SliderSnapshot, cells: usize) -> String {
    let filled = fill_cells(snapshot.ratio, cells);
    let mut bar = String::with_capacity(cells + 32);
    bar.push('[');
    for i in 0..cells {
        bar.push(if i < filled { '=' } else { ' ' });
    }
    bar.push(']');
    bar.push_str(&format!(" {:.2}", snapshot.ratio));
    if snapshot.sliding {
        bar.push_str(" sliding");
    }
    if !snapshot.pristine {
        bar.push_str(" (user)");
    }
    bar
}

fn fill_cells(ratio: f64, cells: usize) -> usize {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "ratio is in [0, 1], so the product fits in usize"
    )]
    let filled = (ratio * cells as f64).round() as usize;
    filled.min(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fills_proportionally() {
        let snap = SliderSnapshot {
            ratio: 0.5,
            sliding: false,
            pristine: true,
        };
        assert_eq!(render(&snap, 4), "[==  ] 0.50");
    }

    #[test]
    fn render_marks_user_values() {
        let snap = SliderSnapshot {
            ratio: 1.0,
            sliding: true,
            pristine: false,
        };
        assert_eq!(render(&snap, 2), "[==] 1.00 sliding (user)");
    }
}
