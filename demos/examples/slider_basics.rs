// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider basics.
//!
//! Drive a horizontal slider with preset buttons, a thumb drag that leaves the
//! widget, and a track click. User-set values are "saved" when committed.
//!
//! Run:
//! - `cargo run -p understory_slider_demos --example slider_basics`

use kurbo::{Point, Size};
use understory_slider::pointer::PointerHub;
use understory_slider::{Slider, SliderConfig, Transition};
use understory_slider_demos::{init_logging, render};

const CELLS: usize = 40;

fn main() {
    init_logging();

    let hub = PointerHub::new();
    let mut slider = Slider::new(SliderConfig::new().with_initial_ratio(0.5), &hub);
    // The track sits at (20, 100) in page space.
    let track_origin = Point::new(20.0, 100.0);
    let track = Size::new(200.0, 10.0);
    let mut saved: Option<f64> = None;

    println!("start      {}", render(&slider.snapshot(), CELLS));

    // Preset buttons.
    for preset in [0.0, 0.5, 1.0] {
        slider.set_explicit_ratio(preset);
        println!("preset     {}", render(&slider.snapshot(), CELLS));
    }

    // Grab the thumb at the right end of the track and drag left, then far below.
    let thumb = Point::new(track_origin.x + track.width, track_origin.y + 5.0);
    slider.press_thumb(thumb, track);
    println!("press      {}", render(&slider.snapshot(), CELLS));
    for pos in [
        Point::new(180.0, 105.0),
        Point::new(120.0, 140.0),
        Point::new(90.0, 400.0),
    ] {
        hub.pointer_move(pos);
        println!("move {:>5} {}", pos.x, render(&slider.snapshot(), CELLS));
    }
    let before = slider.snapshot();
    hub.pointer_up(Point::new(100.0, 400.0));
    save_if_committed(
        Transition {
            before,
            after: slider.snapshot(),
        },
        &mut saved,
    );
    println!("release    {}", render(&slider.snapshot(), CELLS));

    // Click a quarter of the way along the track.
    let t = slider.press_track(Point::new(50.0, 5.0), track);
    save_if_committed(t, &mut saved);
    println!("click      {}", render(&slider.snapshot(), CELLS));

    // Stray events after the gesture are ignored.
    hub.pointer_move(Point::new(0.0, 0.0));
    println!("stray      {}", render(&slider.snapshot(), CELLS));

    if let Some(value) = saved {
        println!("saved value: {value:.2}");
    }
}

fn save_if_committed(t: Transition, saved: &mut Option<f64>) {
    if t.committed() {
        *saved = Some(t.after.ratio);
    }
}
