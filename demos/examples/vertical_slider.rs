// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical slider and shared pointer hub.
//!
//! Two vertical sliders share one hub. Only the slider whose thumb was pressed
//! follows the pointer, dragging up raises the value, and dropping a slider
//! releases its subscription.
//!
//! Run:
//! - `RUST_LOG=understory_slider=trace cargo run -p understory_slider_demos --example vertical_slider`

use kurbo::{Point, Size};
use understory_slider::pointer::PointerHub;
use understory_slider::{Axis, Slider, SliderConfig};
use understory_slider_demos::{init_logging, render};

const CELLS: usize = 20;

fn main() {
    init_logging();

    let hub = PointerHub::new();
    let config = SliderConfig::new().with_axis(Axis::Vertical);
    let mut volume = Slider::new(config.with_initial_ratio(0.2), &hub);
    let mut balance = Slider::new(config.with_initial_ratio(0.5), &hub);
    let track = Size::new(12.0, 160.0);
    println!("listeners: {}", hub.listener_count());

    volume.press_thumb(Point::new(30.0, 300.0), track);
    for y in [280.0, 240.0, 200.0, 330.0] {
        hub.pointer_move(Point::new(30.0, y));
        println!(
            "y={y:<5} volume {}  balance {}",
            render(&volume.snapshot(), CELLS),
            render(&balance.snapshot(), CELLS)
        );
    }
    hub.pointer_up(Point::new(30.0, 330.0));

    // Click near the top of the balance track.
    balance.press_track(Point::new(6.0, 16.0), track);
    println!("balance clicked {}", render(&balance.snapshot(), CELLS));

    drop(volume);
    println!("listeners after dropping volume: {}", hub.listener_count());
}
