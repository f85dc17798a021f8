//! Desktop demo for the quickdots page indicator.
//!
//! Builds a four-page pager, links an indicator to it, then replays a short
//! sequence of swipe gestures. After every gesture the indicator is measured,
//! rendered into an off-screen framebuffer and printed as ASCII art:
//!
//! | Glyph | Pixel                  |
//! |-------|------------------------|
//! | `#`   | selected dot           |
//! | `o`   | unselected dot         |
//! | `.`   | background             |
//!
//! Run with `RUST_LOG=debug` to see the indicator and pager logs.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::{error, info};

use quickdots_core::framebuffer::FrameBuffer;
use quickdots_core::ui::{Drawable, MeasureSpec, Padding, Theme, TouchEvent, TouchPoint};
use quickdots_core::{DotsConfig, DotsResult, Pager, QuickDots};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Simulated screen size the pager covers.
const SCREEN_WIDTH_PX: u32 = 320;
const SCREEN_HEIGHT_PX: u32 = 240;

/// Number of pages in the demo pager.
const PAGES: usize = 4;

/// Swipe gestures replayed by the demo, as (start x, end x) pairs.
const GESTURES: [(u16, u16); 6] = [
    (260, 120),
    (260, 120),
    (260, 240),
    (260, 120),
    (260, 120),
    (60, 300),
];

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Measure and draw the indicator off-screen, then print it.
fn render(dots: &mut QuickDots, theme: &Theme) {
    let size = dots.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    let mut fb = FrameBuffer::new(size, theme.palette.background);

    // FrameBuffer drawing is infallible
    let Ok(()) = dots.draw(&mut fb);
    dots.mark_clean();

    for y in 0..size.height as i32 {
        let row: String = (0..size.width as i32)
            .map(|x| glyph(fb.pixel(Point::new(x, y)), dots, theme))
            .collect();
        println!("  {row}");
    }
}

fn glyph(pixel: Option<Rgb565>, dots: &QuickDots, theme: &Theme) -> char {
    match pixel {
        Some(color) if color == dots.selected_color() => '#',
        Some(color) if color == dots.unselected_color() => 'o',
        Some(color) if color == theme.palette.background => '.',
        _ => ' ',
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn run() -> DotsResult<()> {
    let theme = Theme::default();

    // Persist and reload the indicator config the way a host would
    let config = DotsConfig::new().with_dot_radius(3).with_dot_separation(4);
    let config = DotsConfig::from_bytes(&config.to_vec()?)?;

    let dots = Rc::new(RefCell::new(
        QuickDots::new(&config, &theme)?.with_padding(Padding::symmetric(1, 2)),
    ));

    let screen = embedded_graphics::primitives::Rectangle::new(
        Point::zero(),
        Size::new(SCREEN_WIDTH_PX, SCREEN_HEIGHT_PX),
    );
    let mut pager = Pager::new(screen);
    let titles: Vec<String> = (1..=PAGES).map(|n| format!("Page {n}")).collect();
    let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    pager.set_pages(&title_refs)?;

    let link = QuickDots::link_pager(&dots, &mut pager)?;
    info!("Linked indicator to a {PAGES}-page pager");
    render(&mut dots.borrow_mut(), &theme);

    for (start, end) in GESTURES {
        pager.handle_touch(TouchEvent::Press(TouchPoint::new(start, 120)))?;
        let result = pager.handle_touch(TouchEvent::Drag(TouchPoint::new(end, 120)))?;
        info!(
            "Swipe {start} -> {end}: {:?}, showing {}",
            result,
            pager.current_title().unwrap_or("-")
        );

        let mut dots = dots.borrow_mut();
        if dots.is_dirty() || dots.is_layout_requested() {
            render(&mut dots, &theme);
        }
    }

    link.unlink(&mut pager);
    pager.select_page(0)?;
    info!(
        "Unlinked; indicator stays on dot {}",
        dots.borrow().current_index()
    );

    Ok(())
}

fn main() {
    env_logger::init();
    info!("Starting quickdots demo");

    if let Err(e) = run() {
        error!("Demo failed: {}", e);
        std::process::exit(1);
    }

    info!("Demo exiting");
}
