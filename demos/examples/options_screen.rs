// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An options screen driven by scripted input, printed to the terminal.
//!
//! This example shows how to combine:
//! - `thicket_widgets` for the screen, options and option list,
//! - `thicket_hud` for an overlay drawn with the same surface,
//! - `EngineEvents` for reacting to the screen opening and the window resizing.
//!
//! Run:
//! - `cargo run -p thicket_demos --example options_screen`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Point, Rect};
use thicket_hud::{Hud, HudId, HudRegistry, HudVisibility, TextHudComponent};
use thicket_widgets::{
    BooleanOption, Color, ConfigOption, CyclingOption, EngineEvents, Key, Modifiers, Resolution,
    ScissorBox, ScissorSink, Screen, ScreenPhase, StringOption, Surface, TextPainter,
};

/// Prints text and scissor changes; rectangles are only counted.
#[derive(Debug, Default)]
struct Terminal {
    fills: usize,
    quiet: bool,
}

impl ScissorSink for Terminal {
    fn set_scissor(&mut self, scissor: Option<ScissorBox>) {
        if self.quiet {
            return;
        }
        match scissor {
            Some(b) => println!("  scissor {}x{} at ({}, {})", b.width, b.height, b.x, b.y),
            None => println!("  scissor off"),
        }
    }
}

impl TextPainter for Terminal {
    fn draw_text(&mut self, text: &str, origin: Point, _argb: u32, _shadow: bool) {
        if self.quiet {
            return;
        }
        println!("  text {text:?} at ({}, {})", origin.x, origin.y);
    }
}

impl Surface for Terminal {
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {
        self.fills += 1;
    }

    fn text_width(&self, text: &str) -> f64 {
        6.0 * text.chars().count() as f64
    }
}

const DIFFICULTIES: [&str; 4] = ["Peaceful", "Easy", "Normal", "Hard"];

fn main() {
    let resolution = Resolution::new(1708, 960, 2.0);

    let mut events = EngineEvents::new();
    events.on_open_screen(|phase, title| {
        if phase == ScreenPhase::Post {
            println!("opened {}", title.unwrap_or("<none>"));
        }
    });
    events.on_resolution_changed(|resolution| {
        println!("resized to {:?}", resolution.logical_size());
    });

    // Settings live outside the UI; options only hold accessors.
    let vsync = Rc::new(Cell::new(true));
    let difficulty = Rc::new(Cell::new(2_usize));
    let name = Rc::new(RefCell::new(String::from("Steve")));

    let vsync_option = {
        let (get, set) = (Rc::clone(&vsync), Rc::clone(&vsync));
        BooleanOption::new("options.vsync", move || get.get(), move |v| set.set(v))
            .with_tooltip("Limits the frame rate to the display's refresh rate")
    };
    let difficulty_option = {
        let (cycle, message) = (Rc::clone(&difficulty), Rc::clone(&difficulty));
        CyclingOption::new(
            "options.difficulty",
            move |amount| {
                let len = DIFFICULTIES.len();
                let step = usize::try_from(amount.rem_euclid(4)).unwrap_or(0);
                cycle.set((cycle.get() + step) % len);
            },
            move || format!("Difficulty: {}", DIFFICULTIES[message.get()]),
        )
    };
    let name_option = {
        let (get, set) = (Rc::clone(&name), Rc::clone(&name));
        StringOption::new(
            "options.name",
            move || get.borrow().clone(),
            move |value| *set.borrow_mut() = value.to_owned(),
        )
        .with_predicate(|value| value.chars().all(char::is_alphanumeric))
    };

    let mut screen = Screen::new("Options", resolution);
    screen.set_translator(|key: &str| match key {
        "options.vsync" => String::from("VSync"),
        "options.name" => String::from("Player name"),
        other => other.to_owned(),
    });
    events.fire_open_screen(ScreenPhase::Pre, Some(screen.title()));
    {
        let mut list = screen.add_option_list(Rect::new(0.0, 32.0, 854.0, 92.0));
        list.add_pair(&vsync_option, Some(&difficulty_option as &dyn ConfigOption));
        list.add_single(&name_option);
    }
    events.fire_open_screen(ScreenPhase::Post, Some(screen.title()));

    let mut hud: Hud<Terminal> = Hud::new(HudId::new("demo", "status"));
    if let Err(err) = hud.add_component(Box::new(TextHudComponent::new(
        HudId::new("demo", "status/fps"),
        Point::new(2.0, 2.0),
        "60 fps",
    ))) {
        eprintln!("{err}");
        return;
    }
    let mut huds = HudRegistry::new();
    huds.register(hud);
    let visibility = HudVisibility {
        world_loaded: true,
        hud_hidden: false,
        screen_open: true,
    };
    let logical = resolution.logical_size();
    huds.init_all(&visibility, logical.width, logical.height);

    let script: &[(&str, Key)] = &[
        ("tab", Key::Tab),
        ("enter", Key::Enter),
        ("right", Key::Right),
        ("enter", Key::Enter),
        ("down", Key::Down),
    ];
    for (label, key) in script {
        let handled = screen.key_pressed(*key, Modifiers::empty());
        println!("{label}: handled={handled} focused={:?}", screen.focused());
    }
    for ch in "123".chars() {
        screen.char_typed(ch);
    }
    screen.char_typed('!');
    println!(
        "vsync={} difficulty={} name={}",
        vsync.get(),
        DIFFICULTIES[difficulty.get()],
        name.borrow()
    );

    let mut terminal = Terminal::default();
    // Hover the first entry long enough for its tooltip.
    let pointer = Point::new(300.0, 46.0);
    for frame in 0..=45_u64 {
        terminal.quiet = frame != 0 && frame != 45;
        if !terminal.quiet {
            println!("frame {frame}:");
        }
        screen.render(&mut terminal, pointer, frame * 20, 0.0);
    }
    println!("hud:");
    huds.render_all(&visibility, &mut terminal, 0.0);
    println!("{} rectangles", terminal.fills);

    let resized = Resolution::new(1280, 720, 2.0);
    screen.resize(resized);
    events.fire_resolution_changed(resized);
}
