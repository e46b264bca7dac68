//! Dialogue panel demo — macroquad entry point.
//!
//! Runs the sequencer against a built-in two-speaker scene, or a JSON
//! script document passed as `--script <path>` (portrait entries are
//! texture paths loaded relative to the working directory).

use std::collections::HashMap;
use std::sync::Arc;

use macroquad::prelude::*;

use sb_gui::dialogue_box::DialogueBox;
use sb_gui::portraits;
use sb_gui::theme::{self, CANVAS_H, CANVAS_W, palette};
use sb_playback::{Sequencer, SequencerConfig};
use sb_script::{Line, Script, ScriptDoc};

fn window_conf() -> Conf {
    Conf {
        window_title: "Sprechblase".to_owned(),
        window_width: (CANVAS_W * 2.0) as i32,
        window_height: (CANVAS_H * 2.0) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

/// Built-in demo scene with two procedural portraits.
fn demo_script() -> Script<Texture2D> {
    Script::new()
        .with_portrait(portraits::traveler())
        .with_portrait(portraits::guard())
        .with_line(Line::new(0, "Evening. Is this the road to Graustadt?"))
        .with_line(Line::new(1, "It is. The gate closes at sundown, traveler."))
        .with_line(Line::new(0, "Then I had better hurry... thank you!"))
        .with_line(Line::new(1, "Safe travels. Mind the toll bridge!"))
}

/// Load a script document and resolve its portrait paths to textures.
async fn load_script(path: &str) -> Result<Script<Texture2D>, String> {
    let doc = ScriptDoc::from_path(std::path::Path::new(path)).map_err(|e| e.to_string())?;

    // Textures load asynchronously, so resolve them up front and hand the
    // document a lookup into the preloaded map.
    let mut textures: HashMap<String, Texture2D> = HashMap::new();
    for name in &doc.portraits {
        let texture = load_texture(name)
            .await
            .map_err(|e| format!("{name}: {e}"))?;
        texture.set_filter(FilterMode::Nearest);
        textures.insert(name.clone(), texture);
    }

    doc.into_script(|name| textures.get(name).cloned())
        .map_err(|e| e.to_string())
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let script_path = args
        .windows(2)
        .find(|w| w[0] == "--script")
        .map(|w| w[1].clone());

    let script = match &script_path {
        Some(path) => match load_script(path).await {
            Ok(script) => Arc::new(script),
            Err(e) => {
                eprintln!("Failed to load script: {e}");
                Arc::new(demo_script())
            }
        },
        None => Arc::new(demo_script()),
    };

    let mut sequencer = Sequencer::new(SequencerConfig::default());
    let mut dialogue_box = DialogueBox::new();
    sequencer.load(Some(script.clone()));

    let mut started = false;
    loop {
        clear_background(palette::BLACK);
        theme::setup_virtual_canvas();
        draw_rectangle(0.0, 0.0, CANVAS_W, CANVAS_H, palette::NIGHT);

        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space) {
            if started {
                sequencer.advance(&mut dialogue_box);
            } else {
                sequencer.start(&mut dialogue_box);
                started = true;
            }
        }
        if is_key_pressed(KeyCode::R) {
            sequencer.load(Some(script.clone()));
            sequencer.start(&mut dialogue_box);
            started = true;
        }

        sequencer.tick(get_frame_time(), &mut dialogue_box);
        dialogue_box.draw();

        let hint = if started {
            "Space: next line | R: replay | Esc: quit"
        } else {
            "Space: begin | Esc: quit"
        };
        draw_text(hint, 8.0, CANVAS_H - 4.0, 16.0, palette::DIM);

        next_frame().await;
    }
}
