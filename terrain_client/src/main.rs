/**
 * Level Editor - Main Entry Point
 *
 */
mod config;
mod editor;

use crate::editor::{EditorError, LevelEditor};
use phf::phf_map;
use std::io::{BufRead, Write};
use terrain_common::Portal;
use terrain_common::spatial::{LEVEL_HEIGHT, LEVEL_WIDTH};

// Macro to parse typed arguments or print usage and return
macro_rules! parse_args {
    ($parts:expr, $usage:expr, $($name:ident : $ty:ty),+) => {
        let mut iter = $parts.iter();
        $( let $name = match iter.next().and_then(|s| s.parse::<$ty>().ok()) {
            Some(v) => v,
            None => { println!("Usage: {}", $usage); return; }
        }; )+
    };
}

// Run an edit and print success/failure
fn with_feedback<A>(ctx: &mut EditorContext, success: &str, failure: &str, action: A)
where A: FnOnce(&mut LevelEditor) -> Result<(), EditorError>
{
    match action(&mut ctx.editor) {
        Ok(_) => println!("{}", success),
        Err(e) => println!("{}: {}", failure, e),
    }
}

// Perfect-hash map for command dispatch
static COMMAND_MAP: phf::Map<&'static str, fn(&mut EditorContext, &[&str])> = phf_map! {
    "new"     => cmd_new,
    "t"       => cmd_tile,
    "b"       => cmd_block,
    "portal"  => cmd_portal,
    "portals" => cmd_portals,
    "walk"    => cmd_walk,
    "show"    => cmd_show,
};

/// Holds the editor session for command handlers
struct EditorContext {
    world: String,
    editor: LevelEditor,
}

fn cmd_new(ctx: &mut EditorContext, parts: &[&str]) {
    parse_args!(parts, "new <height> <width> <x> <y>", height: i32, width: i32, x: i32, y: i32);
    let dropped = ctx.editor.reset(&ctx.world, height, width, x, y);
    if dropped > 0 {
        println!("Discarded {} portals from the previous terrain.", dropped);
    }
    let terrain = ctx.editor.terrain();
    println!("New terrain {} ({} columns x {} rows)", ctx.editor.location(), terrain.columns(), terrain.rows());
}

fn cmd_tile(ctx: &mut EditorContext, parts: &[&str]) {
    parse_args!(parts, "t <col> <row> <tile_id>", col: usize, row: usize, id: u32);
    with_feedback(ctx, "Tile set.", "Failed to set tile", |e| e.set_tile(col, row, id));
}

fn cmd_block(ctx: &mut EditorContext, parts: &[&str]) {
    parse_args!(parts, "b <col> <row> <0|1>", col: usize, row: usize, flag: u8);
    let blocked = flag != 0;
    with_feedback(ctx, "Hitmap updated.", "Failed to update hitmap", |e| e.set_blocked(col, row, blocked));
}

fn cmd_portal(ctx: &mut EditorContext, parts: &[&str]) {
    parse_args!(
        parts,
        "portal <x> <y> <width> <height> <destination> <dest_x> <dest_y>",
        x: i32, y: i32, width: i32, height: i32, destination: String, dest_x: f32, dest_y: f32
    );
    ctx.editor.add_portal(Portal::new(x, y, width, height, destination, dest_x, dest_y));
    println!("Portal added.");
}

fn cmd_portals(ctx: &mut EditorContext, _parts: &[&str]) {
    println!("\nPortals:");
    println!("--------");
    let portals = ctx.editor.portals();
    if portals.is_empty() {
        println!("No portals placed.");
    } else {
        println!("  #  | Rect (x,y,w,h)      | Destination          | Arrive at");
        println!("-----|---------------------|----------------------|-----------");
        for (i, p) in portals.iter().enumerate() {
            let rect = format!("{},{},{},{}", p.x, p.y, p.width, p.height);
            println!("{:4} | {:19} | {:20} | ({:.1}, {:.1})",
                     i, rect, p.destination, p.destination_x, p.destination_y);
        }
    }
    println!();
}

fn cmd_walk(ctx: &mut EditorContext, parts: &[&str]) {
    parse_args!(parts, "walk <px> <py>", px: f32, py: f32);
    match ctx.editor.portal_at(px, py) {
        Ok(Some(portal)) => println!(
            "Portal to {} (arrive at {:.1}, {:.1})",
            portal.resolve_destination(&ctx.editor.location()),
            portal.destination_x,
            portal.destination_y
        ),
        Ok(None) => println!("No portal at ({}, {}).", px, py),
        Err(e) => println!("Cannot walk there: {}", e),
    }
}

fn cmd_show(ctx: &mut EditorContext, _parts: &[&str]) {
    println!("{}", ctx.editor.render());
}

fn main() {
    env_logger::init();

    let world = config::world_name();
    let (x, y) = config::DEFAULT_ORIGIN;
    let editor = LevelEditor::new(&world, LEVEL_HEIGHT, LEVEL_WIDTH, x, y);
    println!("Editing {}", editor.location());

    let mut ctx = EditorContext { world, editor };

    let stdin = std::io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        if std::io::stdout().flush().is_err() { break; }
        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::warn!("Failed to read command: {}", e);
                break;
            }
        }
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() { continue; }
        // Dispatch command
        if let Some(&handler) = COMMAND_MAP.get(parts[0]) {
            handler(&mut ctx, &parts[1..]);
        } else if parts[0] == "q" {
            println!("Exiting...");
            break;
        } else {
            println!("Unknown command");
        }
    }
}
