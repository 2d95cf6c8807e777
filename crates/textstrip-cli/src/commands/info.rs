//! Info command implementation
//!
//! Prints what the engine sees in a font file.

use anyhow::{Context, Result};
use textstrip::prelude::*;

use crate::cli::InfoArgs;

pub fn run(args: &InfoArgs) -> Result<()> {
    let data = textstrip::load_font_file(&args.font_file)?;
    let size = data.len();

    let engine = init_engine()?;
    let face = engine
        .open_face_at(data, args.face_index)
        .with_context(|| format!("cannot open {}", args.font_file.display()))?;

    println!("textstrip v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Font:         {}", args.font_file.display());
    println!("Face index:   {}", face.face_index());
    println!("Bytes:        {}", size);
    println!("Engine:       {}", engine.name());
    println!("Units per em: {}", face.units_per_em());
    match face.glyph_count() {
        Some(count) => println!("Glyphs:       {}", count),
        None => println!("Glyphs:       unknown"),
    }
    match face.kern_table() {
        Some(kern) => println!("Kerning:      yes ({} pairs)", kern.len()),
        None => println!("Kerning:      no"),
    }

    drop(face);
    shutdown_engine(engine)?;
    Ok(())
}
