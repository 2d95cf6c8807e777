//! Render command implementation
//!
//! Font file in, one encoded image out.

use std::fs::{self, File};
use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};
use textstrip::prelude::*;

use crate::cli::RenderArgs;

pub fn run(args: &RenderArgs) -> Result<()> {
    let text = get_input_text(args)?;
    let color = parse_color(&args.foreground)?;
    let font = textstrip::load_font_file(&args.font_file)?;

    let engine = init_engine()?;
    let config = RasterizerConfig::default().with_kerning(!args.no_kerning);
    let mut rasterizer = textstrip::create_rasterizer_with_config(&engine, font, config)
        .with_context(|| format!("cannot open {}", args.font_file.display()))?;

    log::debug!("rendering {} chars at {}px", text.chars().count(), args.font_size);
    let raster = rasterizer.rasterize(&text, args.font_size)?;

    let format = textstrip_export::OutputFormat::from(args.format);
    let encoded = format.encode(&raster, Some(color))?;
    write_output(args, &encoded)?;

    if !args.quiet {
        eprintln!(
            "Rendered {}x{} {} (origin {},{}){}",
            raster.width,
            raster.height,
            format.extension(),
            raster.origin_x,
            raster.origin_y,
            args.output_file
                .as_ref()
                .map(|p| format!(" to {}", p.display()))
                .unwrap_or_default()
        );
    }

    free_raster(raster);
    destroy_rasterizer(rasterizer);
    shutdown_engine(engine)?;
    Ok(())
}

fn get_input_text(args: &RenderArgs) -> Result<String> {
    // Priority: text positional > --text > --text-file > stdin
    if let Some(ref text) = args.text {
        return Ok(decode_unicode_escapes(text));
    }

    if let Some(ref text) = args.text_arg {
        return Ok(decode_unicode_escapes(text));
    }

    if let Some(ref path) = args.text_file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read text file {}", path.display()))?;
        return Ok(strip_line_ending(text));
    }

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(strip_line_ending(text))
}

/// Files and pipes usually end in a newline that is not part of the line
fn strip_line_ending(mut text: String) -> String {
    let trimmed = text.trim_end_matches(['\r', '\n']).len();
    text.truncate(trimmed);
    text
}

/// Expand `\u{X...}` and `\uXXXX` escapes; anything malformed stays literal
fn decode_unicode_escapes(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&'u') {
            let mut lookahead = chars.clone();
            lookahead.next(); // 'u'

            let decoded = if lookahead.peek() == Some(&'{') {
                lookahead.next();
                let mut hex = String::new();
                let mut closed = false;
                for c in lookahead.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    hex.push(c);
                }
                closed
                    .then(|| u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32))
                    .flatten()
            } else {
                let hex: String = lookahead.by_ref().take(4).collect();
                if hex.len() == 4 {
                    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
                } else {
                    None
                }
            };

            if let Some(decoded) = decoded {
                result.push(decoded);
                chars = lookahead;
                continue;
            }
        }
        result.push(ch);
    }

    result
}

fn parse_color(color_str: &str) -> Result<Color> {
    let hex = color_str.trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("Color must be in RRGGBB or RRGGBBAA format, got {:?}", color_str);
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).context("Invalid color format");
    let a = if hex.len() == 8 { channel(6)? } else { 255 };

    Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, a))
}

fn write_output(args: &RenderArgs, data: &[u8]) -> Result<()> {
    if let Some(ref path) = args.output_file {
        let mut file =
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        file.write_all(data)?;
    } else {
        io::stdout().write_all(data)?;
    }

    Ok(())
}
