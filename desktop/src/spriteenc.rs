use std::fmt::Write;

use argh::FromArgs;
use log::trace;

/// Sprite encoder options
#[derive(FromArgs)]
struct Args {
    /// input image path
    #[argh(positional)]
    input: String,

    /// generated array identifier
    #[argh(option, short = 'n', default = "String::from(\"SPRITE\")")]
    name: String,

    /// output file path (stdout when omitted)
    #[argh(option, short = 'o')]
    output: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let image = image::open(&args.input).expect("Failed to open input image");
    if image.width() > 255 || image.height() > 255 {
        panic!("Input image is too large (max 255x255)");
    }
    let rgba = image.into_rgba8();
    let width = rgba.width() as u8;
    let height = rgba.height() as u8;

    let stream = greyblit_core::encode(width, height, |x, y| {
        let pixel = rgba.get_pixel(x, y).0;
        trace!(
            "({x:3},{y:3}) #{:02x}{:02x}{:02x}{:02x}",
            pixel[0], pixel[1], pixel[2], pixel[3]
        );
        pixel
    });

    let code = render_array(&args.name, width, height, &stream);

    match &args.output {
        Some(path) => std::fs::write(path, code).expect("Failed to write output file"),
        None => print!("{code}"),
    }
}

/// Render the stream as a Rust source declaration, one line per column.
fn render_array(name: &str, width: u8, height: u8, stream: &[u8]) -> String {
    let bands = (height as usize).div_ceil(8);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "/// {width}x{height} two-plane sprite ({} bytes).",
        stream.len()
    );
    let _ = writeln!(out, "pub static {name}: [u8; {}] = [", stream.len());
    let _ = writeln!(out, "    {width}, {height}, // width, height");
    if bands > 0 {
        for (column, pairs) in stream[2..].chunks(bands * 2).enumerate() {
            let _ = write!(out, "   ");
            for byte in pairs {
                let _ = write!(out, " 0x{byte:02x},");
            }
            let _ = writeln!(out, " // column {column}");
        }
    }
    out.push_str("];\n");
    out
}
